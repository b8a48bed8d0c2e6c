use std::str::FromStr;

use crate::shared_types::Rgb;

/// Colours available to a 4-bit image.
pub const BANK_SIZE: usize = 16;


/// Replicates a 2-bit channel value across the whole byte.
pub fn extend_colour(value: u8) -> u8 {
	let mut extended: u8 = value & 0b11;
	extended |= extended << 2;
	extended |= extended << 4;
	return extended;
}


/// `--BBGGRR` to 8-bit RGB.
pub fn sms_to_rgb(colour: u8) -> Rgb {
	[
		extend_colour(colour >> 0),
		extend_colour(colour >> 2),
		extend_colour(colour >> 4),
	]
}


pub fn expand_palette(data: &[u8]) -> Vec<Rgb> {
	data.iter().map(|&colour| sms_to_rgb(colour)).collect()
}


/// Which 16 entries of a 32-entry palette a 4-bit image uses.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PaletteBank {
	#[default]
	Low,
	High,
}

impl PaletteBank {
	/// Up to `BANK_SIZE` entries of `palette`, padded with black when the palette runs short.
	pub fn select(&self, palette: &[Rgb]) -> Vec<Rgb> {
		let start: usize = match self {
			PaletteBank::Low => 0,
			PaletteBank::High => BANK_SIZE,
		};

		let mut bank: Vec<Rgb> = palette.iter().skip(start).take(BANK_SIZE).copied().collect();
		bank.resize(BANK_SIZE, [0x00, 0x00, 0x00]);
		return bank;
	}
}

impl FromStr for PaletteBank {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"low" => Ok(PaletteBank::Low),
			"high" => Ok(PaletteBank::High),
			_ => Err(format!("Invalid palette bank: {s}. Valid banks are: low, high")),
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, 0x00)]
	#[case(1, 0x55)]
	#[case(2, 0xAA)]
	#[case(3, 0xFF)]
	fn extends_two_bit_channel(#[case] value: u8, #[case] expected: u8) {
		assert_eq!(extend_colour(value), expected);
	}

	#[test]
	fn channels_are_red_green_blue_from_low_bits() {
		assert_eq!(sms_to_rgb(0b00_01_10), [0xAA, 0x55, 0x00]);
		assert_eq!(sms_to_rgb(0b11_00_00), [0x00, 0x00, 0xFF]);
		// Top two bits are unused.
		assert_eq!(sms_to_rgb(0b1100_0000), [0x00, 0x00, 0x00]);
	}

	#[test]
	fn expansion_preserves_order() {
		assert_eq!(
			expand_palette(&[0x3F, 0x00, 0x03]),
			vec![[0xFF, 0xFF, 0xFF], [0x00, 0x00, 0x00], [0xFF, 0x00, 0x00]]
		);
	}

	#[test]
	fn banks_split_a_full_palette() {
		let palette: Vec<Rgb> = expand_palette(&(0..32).collect::<Vec<u8>>());

		assert_eq!(PaletteBank::Low.select(&palette), palette[..16].to_vec());
		assert_eq!(PaletteBank::High.select(&palette), palette[16..].to_vec());
	}

	#[test]
	fn short_palette_is_padded() {
		let bank: Vec<Rgb> = PaletteBank::High.select(&expand_palette(&[0x3F; 20]));

		assert_eq!(bank.len(), BANK_SIZE);
		assert_eq!(bank[3], [0xFF, 0xFF, 0xFF]);
		assert_eq!(bank[4], [0x00, 0x00, 0x00]);
	}

	#[rstest]
	#[case("low", PaletteBank::Low)]
	#[case("HIGH", PaletteBank::High)]
	fn parses_bank_names(#[case] name: &str, #[case] expected: PaletteBank) {
		assert_eq!(name.parse::<PaletteBank>(), Ok(expected));
	}
}
