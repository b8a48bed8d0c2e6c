use std::fs;
use std::path::Path;
use log::debug;

use crate::error::{DecodeError, GhoulError};

/// Bytes handed to the decoder for each compressed block.
pub const WINDOW_SIZE: usize = 32 * 1024;

/// Bytes of palette data per asset, one per colour.
pub const PALETTE_SIZE: usize = 32;


pub fn read_rom(source_file: &Path) -> Result<Vec<u8>, GhoulError> {
	let rom: Vec<u8> = fs::read(source_file)?;
	debug!("read {} bytes from '{}'", rom.len(), source_file.display());
	Ok(rom)
}


/// Up to `WINDOW_SIZE` bytes from `offset`. Shorter near the end of the ROM,
/// empty past it.
pub fn get_window(rom: &[u8], offset: usize) -> &[u8] {
	let end: usize = std::cmp::min(offset.saturating_add(WINDOW_SIZE), rom.len());

	match rom.get(offset..end) {
		Some(window) => window,
		None => &[],
	}
}


pub fn get_palette_bytes(rom: &[u8], offset: usize) -> Result<&[u8], DecodeError> {
	rom.get(offset..offset.saturating_add(PALETTE_SIZE)).ok_or(DecodeError::OutOfBounds {
		region: "palette",
		offset: offset,
		len: PALETTE_SIZE,
		window: rom.len(),
	})
}


#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn window_is_capped() {
		let rom: Vec<u8> = vec![0xAB; WINDOW_SIZE * 2];

		assert_eq!(get_window(&rom, 16).len(), WINDOW_SIZE);
	}

	#[test]
	fn window_stops_at_rom_end() {
		let rom: Vec<u8> = (0..=255).collect();

		assert_eq!(get_window(&rom, 250), &[250, 251, 252, 253, 254, 255]);
		assert!(get_window(&rom, 256).is_empty());
		assert!(get_window(&rom, 4096).is_empty());
	}

	#[test]
	fn palette_reads_exactly_32_bytes() {
		let rom: Vec<u8> = (0..64).collect();

		assert_eq!(get_palette_bytes(&rom, 8).unwrap(), &rom[8..40]);
		assert_eq!(
			get_palette_bytes(&rom, 40),
			Err(DecodeError::OutOfBounds { region: "palette", offset: 40, len: PALETTE_SIZE, window: 64 })
		);
	}

	#[test]
	fn reads_rom_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(&[1, 2, 3]).unwrap();

		assert_eq!(read_rom(file.path()).unwrap(), vec![1, 2, 3]);
	}

	#[test]
	fn missing_rom_is_io_error() {
		let directory = tempfile::tempdir().unwrap();

		assert!(matches!(read_rom(&directory.path().join("missing.sms")), Err(GhoulError::Io(_))));
	}
}
