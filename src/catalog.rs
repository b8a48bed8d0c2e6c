use crate::shared_types::Asset;

const fn asset(offset: usize, palette: usize, name: &'static str) -> Asset {
	Asset {
		offset: offset,
		palette: palette,
		name: name,
	}
}

/// Every known compressed tile block in the cartridge, with the palette it is shown with.
pub const ASSETS: [Asset; 28] = [
	asset(0x26000, 0x13E1, "TitleScreenTiles"),
	asset(0x2751F, 0x1B8D, "SonicHasPassedTiles"),
	asset(0x28294, 0x626C, "EndSignSprites"),
	asset(0x28B0A, 0x13F1, "TitleScreenAnimatedFingerSprites"),
	asset(0x2926B, 0x62AE, "MapScreen1Sprites"),
	asset(0x29942, 0x62AE, "MapScreen2Sprites"),
	asset(0x2A12A, 0x62AE, "GreenHillSprites"),
	asset(0x2AC3D, 0x62FE, "BridgeSprites"),
	asset(0x2B7CD, 0x634E, "JungleSprites"),
	asset(0x2C3B6, 0x639E, "LabyrinthSprites"),
	asset(0x2CF75, 0x63EE, "ScrapBrainSprites"),
	asset(0x2D9E0, 0x644E, "SkyBaseSprites"),
	asset(0x2E511, 0x656E, "SpecialStageSprites"),
	asset(0x2EEB1, 0x731C, "BossSprites"),
	asset(0x2F92E, 0x62AE, "HUDSprites"),
	asset(0x30000, 0x0F0E, "MapScreen1Tiles"),
	asset(0x31801, 0x0F2E, "MapScreen2_CreditsScreenTiles"),
	asset(0x32FE6, 0x629E, "GreenHillArt"),
	asset(0x34578, 0x62EE, "BridgeArt"),
	asset(0x35B00, 0x633E, "JungleArt"),
	asset(0x371BF, 0x638E, "LabyrinthArt"),
	asset(0x3884B, 0x63DE, "ScrapBrainArt"),
	asset(0x39CEE, 0x643E, "SkyBase1_2Art"),
	asset(0x3B3B5, 0x658E, "SkyBase3Art"),
	asset(0x3C7FE, 0x655E, "SpecialStagesArt"),
	asset(0x3DA28, 0x626C, "TrappedAnimalsSprites"),
	asset(0x3E508, 0x731C, "BossSprites2"),
	asset(0x3EF3F, 0x731C, "BossSprites3"),
];


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_are_unique_file_stems() {
		let mut names: Vec<&str> = ASSETS.iter().map(|asset| asset.name).collect();
		names.sort();
		names.dedup();

		assert_eq!(names.len(), ASSETS.len());
		assert!(names.iter().all(|name| name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')));
	}

	#[test]
	fn blocks_are_in_rom_order() {
		assert!(ASSETS.windows(2).all(|pair| pair[0].offset < pair[1].offset));
	}
}
