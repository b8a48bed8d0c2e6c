use crate::{
	error::LayoutError,
	shared_types::{PixelGrid, TILE_PIXELS, TILE_SIZE},
};

/// Raster width used by every catalog entry.
pub const DEFAULT_WIDTH: usize = 128;


/// Lays out consecutive 8x8 tiles left to right, wrapping every `width / 8` tiles.
pub fn tiles_to_rect(pixels: &[u8], width: usize) -> Result<PixelGrid, LayoutError> {
	if width == 0 || width % TILE_SIZE != 0 {
		return Err(LayoutError::Width { width: width });
	}

	if pixels.len() % TILE_PIXELS != 0 {
		return Err(LayoutError::PartialTile { pixels: pixels.len() });
	}

	let tile_count: usize = pixels.len() / TILE_PIXELS;
	let tiles_per_row: usize = width / TILE_SIZE;

	if tile_count % tiles_per_row != 0 {
		return Err(LayoutError::UnevenTiles { tiles: tile_count, per_row: tiles_per_row });
	}

	let mut grid: PixelGrid = PixelGrid::new(width, tile_count / tiles_per_row * TILE_SIZE);

	for (tile_index, tile) in pixels.chunks_exact(TILE_PIXELS).enumerate() {
		let x: usize = (tile_index % tiles_per_row) * TILE_SIZE;
		let y: usize = (tile_index / tiles_per_row) * TILE_SIZE;

		for (row, source) in tile.chunks_exact(TILE_SIZE).enumerate() {
			let start: usize = (y + row) * width + x;
			grid.pixels[start..start + TILE_SIZE].copy_from_slice(source);
		}
	}

	Ok(grid)
}


#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	/// Tile `n` filled with pixel value `n`.
	fn solid_tiles(count: usize) -> Vec<u8> {
		(0..count).flat_map(|tile| std::iter::repeat(tile as u8).take(TILE_PIXELS)).collect()
	}

	#[test]
	fn two_tiles_side_by_side() {
		let grid: PixelGrid = tiles_to_rect(&solid_tiles(2), 16).unwrap();

		assert_eq!((grid.width, grid.height), (16, 8));
		for y in 0..8 {
			for x in 0..16 {
				assert_eq!(grid.row(y)[x], (x / 8) as u8, "pixel ({}, {})", x, y);
			}
		}
	}

	#[test]
	fn two_tiles_stacked() {
		let grid: PixelGrid = tiles_to_rect(&solid_tiles(2), 8).unwrap();

		assert_eq!((grid.width, grid.height), (8, 16));
		for y in 0..16 {
			assert_eq!(grid.row(y), &[(y / 8) as u8; 8]);
		}
	}

	#[test]
	fn rows_within_a_tile_keep_their_order() {
		// One tile whose row n is filled with n.
		let tile: Vec<u8> = (0..TILE_PIXELS).map(|pixel| (pixel / TILE_SIZE) as u8).collect();
		let mut pixels: Vec<u8> = solid_tiles(1);
		pixels.extend_from_slice(&tile);

		let grid: PixelGrid = tiles_to_rect(&pixels, 16).unwrap();

		for y in 0..8 {
			assert_eq!(grid.row(y)[3], 0);
			assert_eq!(grid.row(y)[12], y as u8);
		}
	}

	#[test]
	fn wraps_after_width() {
		let grid: PixelGrid = tiles_to_rect(&solid_tiles(32), DEFAULT_WIDTH).unwrap();

		assert_eq!((grid.width, grid.height), (128, 16));
		assert_eq!(grid.row(8)[0], 16);
		assert_eq!(grid.row(15)[127], 31);
	}

	#[rstest]
	#[case::zero_width(0, LayoutError::Width { width: 0 })]
	#[case::unaligned_width(12, LayoutError::Width { width: 12 })]
	#[case::uneven_tiles(24, LayoutError::UnevenTiles { tiles: 2, per_row: 3 })]
	fn rejects_incompatible_width(#[case] width: usize, #[case] expected: LayoutError) {
		assert_eq!(tiles_to_rect(&solid_tiles(2), width), Err(expected));
	}

	#[test]
	fn rejects_partial_tile() {
		assert_eq!(tiles_to_rect(&[0; 65], 8), Err(LayoutError::PartialTile { pixels: 65 }));
	}
}
