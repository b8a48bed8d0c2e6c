/// One 8-bit RGB colour.
pub type Rgb = [u8; 3];

/// Bytes per decompressed row, one per bitplane.
pub const ROW_SIZE: usize = 4;

/// Rows (and pixel columns) per tile.
pub const TILE_SIZE: usize = 8;

/// Pixels in one 8x8 tile.
pub const TILE_PIXELS: usize = TILE_SIZE * TILE_SIZE;


/// Output of a single decompression run.
#[derive(Debug, Default, PartialEq)]
pub struct DecompressedTiles {
	/// Bitplane rows, `row_count * ROW_SIZE` bytes.
	pub rows: Vec<u8>,
	pub raw_rows: usize,
	pub duplicated_rows: usize,
	/// Furthest byte touched by the art and duplicate cursors, relative to the window start.
	pub compressed_size: usize,
}


/// Row-major grid of 4-bit palette indices.
#[derive(Debug, Default, PartialEq)]
pub struct PixelGrid {
	pub width: usize,
	pub height: usize,
	pub pixels: Vec<u8>,
}

impl PixelGrid {
	pub fn new(width: usize, height: usize) -> PixelGrid {
		PixelGrid {
			width: width,
			height: height,
			pixels: vec![0; width * height],
		}
	}

	pub fn row(&self, y: usize) -> &[u8] {
		&self.pixels[y * self.width..(y + 1) * self.width]
	}
}


/// One entry of the asset catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asset {
	pub offset: usize,
	pub palette: usize,
	pub name: &'static str,
}
