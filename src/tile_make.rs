use std::io::{Write, BufWriter};
use std::fs::File;
use std::path::Path;
use log::warn;

use crate::{
	bit_depth,
	error::GhoulError,
	palette::BANK_SIZE,
	shared_types::{PixelGrid, Rgb},
};


/// True when `target_path` exists and may not be replaced.
pub fn overwrite_blocked(target_path: &Path, overwrite: bool) -> bool {
	if overwrite {
		return false;
	}

	match target_path.try_exists() {
		Ok(false) => false,

		Ok(true) => {
			warn!("'{}' already exists, skipping. Use --overwrite to allow overwriting files.", target_path.display());
			true
		},

		Err(error) => {
			warn!("could not check '{}' ({}), skipping", target_path.display(), error);
			true
		},
	}
}


/// Writes `grid` as a 4-bit indexed PNG. `palette` must hold `BANK_SIZE` colours.
pub fn make_png<W: Write>(writer: W, grid: &PixelGrid, palette: &[Rgb]) -> Result<(), GhoulError> {
	let mut encoder = png::Encoder::new(writer, grid.width as u32, grid.height as u32);
	encoder.set_depth(png::BitDepth::Four);
	encoder.set_color(png::ColorType::Indexed);

	let mut rgb_palette: Vec<u8> = Vec::with_capacity(BANK_SIZE * 3);
	for colour in palette.iter().take(BANK_SIZE) {
		rgb_palette.extend_from_slice(colour);
	}
	encoder.set_palette(rgb_palette);

	// Rows are packed one at a time so every scanline starts on a byte boundary.
	let mut packed: Vec<u8> = Vec::with_capacity(grid.pixels.len() / 2);
	for y in 0..grid.height {
		packed.extend_from_slice(&bit_depth::pack_4bpp(grid.row(y)));
	}

	let mut png_writer = encoder.write_header()?;
	png_writer.write_image_data(&packed)?;
	png_writer.finish()?;
	Ok(())
}


pub fn write_png(target_path: &Path, grid: &PixelGrid, palette: &[Rgb]) -> Result<(), GhoulError> {
	let png_file: File = File::create(target_path)?;
	make_png(BufWriter::new(png_file), grid, palette)
}


/// Writes the decompressed bitplane rows verbatim.
pub fn make_raw(target_path: &Path, rows: &[u8]) -> Result<(), GhoulError> {
	let raw_file: File = File::create(target_path)?;
	let mut buffer = BufWriter::new(raw_file);
	buffer.write_all(rows)?;
	buffer.flush()?;
	Ok(())
}
