use std::process::ExitCode;
use std::time::Instant;
use log::{error, info, warn};

pub mod shared_types;
pub mod error;
pub mod param_validator;
pub mod tile_header;
pub mod tile_decompress;
pub mod bit_depth;
pub mod tile_transform;
pub mod palette;
pub mod rom_get;
pub mod tile_make;
pub mod catalog;

use crate::{
	error::GhoulError,
	palette::PaletteBank,
	param_validator::{Commands, DumpAllCmd, DumpCmd, TopLevel},
	shared_types::{DecompressedTiles, PixelGrid, Rgb},
};


fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let cli: TopLevel = argh::from_env();
	let instant = Instant::now();

	let result: Result<usize, GhoulError> = match cli.command {
		Commands::Dump(cmd) => process_dump(cmd).map(|_| 1),
		Commands::DumpAll(cmd) => process_all(cmd),
	};

	match result {
		Ok(count) => {
			info!("Processed {} tile blocks in {}ms.", count, instant.elapsed().as_millis());
			ExitCode::SUCCESS
		},

		Err(error) => {
			error!("{}", error);
			ExitCode::FAILURE
		},
	}
}


/// Decodes the block at `offset` and logs where it sits in the ROM.
fn decode_block(rom: &[u8], offset: usize, name: &str) -> Result<DecompressedTiles, GhoulError> {
	let tiles: DecompressedTiles = tile_decompress::decompress(rom_get::get_window(rom, offset))?;

	info!(
		"Range ${:0>5x} ${:0>5x} ; {} ; Decompressed {} bytes of graphics data from {} bytes of data, {} raw rows and {} duplicated",
		offset,
		(offset + tiles.compressed_size).saturating_sub(1),
		name,
		tiles.rows.len(),
		tiles.compressed_size,
		tiles.raw_rows,
		tiles.duplicated_rows
	);

	Ok(tiles)
}


/// Bitplane rows to an indexed raster plus the 16 colours it is drawn with.
fn render_block(rom: &[u8], tiles: &DecompressedTiles, palette_offset: usize, width: usize, bank: PaletteBank) -> Result<(PixelGrid, Vec<Rgb>), GhoulError> {
	let palette: Vec<Rgb> = palette::expand_palette(rom_get::get_palette_bytes(rom, palette_offset)?);
	let pixels: Vec<u8> = bit_depth::planar_to_chunky(&tiles.rows);
	let grid: PixelGrid = tile_transform::tiles_to_rect(&pixels, width)?;

	Ok((grid, bank.select(&palette)))
}


fn process_dump(cmd: DumpCmd) -> Result<(), GhoulError> {
	cmd.validate()?;

	let rom: Vec<u8> = rom_get::read_rom(&cmd.rom)?;

	let name: String = match cmd.raw.as_ref().or(cmd.png.as_ref()) {
		Some(path) => path.display().to_string(),
		None => String::from("-"),
	};

	let tiles: DecompressedTiles = decode_block(&rom, cmd.offset, &name)?;

	if let Some(raw_path) = &cmd.raw {
		if !tile_make::overwrite_blocked(raw_path, cmd.overwrite) {
			tile_make::make_raw(raw_path, &tiles.rows)?;
		}
	}

	// validate() guarantees the palette offset when a PNG is wanted.
	if let (Some(png_path), Some(palette_offset)) = (&cmd.png, cmd.palette) {
		if !tile_make::overwrite_blocked(png_path, cmd.overwrite) {
			let (grid, palette) = render_block(&rom, &tiles, palette_offset, cmd.width, cmd.bank)?;
			tile_make::write_png(png_path, &grid, &palette)?;
		}
	}

	Ok(())
}


fn process_all(cmd: DumpAllCmd) -> Result<usize, GhoulError> {
	let rom: Vec<u8> = rom_get::read_rom(&cmd.rom)?;
	param_validator::prepare_output_dir(&cmd.output)?;

	let mut written: usize = 0;

	for asset in catalog::ASSETS.iter() {
		let target_path = cmd.output.join(format!("{}.png", asset.name));
		let tiles: DecompressedTiles = decode_block(&rom, asset.offset, &target_path.display().to_string())?;

		if tile_make::overwrite_blocked(&target_path, cmd.overwrite) {
			continue;
		}

		let (grid, palette) = render_block(&rom, &tiles, asset.palette, cmd.width, cmd.bank)?;
		tile_make::write_png(&target_path, &grid, &palette)?;
		written += 1;
	}

	if written < catalog::ASSETS.len() {
		warn!("{} of {} images were skipped", catalog::ASSETS.len() - written, catalog::ASSETS.len());
	}

	Ok(written)
}
