use std::fs;
use std::path::{Path, PathBuf};
use argh::FromArgs;
use log::info;

use crate::{
	error::GhoulError,
	palette::PaletteBank,
	shared_types::TILE_SIZE,
	tile_transform::DEFAULT_WIDTH,
};

#[derive(FromArgs, Debug)]
/// Tool for extracting compressed tile graphics from a cartridge ROM.
pub struct TopLevel {
	#[argh(subcommand)]
	pub command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Commands {
	Dump(DumpCmd),
	DumpAll(DumpAllCmd),
}

#[derive(FromArgs, Debug)]
/// Decode one compressed tile block at a given ROM offset
#[argh(subcommand, name = "dump")]
pub struct DumpCmd {
	/// ROM image path
	#[argh(option)]
	pub rom: PathBuf,

	/// offset of the compressed block (decimal, 0x or $ prefixed hex)
	#[argh(option, from_str_fn(parse_offset))]
	pub offset: usize,

	/// write the decompressed bitplane rows to this file
	#[argh(option)]
	pub raw: Option<PathBuf>,

	/// write a 4-bit indexed PNG to this file, needs --palette
	#[argh(option)]
	pub png: Option<PathBuf>,

	/// offset of the 32-byte palette
	#[argh(option, from_str_fn(parse_offset))]
	pub palette: Option<usize>,

	/// raster width in pixels [default: 128]
	#[argh(option, default = "DEFAULT_WIDTH", from_str_fn(parse_width))]
	pub width: usize,

	/// palette half used for the PNG (low, high) [default: low]
	#[argh(option, default = "PaletteBank::Low")]
	pub bank: PaletteBank,

	/// overwrite pre-existing files
	#[argh(switch, short = 'w')]
	pub overwrite: bool,
}

#[derive(FromArgs, Debug)]
/// Decode every catalogued tile block to PNG
#[argh(subcommand, name = "dump-all")]
pub struct DumpAllCmd {
	/// ROM image path
	#[argh(option)]
	pub rom: PathBuf,

	/// output directory, created if missing [default: art]
	#[argh(option, default = "PathBuf::from(\"art\")")]
	pub output: PathBuf,

	/// raster width in pixels [default: 128]
	#[argh(option, default = "DEFAULT_WIDTH", from_str_fn(parse_width))]
	pub width: usize,

	/// palette half used for every PNG (low, high) [default: low]
	#[argh(option, default = "PaletteBank::Low")]
	pub bank: PaletteBank,

	/// overwrite pre-existing files
	#[argh(switch, short = 'w')]
	pub overwrite: bool,
}

impl DumpCmd {
	/// Combinations argh cannot express.
	pub fn validate(&self) -> Result<(), GhoulError> {
		if self.png.is_some() && self.palette.is_none() {
			return Err(GhoulError::Parameter("--png needs a palette offset, use --palette <offset>".to_string()));
		}

		Ok(())
	}
}


/// Accepts decimal, `0x` prefixed or `$` prefixed hexadecimal.
pub fn parse_offset(value: &str) -> Result<usize, String> {
	let trimmed: &str = value.trim();

	let hex: Option<&str> = trimmed.strip_prefix("0x")
		.or_else(|| trimmed.strip_prefix("0X"))
		.or_else(|| trimmed.strip_prefix('$'));

	let parsed = match hex {
		Some(digits) => usize::from_str_radix(digits, 16),
		None => trimmed.parse::<usize>(),
	};

	parsed.map_err(|e| format!("Invalid offset '{value}': {e}"))
}


pub fn parse_width(value: &str) -> Result<usize, String> {
	let width: usize = value.trim().parse::<usize>().map_err(|e| format!("Invalid width '{value}': {e}"))?;

	if width == 0 || width % TILE_SIZE != 0 {
		return Err(format!("Invalid width {width}: must be a non-zero multiple of {TILE_SIZE}"));
	}

	Ok(width)
}


pub fn prepare_output_dir(path: &Path) -> Result<(), GhoulError> {
	if !path.try_exists()? {
		fs::create_dir_all(path)?;
		info!("Created output directory '{}'", path.display());
	}

	Ok(())
}
