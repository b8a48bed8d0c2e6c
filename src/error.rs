use std::io;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
	#[error("invalid header marker: {found:#06x}")]
	Format { found: u16 },

	#[error("{region} read of {len} bytes at {offset:#x} is outside the {window}-byte input window")]
	OutOfBounds {
		region: &'static str,
		offset: usize,
		len: usize,
		window: usize,
	},

	#[error("row count {row_count} is not a whole number of 8-row tiles")]
	PartialTile { row_count: u16 },
}


#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
	#[error("raster width {width} is not a non-zero multiple of 8")]
	Width { width: usize },

	#[error("{pixels} pixels do not form whole 8x8 tiles")]
	PartialTile { pixels: usize },

	#[error("{tiles} tiles cannot be laid out {per_row} per row")]
	UnevenTiles { tiles: usize, per_row: usize },
}


#[derive(Debug, Error)]
pub enum GhoulError {
	#[error(transparent)]
	Io(#[from] io::Error),
	#[error(transparent)]
	Png(#[from] png::EncodingError),
	#[error(transparent)]
	Decode(#[from] DecodeError),
	#[error(transparent)]
	Layout(#[from] LayoutError),
	/// Command line combinations argh cannot reject on its own.
	#[error("{0}")]
	Parameter(String),
}
