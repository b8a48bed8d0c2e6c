use std::io::Cursor;
use bitstream_io::{BitReader, BitRead, LittleEndian};
use log::{debug, trace};

use crate::{
	error::DecodeError,
	shared_types::{DecompressedTiles, ROW_SIZE, TILE_SIZE},
	tile_header,
	tile_header::{TileHeader, HEADER_SIZE},
};

/// Index bytes at or above this value carry the high nibble of a 12-bit index.
const TWO_BYTE_INDEX: u8 = 0xF0;


/// Walks the per-tile control bytes, one bit per row, least significant bit first.
pub struct ControlBits<'a> {
	reader: BitReader<Cursor<&'a [u8]>, LittleEndian>,
	window: usize,
	bits_read: usize,
}

impl<'a> ControlBits<'a> {
	pub fn new(data: &'a [u8]) -> ControlBits<'a> {
		let stream: &'a [u8] = data.get(HEADER_SIZE..).unwrap_or(&[]);

		ControlBits {
			reader: BitReader::endian(Cursor::new(stream), LittleEndian),
			window: data.len(),
			bits_read: 0,
		}
	}

	/// Window offset of the control byte holding the next bit.
	pub fn offset(&self) -> usize {
		HEADER_SIZE + self.bits_read / 8
	}

	pub fn next_bit(&mut self) -> Result<bool, DecodeError> {
		match self.reader.read_bit() {
			Ok(bit) => {
				self.bits_read += 1;
				Ok(bit)
			},

			Err(_) => Err(DecodeError::OutOfBounds {
				region: "control bitstream",
				offset: self.offset(),
				len: 1,
				window: self.window,
			}),
		}
	}
}


#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DuplicateIndex {
	OneByte(u8),
	/// Low nibble of the first byte, then the second byte.
	TwoByte(u16),
}

impl DuplicateIndex {
	/// Reads one index from `data` at `cursor`, advancing the cursor past it.
	pub fn read(data: &[u8], cursor: &mut usize) -> Result<DuplicateIndex, DecodeError> {
		let first: u8 = read_bytes(data, "duplicate index", *cursor, 1)?[0];
		*cursor += 1;

		if first < TWO_BYTE_INDEX {
			return Ok(DuplicateIndex::OneByte(first));
		}

		let second: u8 = read_bytes(data, "duplicate index", *cursor, 1)?[0];
		*cursor += 1;

		Ok(DuplicateIndex::TwoByte(((first & 0x0F) as u16) << 8 | second as u16))
	}

	/// Row number within the art data.
	pub fn value(&self) -> usize {
		match *self {
			DuplicateIndex::OneByte(index) => index as usize,
			DuplicateIndex::TwoByte(index) => index as usize,
		}
	}
}


#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowSource {
	/// Fresh row at this window offset.
	Raw(usize),
	Duplicated(DuplicateIndex),
}


/// Owns the art-data and duplicate-index cursors.
pub struct RowResolver<'a> {
	data: &'a [u8],
	art_data_offset: usize,
	art_cursor: usize,
	duplicate_cursor: usize,
}

impl<'a> RowResolver<'a> {
	pub fn new(data: &'a [u8], header: &TileHeader) -> RowResolver<'a> {
		RowResolver {
			data: data,
			art_data_offset: header.art_data_offset as usize,
			art_cursor: header.art_data_offset as usize,
			duplicate_cursor: header.duplicate_rows_offset as usize,
		}
	}

	pub fn next_source(&mut self, duplicated: bool) -> Result<RowSource, DecodeError> {
		if !duplicated {
			return Ok(RowSource::Raw(self.art_cursor));
		}

		let index: DuplicateIndex = DuplicateIndex::read(self.data, &mut self.duplicate_cursor)?;
		Ok(RowSource::Duplicated(index))
	}

	/// Returns the 4-byte row for `source`. Only raw rows move the art cursor.
	pub fn resolve(&mut self, source: RowSource) -> Result<&'a [u8], DecodeError> {
		match source {
			RowSource::Raw(offset) => {
				let row: &'a [u8] = read_bytes(self.data, "art data", offset, ROW_SIZE)?;
				self.art_cursor = offset + ROW_SIZE;
				Ok(row)
			},

			RowSource::Duplicated(index) => {
				let position: usize = self.art_data_offset + index.value() * ROW_SIZE;
				read_bytes(self.data, "duplicated row", position, ROW_SIZE)
			},
		}
	}

	pub fn compressed_size(&self) -> usize {
		std::cmp::max(self.art_cursor, self.duplicate_cursor)
	}
}


fn read_bytes<'a>(data: &'a [u8], region: &'static str, offset: usize, len: usize) -> Result<&'a [u8], DecodeError> {
	data.get(offset..offset + len).ok_or(DecodeError::OutOfBounds {
		region: region,
		offset: offset,
		len: len,
		window: data.len(),
	})
}


/// Expands every tile of the compressed block at the start of `data`.
pub fn decompress(data: &[u8]) -> Result<DecompressedTiles, DecodeError> {
	let header: TileHeader = tile_header::get_header(data)?;

	if header.row_count as usize % TILE_SIZE != 0 {
		return Err(DecodeError::PartialTile { row_count: header.row_count });
	}

	let mut control: ControlBits = ControlBits::new(data);
	let mut resolver: RowResolver = RowResolver::new(data, &header);

	let mut tiles: DecompressedTiles = DecompressedTiles {
		rows: Vec::with_capacity(header.row_count as usize * ROW_SIZE),
		..DecompressedTiles::default()
	};

	for tile in 0..header.tile_count() {
		let control_offset: usize = control.offset();
		let mut duplicated_in_tile: usize = 0;

		for _row in 0..TILE_SIZE {
			let source: RowSource = resolver.next_source(control.next_bit()?)?;
			tiles.rows.extend_from_slice(resolver.resolve(source)?);

			match source {
				RowSource::Raw(_) => tiles.raw_rows += 1,
				RowSource::Duplicated(_) => {
					tiles.duplicated_rows += 1;
					duplicated_in_tile += 1;
				},
			}
		}

		trace!("tile {} (control byte at {:#x}): {} duplicated rows", tile, control_offset, duplicated_in_tile);
	}

	tiles.compressed_size = resolver.compressed_size();

	debug!(
		"decoded {} tiles: {} raw rows, {} duplicated, {} compressed bytes",
		header.tile_count(),
		tiles.raw_rows,
		tiles.duplicated_rows,
		tiles.compressed_size
	);

	Ok(tiles)
}
