use crate::error::DecodeError;

pub const HEADER_SIZE: usize = 8;

/// "HY", stored little endian.
pub const TILE_MAGIC: u16 = 0x5948;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileHeader {
	pub magic: u16,
	pub duplicate_rows_offset: u16,
	pub art_data_offset: u16,
	pub row_count: u16,
}

impl TileHeader {
	pub fn tile_count(&self) -> usize {
		self.row_count as usize / 8
	}
}


pub fn get_header(data: &[u8]) -> Result<TileHeader, DecodeError> {
	if data.len() < HEADER_SIZE {
		return Err(DecodeError::OutOfBounds {
			region: "header",
			offset: 0,
			len: HEADER_SIZE,
			window: data.len(),
		});
	}

	let header: TileHeader = TileHeader {
		magic: u16::from_le_bytes([
			data[0x00], data[0x01]
		]),

		duplicate_rows_offset: u16::from_le_bytes([
			data[0x02], data[0x03]
		]),

		art_data_offset: u16::from_le_bytes([
			data[0x04], data[0x05]
		]),

		row_count: u16::from_le_bytes([
			data[0x06], data[0x07]
		]),
	};

	if header.magic != TILE_MAGIC {
		return Err(DecodeError::Format { found: header.magic });
	}

	Ok(header)
}
