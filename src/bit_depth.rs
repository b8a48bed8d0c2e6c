use crate::shared_types::ROW_SIZE;


pub fn planar_to_chunky(rows: &[u8]) -> Vec<u8> {
	let mut output_pixels: Vec<u8> = Vec::with_capacity(rows.len() / ROW_SIZE * 8);

	// Each chunk is one pixel row. Byte n holds bit n of every pixel's index,
	// leftmost pixel in the most significant bit.
	for chunk in rows.chunks_exact(ROW_SIZE) {
		for bit in 0..8 {
			let mut index: u8 = 0;

			for (plane, byte) in chunk.iter().enumerate() {
				index |= ((byte >> (7 - bit)) & 1) << plane;
			}

			output_pixels.push(index);
		}
	}

	return output_pixels;
}


pub fn pack_4bpp(input_pixels: &[u8]) -> Vec<u8> {
	let mut output_pixels: Vec<u8> = Vec::with_capacity((input_pixels.len() + 1) / 2);

	// Two pixels per byte, left pixel in the high nibble. An odd trailing
	// pixel is padded with index 0.
	for pair in input_pixels.chunks(2) {
		let low: u8 = match pair.get(1) {
			Some(pixel) => pixel & 0xF,
			None => 0x00,
		};

		output_pixels.push((pair[0] & 0xF) << 4 | low);
	}

	return output_pixels;
}
