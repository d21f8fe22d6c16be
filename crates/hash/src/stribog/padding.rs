// Copyright 2025 Irreducible Inc.

use super::{Block, BLOCK_LEN};

/// Byte appended right after the message remainder.
pub const PADDING_MARKER: u8 = 0x80;

const LENGTH_FIELD_LEN: usize = 8;

/// A message remainder extended to one or two full blocks.
///
/// Layout: `remainder || 0x80 || 0x00.. || bitlen(remainder)`, where the length field is the
/// remainder's bit length as a little-endian `u64` in the last eight bytes. A second block is
/// used when the marker leaves no room for the length field in the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedRemainder {
	bytes: [u8; 2 * BLOCK_LEN],
	n_blocks: usize,
}

impl PaddedRemainder {
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes[..self.n_blocks * BLOCK_LEN]
	}

	pub fn n_blocks(&self) -> usize {
		self.n_blocks
	}

	/// The block holding the remainder and the marker.
	pub fn leading_block(&self) -> Block {
		self.block(0)
	}

	/// The block holding the length field.
	pub fn trailing_block(&self) -> Block {
		self.block(self.n_blocks - 1)
	}

	fn block(&self, index: usize) -> Block {
		self.bytes[index * BLOCK_LEN..(index + 1) * BLOCK_LEN]
			.try_into()
			.expect("range is one block long")
	}
}

/// Pads the final, partial block of a message.
///
/// # Panics
/// Panics if `remainder` is not shorter than a block.
pub fn pad(remainder: &[u8]) -> PaddedRemainder {
	assert!(remainder.len() < BLOCK_LEN, "remainder must be shorter than a block");

	let n_blocks = if remainder.len() + 1 + LENGTH_FIELD_LEN <= BLOCK_LEN {
		1
	} else {
		2
	};
	let end = n_blocks * BLOCK_LEN;
	let bit_len = (remainder.len() as u64) * 8;

	let mut bytes = [0u8; 2 * BLOCK_LEN];
	bytes[..remainder.len()].copy_from_slice(remainder);
	bytes[remainder.len()] = PADDING_MARKER;
	bytes[end - LENGTH_FIELD_LEN..end].copy_from_slice(&bit_len.to_le_bytes());

	PaddedRemainder { bytes, n_blocks }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_single_block_padding() {
		let padded = pad(b"abc");
		assert_eq!(padded.n_blocks(), 1);

		let bytes = padded.as_bytes();
		assert_eq!(bytes.len(), BLOCK_LEN);
		assert_eq!(&bytes[..4], b"abc\x80");
		assert!(bytes[4..56].iter().all(|&b| b == 0));
		assert_eq!(bytes[56..], 24u64.to_le_bytes());
		assert_eq!(padded.leading_block(), padded.trailing_block());
	}

	#[test]
	fn test_longest_single_block_remainder() {
		let remainder = [0x11u8; 55];
		let padded = pad(&remainder);
		assert_eq!(padded.n_blocks(), 1);
		assert_eq!(padded.as_bytes()[55], PADDING_MARKER);
		assert_eq!(padded.as_bytes()[56..], 440u64.to_le_bytes());
	}

	#[test]
	fn test_padding_spills_into_second_block() {
		for len in 56..BLOCK_LEN {
			let remainder = vec![0x22u8; len];
			let padded = pad(&remainder);
			assert_eq!(padded.n_blocks(), 2);

			let bytes = padded.as_bytes();
			assert_eq!(bytes.len(), 2 * BLOCK_LEN);
			assert_eq!(bytes[..len], remainder[..]);
			assert_eq!(bytes[len], PADDING_MARKER);
			assert!(bytes[len + 1..120].iter().all(|&b| b == 0));
			assert_eq!(bytes[120..], (len as u64 * 8).to_le_bytes());

			let leading = padded.leading_block();
			assert_eq!(leading[..len], remainder[..]);
			assert_eq!(padded.trailing_block()[..], bytes[BLOCK_LEN..]);
		}
	}

	#[test]
	fn test_marker_in_last_byte_of_first_block() {
		let padded = pad(&[0u8; 63]);
		assert_eq!(padded.leading_block()[63], PADDING_MARKER);
		assert!(padded.trailing_block()[..56].iter().all(|&b| b == 0));
	}

	#[test]
	#[should_panic]
	fn test_full_block_is_rejected() {
		_ = pad(&[0u8; BLOCK_LEN]);
	}
}
