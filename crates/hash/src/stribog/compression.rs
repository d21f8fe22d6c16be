// Copyright 2025 Irreducible Inc.

use super::{
	lps::lps_xor,
	tables::{C, ROUND_CONSTANTS_LEN},
	xor, Block, BLOCK_LEN,
};
use crate::compression::{CompressionFunction, PseudoCompressionFunction};

/// Number of round keys, which is also the number of rounds of [`block_transform`].
pub const ROUNDS: usize = ROUND_CONSTANTS_LEN + 1;

pub type RoundKeys = [Block; ROUNDS];

/// Derives the round keys: `keys[0] = seed` and `keys[i] = LPS(keys[i - 1] ^ C[i - 1])`.
pub fn key_schedule(seed: &Block) -> RoundKeys {
	let mut keys = [[0u8; BLOCK_LEN]; ROUNDS];
	keys[0] = *seed;
	for (i, constant) in C.iter().enumerate() {
		keys[i + 1] = lps_xor(&keys[i], constant);
	}
	keys
}

/// The keyed block transform E: thirteen rounds of `data = LPS(data ^ keys[i])`.
///
/// Only the forward direction exists; the compression function never inverts it.
pub fn block_transform(keys: &RoundKeys, block: &Block) -> Block {
	keys.iter().fold(*block, |data, key| lps_xor(&data, key))
}

/// The compression function `g(h, m, N) = E(K, m) ^ h ^ m` with `K = LPS(h ^ N)`.
pub fn compress(h: &Block, m: &Block, n: &Block) -> Block {
	let key = lps_xor(h, n);
	let transformed = block_transform(&key_schedule(&key), m);
	xor(&xor(&transformed, h), m)
}

/// One-way compression of a chaining value, a message block and a counter block into a new
/// chaining value. The input order is `[h, m, N]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StribogCompression;

impl PseudoCompressionFunction<Block, 3> for StribogCompression {
	fn compress(&self, input: [Block; 3]) -> Block {
		let [h, m, n] = input;
		compress(&h, &m, &n)
	}
}

impl CompressionFunction<Block, 3> for StribogCompression {}

#[cfg(test)]
mod tests {
	use hex_literal::hex;

	use super::*;
	use crate::stribog::lps::lps;

	const ZERO: Block = [0u8; BLOCK_LEN];

	#[test]
	fn test_key_schedule_order() {
		let seed: Block = std::array::from_fn(|i| (i * 7) as u8);
		let keys = key_schedule(&seed);
		assert_eq!(keys.len(), 13);
		assert_eq!(keys[0], seed);
		assert_eq!(keys[1], lps(&xor(&seed, &C[0])));
		assert_eq!(keys[12], lps(&xor(&keys[11], &C[11])));

		// Consuming the constants in any other order yields a different final key.
		let mut key = seed;
		for constant in C.iter().rev() {
			key = lps_xor(&key, constant);
		}
		assert_ne!(keys[12], key);
	}

	#[test]
	fn test_block_transform_with_zero_keys() {
		let block: Block = std::array::from_fn(|i| i as u8);
		let expected = (0..ROUNDS).fold(block, |data, _| lps(&data));
		assert_eq!(block_transform(&[ZERO; ROUNDS], &block), expected);
	}

	#[test]
	fn test_compress_zero_inputs() {
		assert_eq!(
			compress(&ZERO, &ZERO, &ZERO),
			hex!("880112274fa23273d7dfb5059dcd232cfe5f6dacd5ca43f3b5e612d7272deface9af715ea2f9b0ec1d97ae2ec426d1b80503c2cc7f78505540728e8c7ebf1208")
		);
	}

	#[test]
	fn test_compression_function_input_order() {
		let h: Block = std::array::from_fn(|i| i as u8);
		let m: Block = std::array::from_fn(|i| (255 - i) as u8);
		let n = crate::stribog::arith::encode(512);

		let out = StribogCompression.compress([h, m, n]);
		assert_eq!(out, compress(&h, &m, &n));
		assert_ne!(out, StribogCompression.compress([m, h, n]));
		assert_ne!(out, StribogCompression.compress([h, n, m]));
	}
}
