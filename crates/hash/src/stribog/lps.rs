// Copyright 2025 Irreducible Inc.

//! The S, P and L layers of the round function.
//!
//! [`s`], [`p`] and [`l`] follow the layer definitions directly. The round function itself uses
//! [`lps`], which evaluates `L(P(S(x)))` through a precomputed 8×256 table of 64-bit words.

use std::array;

use lazy_static::lazy_static;

use super::{
	tables::{validate_tables, A, PI, TAU},
	xor, Block, BLOCK_LEN,
};
use crate::error::TableError;

const WORDS: usize = BLOCK_LEN / 8;

lazy_static! {
	/// `LPS_TABLE[row][b]` is the L-image of `PI[b]` placed in byte `row` of a word.
	static ref LPS_TABLE: [[u64; 256]; WORDS] = match validate_tables() {
		Ok(()) => build_lps_table(),
		Err(err) => panic!("Stribog tables are inconsistent: {err}"),
	};
}

fn build_lps_table() -> [[u64; 256]; WORDS] {
	let mut table = [[0u64; 256]; WORDS];
	for (row, entries) in table.iter_mut().enumerate() {
		for (byte, entry) in entries.iter_mut().enumerate() {
			let substituted = PI[byte];
			*entry = (0..8)
				.filter(|&bit| (substituted >> bit) & 1 == 1)
				.fold(0, |acc, bit| acc ^ A[8 * row + bit]);
		}
	}
	tracing::debug!("built Stribog LPS lookup table");
	table
}

/// Validates the constant tables and builds the LPS lookup table.
///
/// Calling this at startup reports a broken table as an error instead of a panic on first use.
pub fn init_lookup_table() -> Result<(), TableError> {
	validate_tables()?;
	lazy_static::initialize(&LPS_TABLE);
	Ok(())
}

/// Substitution layer: replaces every byte `b` with `PI[b]`.
pub fn s(block: &Block) -> Block {
	block.map(|b| PI[b as usize])
}

/// Permutation layer: output byte `i` is input byte `TAU[i]`.
pub fn p(block: &Block) -> Block {
	array::from_fn(|i| block[TAU[i] as usize])
}

/// Linear layer: multiplies each little-endian 64-bit word by the matrix `A` over GF(2).
pub fn l(block: &Block) -> Block {
	let mut out = [0u8; BLOCK_LEN];
	for (src, dst) in block.chunks_exact(8).zip(out.chunks_exact_mut(8)) {
		let word = u64::from_le_bytes(src.try_into().expect("chunk is 8 bytes"));
		let mixed = (0..64)
			.filter(|&j| (word >> j) & 1 == 1)
			.fold(0, |acc, j| acc ^ A[j]);
		dst.copy_from_slice(&mixed.to_le_bytes());
	}
	out
}

/// Computes `L(P(S(block)))`.
#[inline]
pub fn lps(block: &Block) -> Block {
	let table = &*LPS_TABLE;
	let mut out = [0u8; BLOCK_LEN];
	// P is a transposition of the 8×8 byte matrix, so output word `word` is assembled from byte
	// `word` of every input word.
	for (word, chunk) in out.chunks_exact_mut(8).enumerate() {
		let value = (0..WORDS).fold(0u64, |acc, row| {
			acc ^ table[row][block[8 * row + word] as usize]
		});
		chunk.copy_from_slice(&value.to_le_bytes());
	}
	out
}

/// Computes `L(P(S(a ^ b)))`.
#[inline]
pub fn lps_xor(a: &Block, b: &Block) -> Block {
	lps(&xor(a, b))
}
