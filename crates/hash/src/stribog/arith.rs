// Copyright 2025 Irreducible Inc.

//! Arithmetic modulo 2^512 on state blocks.
//!
//! A [`Block`] is read as a single big-endian integer: byte 0 is the most significant. [`U512`]
//! holds that integer as little-endian 64-bit limbs, and the conversions below are the only place
//! where the two views meet.

use std::array;

use super::{Block, BLOCK_LEN};

const LIMBS: usize = BLOCK_LEN / 8;

/// An unsigned 512-bit integer with wrapping arithmetic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct U512([u64; LIMBS]);

impl U512 {
	pub const ZERO: Self = Self([0; LIMBS]);
	pub const MAX: Self = Self([u64::MAX; LIMBS]);

	pub const fn from_u64(value: u64) -> Self {
		let mut limbs = [0; LIMBS];
		limbs[0] = value;
		Self(limbs)
	}

	/// Little-endian limbs, least significant first.
	pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
		Self(limbs)
	}

	pub const fn limbs(&self) -> &[u64; LIMBS] {
		&self.0
	}

	pub fn from_be_block(block: &Block) -> Self {
		Self(array::from_fn(|i| {
			let offset = BLOCK_LEN - 8 * (i + 1);
			u64::from_be_bytes(
				block[offset..offset + 8]
					.try_into()
					.expect("chunk is 8 bytes"),
			)
		}))
	}

	pub fn to_be_block(&self) -> Block {
		let mut block = [0u8; BLOCK_LEN];
		for (i, limb) in self.0.iter().enumerate() {
			let offset = BLOCK_LEN - 8 * (i + 1);
			block[offset..offset + 8].copy_from_slice(&limb.to_be_bytes());
		}
		block
	}

	/// Addition modulo 2^512.
	#[must_use]
	pub fn wrapping_add(self, rhs: Self) -> Self {
		let mut limbs = [0; LIMBS];
		let mut carry = false;
		for (out, (&a, &b)) in limbs.iter_mut().zip(self.0.iter().zip(&rhs.0)) {
			let (sum, overflow_a) = a.overflowing_add(b);
			let (sum, overflow_b) = sum.overflowing_add(carry as u64);
			*out = sum;
			carry = overflow_a || overflow_b;
		}
		Self(limbs)
	}
}

impl From<u64> for U512 {
	fn from(value: u64) -> Self {
		Self::from_u64(value)
	}
}

/// Big-endian block encoding of `value`.
pub fn encode(value: u64) -> Block {
	U512::from_u64(value).to_be_block()
}

/// Adds two blocks as big-endian integers modulo 2^512.
pub fn add_mod_512(a: &Block, b: &Block) -> Block {
	U512::from_be_block(a)
		.wrapping_add(U512::from_be_block(b))
		.to_be_block()
}
