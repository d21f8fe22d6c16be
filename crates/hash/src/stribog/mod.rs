// Copyright 2025 Irreducible Inc.

//! A Stribog-style 512-bit hash function.
//!
//! The round function is `LPS(x ^ k)`: byte substitution, byte transposition and a GF(2)-linear
//! map on 64-bit words. It drives a 13-round keyed block transform inside the compression
//! function `g(h, m, N)`. The driver keeps a bit counter `N` and a checksum `Σ` modulo 2^512 and
//! folds both into the chaining value at the end.

pub mod arith;
pub mod compression;
pub mod digest;
pub mod lps;
pub mod padding;
pub mod tables;

use std::array;

pub use arith::{add_mod_512, U512};
pub use compression::{block_transform, compress, key_schedule, StribogCompression};
pub use self::digest::{stribog512, Stribog512, DIGEST_LEN};
pub use lps::init_lookup_table;

/// Size of a state block in bytes.
pub const BLOCK_LEN: usize = 64;

/// The unit every transform operates on.
pub type Block = [u8; BLOCK_LEN];

#[inline]
pub fn xor(a: &Block, b: &Block) -> Block {
	array::from_fn(|i| a[i] ^ b[i])
}
