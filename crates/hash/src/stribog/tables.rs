// Copyright 2025 Irreducible Inc.

//! Constant tables of the Stribog-512 round function.

use super::BLOCK_LEN;
use crate::error::TableError;

/// Byte substitution table π (the S layer).
pub const PI: [u8; 256] = [
	0xfc, 0xee, 0xdd, 0x11, 0xcf, 0x6e, 0x31, 0x16, 0xfb, 0xc4, 0xfa, 0xda, 0x23, 0xc5, 0x04, 0x4d,
	0xe9, 0x77, 0xf0, 0xdb, 0x93, 0x2e, 0x99, 0xba, 0x17, 0x36, 0xf1, 0xbb, 0x14, 0xcd, 0x5f, 0xc1,
	0xf9, 0x18, 0x65, 0x5a, 0xe2, 0x5c, 0xef, 0x21, 0x81, 0x1c, 0x3c, 0x42, 0x8b, 0x01, 0x8e, 0x4f,
	0x05, 0x84, 0x02, 0xae, 0xe3, 0x6a, 0x8f, 0xa0, 0x06, 0x0b, 0xed, 0x98, 0x7f, 0xd4, 0xd3, 0x1f,
	0xeb, 0x34, 0x2c, 0x51, 0xea, 0xc8, 0x48, 0xab, 0xf2, 0x2a, 0x68, 0xa2, 0xfd, 0x3a, 0xce, 0xcc,
	0xb5, 0x70, 0x0e, 0x56, 0x08, 0x0c, 0x76, 0x12, 0xbf, 0x72, 0x13, 0x47, 0x9c, 0xb7, 0x5d, 0x87,
	0x15, 0xa1, 0x96, 0x29, 0x10, 0x7b, 0x9a, 0xc7, 0xf3, 0x91, 0x78, 0x6f, 0x9d, 0x9e, 0xb2, 0xb1,
	0x32, 0x75, 0x19, 0x3d, 0xff, 0x35, 0x8a, 0x7e, 0x6d, 0x54, 0xc6, 0x80, 0xc3, 0xbd, 0x0d, 0x57,
	0xdf, 0xf5, 0x24, 0xa9, 0x3e, 0xa8, 0x43, 0xc9, 0xd7, 0x79, 0xd6, 0xf6, 0x7c, 0x22, 0xb9, 0x03,
	0xe0, 0x0f, 0xec, 0xde, 0x7a, 0x94, 0xb0, 0xbc, 0xdc, 0xe8, 0x28, 0x50, 0x4e, 0x33, 0x0a, 0x4a,
	0xa7, 0x97, 0x60, 0x73, 0x1e, 0x00, 0x62, 0x44, 0x1a, 0xb8, 0x38, 0x82, 0x64, 0x9f, 0x26, 0x41,
	0xad, 0x45, 0x46, 0x92, 0x27, 0x5e, 0x55, 0x2f, 0x8c, 0xa3, 0xa5, 0x7d, 0x69, 0xd5, 0x95, 0x3b,
	0x07, 0x58, 0xb3, 0x40, 0x86, 0xac, 0x1d, 0xf7, 0x30, 0x37, 0x6b, 0xe4, 0x88, 0xd9, 0xe7, 0x89,
	0xe1, 0x1b, 0x83, 0x49, 0x4c, 0x3f, 0xf8, 0xfe, 0x8d, 0x53, 0xaa, 0x90, 0xca, 0xd8, 0x85, 0x61,
	0x20, 0x71, 0x67, 0xa4, 0x2d, 0x2b, 0x09, 0x5b, 0xcb, 0x9b, 0x25, 0xd0, 0xbe, 0xe5, 0x6c, 0x52,
	0x59, 0xa6, 0x74, 0xd2, 0xe6, 0xf4, 0xb4, 0xc0, 0xd1, 0x66, 0xaf, 0xc2, 0x39, 0x4b, 0x63, 0xb6,
];

/// Byte position permutation τ (the P layer). Output byte `i` is taken from input byte `TAU[i]`.
pub const TAU: [u8; BLOCK_LEN] = [
	0, 8, 16, 24, 32, 40, 48, 56,
	1, 9, 17, 25, 33, 41, 49, 57,
	2, 10, 18, 26, 34, 42, 50, 58,
	3, 11, 19, 27, 35, 43, 51, 59,
	4, 12, 20, 28, 36, 44, 52, 60,
	5, 13, 21, 29, 37, 45, 53, 61,
	6, 14, 22, 30, 38, 46, 54, 62,
	7, 15, 23, 31, 39, 47, 55, 63,
];

/// Rows of the 64×64 GF(2) matrix of the L layer. Bit `j` of an input word selects `A[j]`.
pub const A: [u64; 64] = [
	0x8e20faa72ba0b470, 0x6c022c38f90a4c07, 0xa011d380818e8f40, 0x0ad97808d06cb404,
	0x90dab52a387ae76f, 0x092e94218d243cba, 0x9d4df05d5f661451, 0x18150f14b9ec46dd,
	0x86275df09ce8aaa8, 0xe230140fc0802984, 0x456c34887a3805b9, 0x9bcf4486248d9f5d,
	0xe4fa2054a80b329c, 0x492c024284fbaec0, 0x70a6a56e2440598e, 0x07e095624504536c,
	0x47107ddd9b505a38, 0x3601161cf205268d, 0x5086e740ce47c920, 0x05e23c0468365a02,
	0x486dd4151c3dfdb9, 0x8a174a9ec8121e5d, 0xc0a878a0a1330aa6, 0x0c84890ad27623e0,
	0x439da0784e745554, 0x71180a8960409a42, 0xac361a443d1c8cd2, 0xc3e9224312c8c1a0,
	0x727d102a548b194e, 0xaa16012142f35760, 0x3853dc371220a247, 0x8d70c431ac02a736,
	0xad08b0e0c3282d1c, 0x1b8e0b0e798c13c8, 0x2843fd2067adea10, 0x8c711e02341b2d01,
	0x24b86a840e90f0d2, 0x4585254f64090fa0, 0x60543c50de970553, 0x0642ca05693b9f70,
	0xafc0503c273aa42a, 0xb60c05ca30204d21, 0x561b0d22900e4669, 0xeffa11af0964ee50,
	0x39b008152acb8227, 0x550b8e9e21f7a530, 0x1ca76e95091051ad, 0xc83862965601dd1b,
	0xd8045870ef14980e, 0x83478b07b2468764, 0x14aff010bdd87508, 0x46b60f011a83988e,
	0x125c354207487869, 0xaccc9ca9328a8950, 0x302a1e286fc58ca7, 0x0321658cba93c138,
	0xd960281e9d1d5215, 0x5b068c651810a89e, 0x2b838811480723ba, 0xf97d86d98a327728,
	0x9258048415eb419d, 0xa48b474f9ef5dc18, 0x0edd37c48a08a6d8, 0x641c314b2b8ee083,
];

/// Number of round constants, one per derived round key.
pub const ROUND_CONSTANTS_LEN: usize = 12;

// Each constant is zero except for its trailing eight bytes, which hold these values
// most significant byte first.
const ROUND_CONSTANT_TAILS: [u64; ROUND_CONSTANTS_LEN] = [
	0x2410008000403204,
	0x100000000000f0cf,
	0x0000000000008085,
	0x00040022818042c1,
	0x0000c00060800043,
	0x000080210001413a,
	0x0000000020004c37,
	0x1010000000200066,
	0x014000000482407c,
	0x00000000000414fd,
	0x04000000401a9887,
	0x77ffbdff3f77df9b,
];

const fn expand_round_constants(
	tails: [u64; ROUND_CONSTANTS_LEN],
) -> [[u8; BLOCK_LEN]; ROUND_CONSTANTS_LEN] {
	let mut out = [[0u8; BLOCK_LEN]; ROUND_CONSTANTS_LEN];
	let mut i = 0;
	while i < ROUND_CONSTANTS_LEN {
		let bytes = tails[i].to_be_bytes();
		let mut j = 0;
		while j < 8 {
			out[i][BLOCK_LEN - 8 + j] = bytes[j];
			j += 1;
		}
		i += 1;
	}
	out
}

/// Round constants `C[0..12]` of the key schedule, in schedule order.
pub const C: [[u8; BLOCK_LEN]; ROUND_CONSTANTS_LEN] = expand_round_constants(ROUND_CONSTANT_TAILS);

/// Checks that `table` maps every byte value to a distinct byte value.
pub fn check_substitution(table: &[u8; 256]) -> Result<(), TableError> {
	let mut seen = [false; 256];
	for &value in table {
		if seen[value as usize] {
			return Err(TableError::SubstitutionNotBijective { value });
		}
		seen[value as usize] = true;
	}
	Ok(())
}

/// Checks that `table` lists every block position `0..64` exactly once.
pub fn check_permutation(table: &[u8; BLOCK_LEN]) -> Result<(), TableError> {
	let mut seen = [false; BLOCK_LEN];
	for (index, &value) in table.iter().enumerate() {
		let value = value as usize;
		if value >= BLOCK_LEN {
			return Err(TableError::PermutationOutOfRange { index, value });
		}
		if seen[value] {
			return Err(TableError::PermutationNotBijective { value });
		}
		seen[value] = true;
	}
	Ok(())
}

/// Validates the built-in π and τ tables.
pub fn validate_tables() -> Result<(), TableError> {
	check_substitution(&PI)?;
	check_permutation(&TAU)
}
