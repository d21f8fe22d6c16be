// Copyright 2025 Irreducible Inc.

/// A constant table failed its startup consistency check.
///
/// No digest can be computed with a table that is not a bijection, so these errors are fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
	#[error("substitution table maps more than one byte to {value:#04x}")]
	SubstitutionNotBijective { value: u8 },
	#[error("permutation table entry {index} points outside the block (position {value})")]
	PermutationOutOfRange { index: usize, value: usize },
	#[error("permutation table lists block position {value} more than once")]
	PermutationNotBijective { value: usize },
}
