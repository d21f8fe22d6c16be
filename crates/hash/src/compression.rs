// Copyright 2024-2025 Irreducible Inc.
// Copyright (c) 2024 The Plonky3 Authors

//! Compression function interfaces, after [p3_symmetric](https://github.com/Plonky3/Plonky3/blob/main/symmetric/src/compression.rs) in [Plonky3].
//!
//! [Plonky3]: <https://github.com/plonky3/plonky3>

/// An `N`-to-1 compression function.
///
/// The inputs are positional: for an iterated hash they are typically the chaining value, the
/// message block and any block-position input such as a counter.
pub trait PseudoCompressionFunction<T, const N: usize>: Clone {
	fn compress(&self, input: [T; N]) -> T;
}

/// An `N`-to-1 compression function that is collision-resistant on arbitrary inputs, not only on
/// outputs of earlier compressions.
pub trait CompressionFunction<T, const N: usize>: PseudoCompressionFunction<T, N> {}
