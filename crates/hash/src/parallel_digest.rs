// Copyright 2024-2025 Irreducible Inc.

use digest::Output;
use rayon::prelude::*;

use crate::stribog::{stribog512, Stribog512, DIGEST_LEN};

/// An object that computes the digests of many independent messages in parallel.
pub trait ParallelDigest: Send + Sync {
	/// The corresponding non-parallelized hash function.
	type Digest: digest::Digest + Send;

	/// Create new hasher instance.
	fn new() -> Self;

	/// Writes the digest of the `i`-th message of `source` into `out[i]`.
	///
	/// # Panics
	/// Panics if `source` and `out` have different lengths.
	fn digest(
		&self,
		source: impl IndexedParallelIterator<Item: AsRef<[u8]>>,
		out: &mut [Output<Self::Digest>],
	);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Stribog512Parallel;

impl ParallelDigest for Stribog512Parallel {
	type Digest = Stribog512;

	fn new() -> Self {
		Self
	}

	fn digest(
		&self,
		source: impl IndexedParallelIterator<Item: AsRef<[u8]>>,
		out: &mut [Output<Self::Digest>],
	) {
		assert_eq!(source.len(), out.len(), "one output slot is required per message");

		let _span = tracing::debug_span!("Stribog-512 batch", n_messages = out.len()).entered();
		source
			.zip(out.par_iter_mut())
			.for_each(|(message, out)| out.copy_from_slice(&stribog512(message.as_ref())));
	}
}

/// Computes the digest of every message, in input order.
pub fn digest_batch<M: AsRef<[u8]> + Sync>(messages: &[M]) -> Vec<[u8; DIGEST_LEN]> {
	let _span = tracing::debug_span!("Stribog-512 batch", n_messages = messages.len()).entered();
	messages
		.par_iter()
		.map(|message| stribog512(message.as_ref()))
		.collect()
}
