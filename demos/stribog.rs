// Copyright 2025 Irreducible Inc.

use anyhow::Result;
use digest::Digest;
use stribog_hash::{digest_batch, init, Stribog512};
use stribog_utils::{
	rayon::{adjust_thread_pool, batch_threads},
	tracing::init_tracing,
};

const MESSAGE: &[u8] = b"323130393837363534333231303938373635343332313039383736353433323130393837363534333231303938373635343332313039383736353433323130";

const N_BATCH_MESSAGES: usize = 8;

fn hex(bytes: &[u8]) -> String {
	bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn main() -> Result<()> {
	adjust_thread_pool()
		.as_ref()
		.expect("failed to init thread pool");

	init_tracing();

	// A broken constant table is fatal, so check before hashing anything.
	init()?;

	let digest = Stribog512::digest(MESSAGE);
	println!("{digest:x}");

	let messages = (0..N_BATCH_MESSAGES)
		.map(|i| MESSAGE[..MESSAGE.len() * i / N_BATCH_MESSAGES].to_vec())
		.collect::<Vec<_>>();

	let batch_scope =
		tracing::info_span!("hashing prefixes", threads = batch_threads()).entered();
	let digests = digest_batch(&messages);
	drop(batch_scope);

	for (message, digest) in messages.iter().zip(&digests) {
		println!("{:>4} bytes  {}", message.len(), hex(digest));
	}

	Ok(())
}
