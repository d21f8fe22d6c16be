// Copyright 2024 Irreducible Inc.

use std::{env, sync::OnceLock};

use rayon::{ThreadPoolBuildError, ThreadPoolBuilder};

const NUM_THREADS_VAR: &str = "RAYON_NUM_THREADS";

fn single_thread_requested() -> bool {
	env::var(NUM_THREADS_VAR).is_ok_and(|v| v.trim() == "1")
}

/// Runs the global rayon pool on the calling thread when `RAYON_NUM_THREADS=1`.
///
/// Batch hashing then behaves like a plain loop, which keeps traces and profiles readable.
/// rayon builds its global pool at most once, so this must run before any parallel work; the
/// result is cached and returned by reference because `ThreadPoolBuildError` is not `Clone`.
pub fn adjust_thread_pool() -> &'static Result<(), ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| {
		// Asking rayon for its thread count here would build the default pool.
		if !single_thread_requested() {
			return Ok(());
		}
		tracing::debug!("using the current thread as the only rayon worker");
		ThreadPoolBuilder::new()
			.num_threads(1)
			.use_current_thread()
			.build_global()
	})
}

/// Number of threads available to batch hashing.
pub fn batch_threads() -> usize {
	rayon::current_num_threads()
}
