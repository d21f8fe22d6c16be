// Copyright 2025 Irreducible Inc.

pub mod compression;
pub mod error;
pub mod parallel_digest;
pub mod stribog;

pub use compression::*;
pub use error::TableError;
pub use parallel_digest::*;
pub use stribog::{stribog512, Stribog512, StribogCompression, DIGEST_LEN};

/// Validates the constant tables and prepares the lookup tables used by every digest.
///
/// Call this once at startup to abort cleanly on a configuration error. Without it the first
/// digest performs the same checks and panics if they fail.
pub fn init() -> Result<(), TableError> {
	stribog::init_lookup_table()
}
