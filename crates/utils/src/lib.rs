// Copyright 2024 Ulvetanna Inc.

pub mod rayon;
pub mod tracing;
