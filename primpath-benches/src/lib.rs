//! Benchmark support crate for primpath.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for Prim's builder and the full path pipeline.

pub mod error;
pub mod params;
pub mod source;
