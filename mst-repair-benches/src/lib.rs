//! Benchmark support crate for mst-repair.
//!
//! Generates seeded synthetic graphs for the Criterion benchmarks that time
//! tree construction and a full repair cycle.

pub mod error;
pub mod source;
