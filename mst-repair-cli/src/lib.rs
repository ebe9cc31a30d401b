//! Support library for the `mst-repair` binary.
//!
//! Exposes the command pipeline and logging setup so tests can drive a
//! repair cycle without spawning a subprocess.

pub mod cli;
pub mod logging;
