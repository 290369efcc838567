//! Support library for the `percolate` binary.
//!
//! Exposes the command pipeline and logging setup so tests and doctests can
//! drive the CLI without spawning a subprocess.

pub mod cli;
pub mod logging;
