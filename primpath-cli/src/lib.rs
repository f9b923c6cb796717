//! Support library for the primpath CLI binary.
//!
//! Exposes the command and logging modules so doctests and tests can drive
//! the command pipeline without spawning a subprocess.

pub mod cli;
pub mod logging;
