//! Exit code constants for the launcher.
//!
//! The launcher only distinguishes two outcomes:
//! - 0: Success
//! - 1: Any fatal failure (unsupported platform, temp file, program
//!   directory, spawn or wait failure)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// A fatal step failed. Cleanup was still attempted.
pub const FAILURE: i32 = 1;
