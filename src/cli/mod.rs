//! CLI module
//!
//! Provides:
//! - Argument parsing for CLI modes
//! - Mode dispatch (tui, ask, modules, validate, export)
//! - Generation preflight (credential check, logged once at startup)

pub mod args;
pub mod dispatch;
pub mod preflight;

// Re-exports
pub use args::{Args, Mode};
pub use dispatch::{run_cli_mode, ExitCode};
pub use preflight::{run_gen_preflight, PreflightOutcome};

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
