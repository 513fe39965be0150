//! Terminal interface for the survey console
//!
//! The UI is a deterministic surface only:
//! - NO async
//! - Generation runs on a background worker thread; the UI drains its
//!   events from the main loop
//! - Every action = explicit command against the state struct
//!
//! Input model:
//! - Plain text → question for AI Discovery (streamed answer)
//! - Commands start with '/' prefix
//! - Supported commands: /modules, /module, /report, /explain, /validate,
//!   /export, /stress, /ack-ethics, /walkthrough, /cancel, /dismiss,
//!   /help, /quit

pub mod handlers;
pub mod input;
pub mod state;
pub mod view;

// Re-exports
pub use handlers::execute_command;
pub use input::{parse_command, render_help, Command};
pub use state::{Alert, AlertLevel, App, Panel, WalkthroughStep};
pub use view::render;
