//! CLI argument parsing
//!
//! Modes:
//! - (no mode) / tui  → interactive console
//! - ask <query>      → one-shot question streamed to stdout
//! - modules          → list survey modules
//! - validate         → fixture range checks
//! - export           → write the reproducibility package

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Field survey console for Project Underwhere
#[derive(Debug, Parser)]
#[command(name = "underwhere", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub mode: Option<Mode>,
}

/// CLI modes
#[derive(Debug, Clone, Subcommand)]
pub enum Mode {
    /// Interactive console (default when no mode is given)
    Tui,

    /// Ask AI Discovery a one-shot question, streaming the answer to stdout
    Ask {
        /// The question (remaining words are joined)
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// List survey modules
    Modules,

    /// Run range checks over the fixture tables
    Validate,

    /// Write the reproducibility package
    Export {
        /// Output path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
