//! CLI mode dispatch
//!
//! Dispatches the one-shot modes (ask, modules, validate, export).
//! The interactive console has its own entry point in main.

use std::io::Write;

use crate::cli::{Mode, EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};
use crate::gen::client::GenClient;
use crate::modules::validate::validate_fixtures;
use crate::modules;
use crate::prompts::build_discovery_prompt;
use crate::report::build_repro_package;
use crate::session::SessionFlags;

/// Exit code wrapper for CLI operations
pub type ExitCode = i32;

/// Run a one-shot CLI mode and return an exit code
pub fn run_cli_mode(mode: Mode, client: &GenClient) -> ExitCode {
    match mode {
        Mode::Tui => {
            // Handled before dispatch; reaching here is a routing bug
            eprintln!("Error: tui mode does not dispatch here");
            EXIT_FAILURE
        }
        Mode::Ask { query } => run_ask(client, &query.join(" ")),
        Mode::Modules => run_modules(),
        Mode::Validate => run_validate(),
        Mode::Export { out } => run_export(out.as_deref()),
    }
}

/// Stream a one-shot answer to stdout as chunks arrive
fn run_ask(client: &GenClient, question: &str) -> ExitCode {
    let question = question.trim();
    if question.is_empty() {
        eprintln!("Error: ask requires a question");
        return EXIT_USAGE;
    }

    let prompt = build_discovery_prompt(question);
    let result = client.generate_streaming(&prompt, |chunk| {
        print!("{}", chunk);
        let _ = std::io::stdout().flush();
    });

    match result {
        Ok(_) => {
            println!();
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    }
}

/// List the survey module registry
fn run_modules() -> ExitCode {
    for module in modules::registry() {
        println!(
            "{:<10} [{}] {}",
            module.id,
            module.status.label(),
            module.title
        );
        println!("           {}", module.blurb);
    }
    EXIT_SUCCESS
}

/// Run fixture range checks
fn run_validate() -> ExitCode {
    match validate_fixtures() {
        Ok(checks) => {
            println!("fixture validation passed ({} checks)", checks);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    }
}

/// Write the reproducibility package to a file or stdout
fn run_export(out: Option<&std::path::Path>) -> ExitCode {
    let package = build_repro_package(&SessionFlags::new(), &[], None);
    match out {
        Some(path) => match std::fs::write(path, &package) {
            Ok(()) => {
                println!(
                    "reproducibility package written to {} ({} bytes)",
                    path.display(),
                    package.len()
                );
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_FAILURE
            }
        },
        None => {
            print!("{}", package);
            EXIT_SUCCESS
        }
    }
}
