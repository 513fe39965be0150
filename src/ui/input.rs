//! Command parsing for the survey console
//!
//! INPUT ROUTING (strict 2-way):
//! A) COMMAND: Input starts with "/"
//!    - Executes immediately against local state
//!    - Examples: /quit, /modules, /module physics
//!
//! B) ASK: Default (no "/" prefix)
//!    - Sent to AI Discovery as a free-form question
//!    - Answer streams into the transcript as it arrives
//!
//! EXIT HANDLING (hard requirement):
//! - /quit, /q, /exit work from ANY state
//! - Ctrl+C exits immediately

/// Parsed command result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,                   // /quit, /q, /exit — exits immediately from any state
    Help,                   // /help
    Modules,                // /modules — list survey modules
    Module(String),         // /module <id>
    Ask(String),            // Default: free-form question for AI Discovery
    Report(String),         // /report [notes] — generate field-test report
    Explain,                // /explain — explain the last answer
    Validate,               // /validate — fixture range checks
    Export(Option<String>), // /export [path] — reproducibility package
    Stress(usize),          // /stress <n> — bulk-append canopy rows
    Plugins,                // /plugins — list installed plugins
    AckEthics,              // /ack-ethics
    ReducedMotion,          // /reduced-motion — toggle the accessibility flag
    HighContrast,           // /high-contrast — toggle the accessibility flag
    WalkNext,               // /walkthrough
    WalkSkip,               // /walkthrough skip
    Cancel,                 // /cancel — cancel in-flight generation
    Dismiss,                // /dismiss — dismiss current alert
}

/// Parse command input string into Command
///
/// Routing (strict 2-way):
/// 1. Starts with "/" → Parse as command (execute immediately)
/// 2. "/" is not present → Treat as a question for AI Discovery
///
/// # Examples
/// ```
/// use underwhere::ui::input::{parse_command, Command};
///
/// // Commands (with "/")
/// assert_eq!(parse_command("/quit"), Command::Quit);
/// assert_eq!(parse_command("/q"), Command::Quit);
/// assert_eq!(parse_command("/modules"), Command::Modules);
///
/// // Questions (default, no "/")
/// assert!(matches!(parse_command("Assess slope stability"), Command::Ask(_)));
/// assert!(matches!(parse_command(":help"), Command::Ask(_))); // ":" is a question
/// ```
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::None;
    }

    // Commands start with "/" ONLY; everything else is a question
    if !input.starts_with('/') {
        return Command::Ask(input.to_string());
    }

    let rest = &input[1..];

    // "/" alone is not a command
    if rest.is_empty() {
        return Command::None;
    }

    // Leading space after "/" means invalid syntax
    if rest.starts_with(' ') || rest.starts_with('\t') {
        return Command::None;
    }

    // Split into parts (first word is command, rest are args)
    let parts: Vec<&str> = rest.splitn(2, |c: char| [' ', '\t'].contains(&c)).collect();

    match parts[0] {
        // Exit commands (work from any state, no args allowed)
        "quit" | "q" | "exit" => {
            if parts.len() == 1 {
                Command::Quit
            } else {
                Command::None
            }
        }
        "help" | "h" => Command::Help,
        "modules" => Command::Modules,
        "module" | "m" => {
            if parts.len() > 1 {
                Command::Module(parts[1].to_string())
            } else {
                Command::None
            }
        }
        "report" => {
            if parts.len() > 1 {
                Command::Report(parts[1].to_string())
            } else {
                Command::Report(String::new())
            }
        }
        "explain" => Command::Explain,
        "validate" => Command::Validate,
        "export" => {
            if parts.len() > 1 {
                Command::Export(Some(parts[1].to_string()))
            } else {
                Command::Export(None)
            }
        }
        "stress" => {
            if parts.len() > 1 {
                match parts[1].parse::<usize>() {
                    Ok(n) => Command::Stress(n),
                    Err(_) => Command::None,
                }
            } else {
                Command::None
            }
        }
        "plugins" => Command::Plugins,
        "ack-ethics" => Command::AckEthics,
        "reduced-motion" => Command::ReducedMotion,
        "high-contrast" => Command::HighContrast,
        "walkthrough" => {
            if parts.len() > 1 && parts[1] == "skip" {
                Command::WalkSkip
            } else {
                Command::WalkNext
            }
        }
        "cancel" => Command::Cancel,
        "dismiss" => Command::Dismiss,
        _ => Command::None,
    }
}

/// Render help text for the console
pub fn render_help() -> String {
    r#"Underwhere — field survey console

INPUT MODES:
    Type anything to ask AI Discovery (no "/" prefix needed)
    The answer streams into the transcript as it arrives

KEYBOARD SHORTCUTS:
    Tab                 Cycle through panels
    Esc                 Clear the input line
    Ctrl+C              Exit immediately

COMMANDS (start with "/"):
    /quit, /q, /exit    Quit immediately (works from any state)
    /modules            List survey modules
    /module <id>        Open a module and run its simulated analysis
    /report [notes]     Generate a field-test report from this session
    /explain            Ask for an explanation of the last answer
    /validate           Run fixture range checks
    /export [path]      Write the reproducibility package
    /stress <n>         Append n synthetic canopy rows
    /plugins            List installed plugins
    /ack-ethics         Acknowledge the field ethics notice
    /reduced-motion     Toggle the reduced-motion accessibility flag
    /high-contrast      Toggle the high-contrast accessibility flag
    /walkthrough        Advance the onboarding walkthrough ("skip" to end it)
    /cancel             Cancel the in-flight generation
    /dismiss            Dismiss the current alert
    /help               Show this help message
"#
    .to_string()
}
