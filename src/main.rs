//! Underwhere CLI — field survey console
//!
//! 2-way input router in the console:
//! - Commands (start with "/") — execute immediately
//! - Questions (default) — streamed AI Discovery answer
//!
//! EXIT: /quit, /q, /exit work from ANY state; Ctrl+C exits immediately

use std::io;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use underwhere::cli::preflight::run_gen_preflight;
use underwhere::cli::{run_cli_mode, Args, Mode};
use underwhere::gen::client::GenClient;
use underwhere::ui::state::Panel;
use underwhere::ui::{handlers, parse_command, render, App, Command};

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mode = args.mode.unwrap_or(Mode::Tui);

    match mode {
        Mode::Tui => run_tui_mode(),
        other => {
            // One-shot modes log to stderr so stdout stays scriptable
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("underwhere=warn")),
                )
                .with_writer(io::stderr)
                .init();

            let client = GenClient::from_env();
            run_gen_preflight(&client);
            let exit_code = run_cli_mode(other, &client);
            std::process::exit(exit_code);
        }
    }
}

/// Run the interactive console
fn run_tui_mode() -> io::Result<()> {
    // The console owns the terminal, so logs go to a file
    let log_dir = std::env::temp_dir();
    let file_appender = tracing_appender::rolling::never(&log_dir, "underwhere.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("underwhere=info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let client = Arc::new(GenClient::from_env());
    run_gen_preflight(&client);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(client);
    app.log("Underwhere — field survey console".to_string());
    app.log("Type a question, /help for commands, /quit to exit".to_string());

    // Top-level supervisor: a panic inside the loop must not leave the
    // terminal in raw mode or lose the failure
    let result = catch_unwind(AssertUnwindSafe(|| event_loop(&mut terminal, &mut app)));

    // Cleanup happens before reporting, on every path
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result {
        Ok(loop_result) => loop_result,
        Err(panic) => {
            let detail = panic
                .downcast_ref::<String>()
                .map(String::as_str)
                .or_else(|| panic.downcast_ref::<&str>().copied())
                .unwrap_or("unknown panic");
            tracing::error!(detail = detail, "console crashed");
            eprintln!("Something went wrong and the console had to close.");
            eprintln!("Restart with `underwhere` to pick up where you left off.");
            std::process::exit(1);
        }
    }
}

/// Main event loop: render, poll input, drain generation events
fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    while !app.should_quit {
        render(terminal, app)?;

        // Block for input (100ms timeout)
        if poll(Duration::from_millis(100))? {
            if let Event::Key(key) = read()? {
                // Ctrl+C exits immediately from any state
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }
                handle_key_event(app, key);
                if app.should_quit {
                    break;
                }
            }
        }

        // Drain streaming events from the background worker.
        // The next render() shows chunks as they arrive.
        app.process_gen_events();
    }

    // Mark the consumer dead before the worker is torn down, so a
    // racing chunk cannot mutate the buffer mid-teardown
    app.live = false;
    if let Some(handle) = app.gen_handle.take() {
        handle.shutdown();
        let _ = handle.join_timeout(Duration::from_secs(2));
    }

    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => app.handle_char(c),
        KeyCode::Backspace => app.handle_backspace(),
        KeyCode::Enter => {
            let input = app.input_buffer.clone();
            let cmd = parse_command(&input);

            // Quit bypasses all other routing
            if matches!(cmd, Command::Quit) {
                app.quit();
                app.input_buffer.clear();
                return;
            }

            handlers::execute_command(app, cmd);
            app.input_buffer.clear();
        }
        KeyCode::Esc => app.input_buffer.clear(),
        KeyCode::Tab => cycle_panel(app),
        _ => {}
    }
}

/// Cycle active panel
fn cycle_panel(app: &mut App) {
    app.active_panel = match app.active_panel {
        Panel::Transcript => Panel::Module,
        Panel::Module => Panel::Diagnostics,
        Panel::Diagnostics => Panel::Transcript,
    };
}
