//! Panel rendering for the survey console
//!
//! Layout: Transcript (main, left) + 2 panels (right, stacked)
//! - Left: Discovery transcript with the streaming answer (65%)
//! - Right top: Module panel (fixtures, analysis runs)
//! - Right bottom: Diagnostics (config banner, alerts, session flags)
//! - Bottom: input bar

use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::ui::state::{AlertLevel, App, Panel, WalkthroughStep};

/// Render the main UI
pub fn render<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> std::io::Result<()> {
    terminal.draw(|f| {
        // Vertical split: main area (top) + input bar (3 lines, bottom)
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Main area split: transcript (left) + panels (right, stacked)
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[0]);

        let panel_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[1]);

        render_transcript(f, app, main_chunks[0]);
        render_module_panel(f, app, panel_chunks[0]);
        render_diagnostics_panel(f, app, panel_chunks[1]);
        render_input_bar(f, app, chunks[1]);
    })?;
    Ok(())
}

fn panel_title(app: &App, panel: Panel, name: &'static str) -> String {
    if app.active_panel == panel {
        format!(" [{}] ", name)
    } else {
        format!(" {} ", name)
    }
}

fn panel_border(app: &App, panel: Panel) -> Style {
    if app.active_panel == panel {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

/// Render the Discovery transcript with the streaming answer
fn render_transcript(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for (question, answer) in &app.history {
        lines.push(Line::from(Span::styled(
            format!("you: {}", question),
            Style::default().fg(Color::Cyan),
        )));
        for text in answer.lines() {
            lines.push(Line::from(text.to_string()));
        }
        lines.push(Line::from(""));
    }

    if app.generating {
        if let Some(ref question) = app.question {
            lines.push(Line::from(Span::styled(
                format!("you: {}", question),
                Style::default().fg(Color::Cyan),
            )));
        }
        if app.answer_buffer.is_empty() {
            lines.push(Line::from(Span::styled(
                "Thinking...",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            for text in app.answer_buffer.lines() {
                lines.push(Line::from(text.to_string()));
            }
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Type a question to query AI Discovery.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Show the tail when the transcript overflows the panel
    let inner_height = area.height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(inner_height);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();

    let paragraph = Paragraph::new(visible)
        .block(
            Block::default()
                .title(panel_title(app, Panel::Transcript, "Discovery"))
                .borders(Borders::ALL)
                .border_style(panel_border(app, Panel::Transcript)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Render the module panel (selected module, fixtures, last run)
fn render_module_panel(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    match app.selected_module {
        Some(module) => {
            lines.push(Line::from(vec![
                Span::styled(module.title, Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("  [{}]", module.status.label()),
                    Style::default().fg(Color::Yellow),
                ),
            ]));
            lines.push(Line::from(module.blurb));
            lines.push(Line::from(""));

            if let Some(ref run) = app.last_run {
                let status = if run.is_complete() {
                    Span::styled("complete", Style::default().fg(Color::Green))
                } else {
                    Span::styled("pending", Style::default().fg(Color::Yellow))
                };
                lines.push(Line::from(vec![Span::raw("last run: "), status]));
                for text in run.summary.lines() {
                    lines.push(Line::from(text.to_string()));
                }
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "No module open. /modules to list, /module <id> to open.",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("canopy plots: {}", app.canopy_rows.len()),
        Style::default().fg(Color::DarkGray),
    )));
    for row in app.canopy_rows.iter().take(5) {
        lines.push(Line::from(format!(
            "  {}  {:.1}m  {:.0}% cover",
            row.plot, row.mean_height_m, row.cover_pct
        )));
    }
    if app.canopy_rows.len() > 5 {
        lines.push(Line::from(format!(
            "  ... and {} more",
            app.canopy_rows.len() - 5
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(panel_title(app, Panel::Module, "Module"))
                .borders(Borders::ALL)
                .border_style(panel_border(app, Panel::Module)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Render diagnostics: configuration banner, errors, session flags, alerts
fn render_diagnostics_panel(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(reason) = app.config_banner() {
        lines.push(Line::from(Span::styled(
            format!("NOT CONFIGURED: {}", reason),
            Style::default().fg(Color::Red),
        )));
    }

    if let Some(ref error) = app.gen_error {
        lines.push(Line::from(Span::styled(
            format!("last error: {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    if let Some(alert) = app.current_alert() {
        let color = match alert.level {
            AlertLevel::Info => Color::Cyan,
            AlertLevel::Warning => Color::Yellow,
            AlertLevel::Error => Color::Red,
        };
        lines.push(Line::from(Span::styled(
            format!("! {}  (/dismiss)", alert.message),
            Style::default().fg(color),
        )));
        if app.alerts.len() > 1 {
            lines.push(Line::from(Span::styled(
                format!("  +{} queued", app.alerts.len() - 1),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    if app.walkthrough != WalkthroughStep::Done {
        lines.push(Line::from(Span::styled(
            app.walkthrough.hint(),
            Style::default().fg(Color::Magenta),
        )));
    }

    if !app.session.ethics_acknowledged {
        lines.push(Line::from(Span::styled(
            "field ethics notice pending (/ack-ethics)",
            Style::default().fg(Color::Yellow),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "session: onboarding={} ethics={} reduced-motion={}",
            app.session.onboarding_seen,
            app.session.ethics_acknowledged,
            app.session.reduced_motion
        ),
        Style::default().fg(Color::DarkGray),
    )));

    // Recent activity tail
    for entry in app.activity_log.iter().rev().take(5).rev() {
        lines.push(Line::from(Span::styled(
            entry.content.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(panel_title(app, Panel::Diagnostics, "Diagnostics"))
                .borders(Borders::ALL)
                .border_style(panel_border(app, Panel::Diagnostics)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Render the input bar
fn render_input_bar(f: &mut Frame, app: &App, area: Rect) {
    let status = if app.generating {
        Span::styled(" generating ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ready ", Style::default().fg(Color::Green))
    };

    let line = Line::from(vec![
        status,
        Span::raw("> "),
        Span::raw(app.input_buffer.as_str()),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" Input (/help for commands) ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}
