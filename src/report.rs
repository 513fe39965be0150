//! Field-test reports and the reproducibility export
//!
//! A `FieldReport` bundles one field-test session for AI analysis. The
//! reproducibility package is a plain-text concatenation of session
//! state, activity log, fixture snapshot, and the last generated
//! analysis — a convenience export, not an archival format.

use serde::{Deserialize, Serialize};

use crate::modules::fixtures;
use crate::session::SessionFlags;

/// One checklist item from a field-test run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    pub done: bool,
}

/// Log bundle from one field-test session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldReport {
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Pre-flight checklist with completion state
    pub checklist: Vec<ChecklistItem>,
    /// Free-form operator notes
    pub notes: String,
    /// Raw device log lines
    pub logs: Vec<String>,
}

/// A labeled section of generated text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading text without the `##` marker; empty for leading prose
    pub title: String,
    pub body: String,
}

/// Split generated text into sections on `##` heading markers.
///
/// Text before the first heading becomes a section with an empty title.
pub fn split_sections(text: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current = Section {
        title: String::new(),
        body: String::new(),
    };
    let mut has_content = false;

    for line in text.lines() {
        if let Some(heading) = line.strip_prefix("##") {
            if has_content || !current.title.is_empty() {
                current.body = current.body.trim_end().to_string();
                sections.push(current);
            }
            current = Section {
                title: heading.trim_start_matches('#').trim().to_string(),
                body: String::new(),
            };
            has_content = true;
        } else {
            if !line.trim().is_empty() {
                has_content = true;
            }
            current.body.push_str(line);
            current.body.push('\n');
        }
    }

    if has_content || !current.title.is_empty() {
        current.body = current.body.trim_end().to_string();
        sections.push(current);
    }

    sections
}

/// Build the reproducibility package text.
pub fn build_repro_package(
    session: &SessionFlags,
    activity: &[String],
    last_analysis: Option<&str>,
) -> String {
    let mut out = String::new();

    out.push_str("=== Underwhere Reproducibility Package ===\n");
    out.push_str(&format!(
        "generated: {}\n",
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    ));
    out.push_str(&format!("model: {}\n\n", crate::gen::MODEL));

    out.push_str("--- Session ---\n");
    out.push_str(&format!("onboarding seen: {}\n", session.onboarding_seen));
    out.push_str(&format!(
        "ethics acknowledged: {}\n",
        session.ethics_acknowledged
    ));
    out.push_str(&format!("reduced motion: {}\n", session.reduced_motion));
    out.push_str(&format!("high contrast: {}\n\n", session.high_contrast));

    out.push_str("--- Activity log ---\n");
    if activity.is_empty() {
        out.push_str("(empty)\n");
    } else {
        for entry in activity {
            out.push_str(entry);
            out.push('\n');
        }
    }
    out.push('\n');

    out.push_str("--- Fixture snapshot ---\n");
    match serde_json::to_string_pretty(&fixtures::snapshot()) {
        Ok(json) => {
            out.push_str(&json);
            out.push('\n');
        }
        Err(e) => {
            out.push_str(&format!("(snapshot unavailable: {})\n", e));
        }
    }
    out.push('\n');

    out.push_str("--- Last analysis ---\n");
    match last_analysis {
        Some(text) if !text.is_empty() => {
            out.push_str(text);
            out.push('\n');
        }
        _ => out.push_str("(none)\n"),
    }

    out
}
