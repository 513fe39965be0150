//! Prompt builders
//!
//! Pure functions that render the instruction block sent to the hosted
//! model. Fixed framing plus interpolated session data; no I/O, no
//! randomness — identical input always yields the identical string.
//! Empty optional fields render as empty sections rather than erroring.

use crate::report::FieldReport;

const DISCOVERY_FRAMING: &str = "You are the analysis assistant for a field survey platform. \
Answer the operator's question about their survey area. \
Structure the answer with markdown '##' section headings. \
Be concise and note when a claim would need on-site measurement to confirm.";

const REPORT_FRAMING: &str = "You are reviewing a field-test session log for a survey device. \
Summarize what went well, flag anomalies in the device logs, and suggest follow-ups. \
Structure the answer with markdown '##' section headings.";

const EXPLAIN_FRAMING: &str = "You previously answered an operator's question. \
Explain the reasoning behind that answer in plainer terms, \
and state the assumptions it rests on.";

/// Build the AI Discovery prompt for a free-form operator query.
pub fn build_discovery_prompt(query: &str) -> String {
    format!("{}\n\nOperator question:\n{}", DISCOVERY_FRAMING, query)
}

/// Build the field-test report analysis prompt.
pub fn build_report_prompt(report: &FieldReport) -> String {
    let checklist = report
        .checklist
        .iter()
        .map(|item| {
            format!(
                "- [{}] {}",
                if item.done { "x" } else { " " },
                item.label
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let logs = report.logs.join("\n");

    format!(
        "{}\n\nSession duration: {} minutes\n\nChecklist:\n{}\n\nOperator notes:\n{}\n\nDevice logs:\n{}",
        REPORT_FRAMING, report.duration_minutes, checklist, report.notes, logs
    )
}

/// Build the explanation prompt for a prior question/answer pair.
pub fn build_explain_prompt(question: &str, answer: &str) -> String {
    format!(
        "{}\n\nOriginal question:\n{}\n\nAnswer given:\n{}",
        EXPLAIN_FRAMING, question, answer
    )
}
