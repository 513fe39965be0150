//! Generation preflight check
//!
//! Establishes the configuration outcome once at startup from the
//! environment credential. The result is logged once and never
//! re-evaluated; the console runs fine without a credential, with
//! generation features disabled.
//!
//! NO prompts, NO network calls, NO credential validation.

use crate::gen::client::GenClient;
use crate::gen::API_KEY_VAR;

/// Outcome of the generation preflight check
#[derive(Debug, Clone, PartialEq)]
pub enum PreflightOutcome {
    /// Credential present; generation features are available
    Proceed,
    /// No usable credential; run with generation disabled
    Degraded(String),
}

/// Run the generation preflight against an already-built client.
///
/// Logs the outcome exactly once so operators can tell from the log
/// whether generation was available for the whole session.
pub fn run_gen_preflight(client: &GenClient) -> PreflightOutcome {
    match client.config().reason() {
        None => {
            tracing::info!(model = client.model(), "generation configured");
            PreflightOutcome::Proceed
        }
        Some(reason) => {
            tracing::warn!(
                reason = reason,
                "generation disabled; set {} to enable",
                API_KEY_VAR
            );
            PreflightOutcome::Degraded(reason.to_string())
        }
    }
}
