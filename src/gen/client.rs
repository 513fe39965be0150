//! Generation client
//!
//! Single point of contact to the hosted text-generation service.
//! Configuration is established once at startup from the environment and
//! never re-checked; a missing credential gates every request without
//! touching the network.

use crate::gen::transport::{SyncTransport, Transport, UreqTransport};
use crate::gen::transport_types::GenError;

// Public parsing module (re-exported for testing)
pub use crate::gen::sse::{chunk_text, extract_text};

/// Model identifier, fixed for this product.
pub const MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the service credential.
pub const API_KEY_VAR: &str = "API_KEY";

/// Environment override for the service endpoint (hermetic testing).
pub const API_URL_VAR: &str = "UNDERWHERE_API_URL";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Whether the process located its generation credential at startup.
///
/// `NotConfigured` is terminal for the process lifetime: there is no
/// retry-on-demand path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigState {
    Configured { api_key: String },
    NotConfigured { reason: String },
}

impl ConfigState {
    /// Read the credential from the environment, once.
    pub fn from_env() -> Self {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => ConfigState::Configured { api_key: key },
            Ok(_) => ConfigState::NotConfigured {
                reason: format!("{} empty", API_KEY_VAR),
            },
            Err(_) => ConfigState::NotConfigured {
                reason: format!("{} missing", API_KEY_VAR),
            },
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, ConfigState::Configured { .. })
    }

    /// Failure reason when not configured.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ConfigState::Configured { .. } => None,
            ConfigState::NotConfigured { reason } => Some(reason),
        }
    }
}

/// Client for the hosted generation service
#[derive(Debug)]
pub struct GenClient {
    /// Endpoint base URL
    base_url: String,
    /// Model name
    model: String,
    /// Credential state, captured once
    config: ConfigState,
    /// HTTP transport
    transport: Transport,
}

impl GenClient {
    /// Create the client from the process environment.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            model: MODEL.to_string(),
            config: ConfigState::from_env(),
            transport: Transport::Real(UreqTransport::new()),
        }
    }

    /// Create client with explicit state and transport (for testing)
    pub fn with_transport(config: ConfigState, transport: Transport) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: MODEL.to_string(),
            config,
            transport,
        }
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn stream_url(&self) -> String {
        format!(
            "{}/{}:streamGenerateContent?alt=sse",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Build the generate request body
    fn build_request(&self, prompt: &str) -> Result<String, GenError> {
        let request = serde_json::json!({
            "contents": [
                {"role": "user", "parts": [{"text": prompt}]}
            ]
        });
        Ok(request.to_string())
    }

    /// Stream a generation, invoking `on_chunk` for each text increment.
    ///
    /// Exactly one outbound call per invocation; no retries, no caching.
    /// Returns the full response text (concatenated chunks). Pre-stream
    /// failures (gating, HTTP, network) surface synchronously.
    pub fn generate_streaming<F>(&self, prompt: &str, mut on_chunk: F) -> Result<String, GenError>
    where
        F: FnMut(&str),
    {
        let api_key = match &self.config {
            ConfigState::Configured { api_key } => api_key.clone(),
            ConfigState::NotConfigured { reason } => {
                return Err(GenError::NotConfigured(reason.clone()));
            }
        };

        if prompt.trim().is_empty() {
            return Err(GenError::EmptyPrompt);
        }

        let url = self.stream_url();
        let body = self.build_request(prompt)?;
        let headers = [
            ("Content-Type", "application/json"),
            ("x-goog-api-key", api_key.as_str()),
        ];

        let mut full_content = String::new();
        self.transport.post_stream(&url, &headers, &body, |line| {
            if let Some(text) = chunk_text(line) {
                on_chunk(&text);
                full_content.push_str(&text);
            }
        })?;

        Ok(full_content)
    }
}
