//! Transport types
//!
//! Common types shared across transport implementations.

/// Generation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenError {
    /// Credential missing or invalid at startup
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// Prompt was empty after trimming
    #[error("empty prompt")]
    EmptyPrompt,

    /// Network error (connection refused, timeout, etc.)
    #[error("network error: {0}")]
    Network(String),

    /// HTTP error (non-2xx status)
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Authentication failed
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Rate limited by the hosted service
    #[error("rate limited{retry_after}")]
    RateLimited { retry_after: String },

    /// Malformed response from the hosted service
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Stream interrupted after chunks began
    #[error("stream error: {0}")]
    Stream(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<std::io::Error> for GenError {
    fn from(err: std::io::Error) -> Self {
        GenError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        GenError::Json(err.to_string())
    }
}

impl From<ureq::Error> for GenError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(401, _) => {
                GenError::Authentication("invalid API key".to_string())
            }
            ureq::Error::Status(429, _) => GenError::RateLimited {
                retry_after: String::new(),
            },
            ureq::Error::Status(code, _response) => GenError::Http {
                status: code,
                message: format!("{}", code),
            },
            ureq::Error::Transport(err) => GenError::Network(err.to_string()),
        }
    }
}

/// Synchronous HTTP transport
///
/// Abstraction over the HTTP client to enable testing with FakeTransport.
pub trait SyncTransport: Send + Sync {
    /// POST JSON request and return the full response body
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, GenError>;

    /// POST JSON request and process the streaming response line-by-line
    ///
    /// Calls `on_line` for each line of the response body.
    /// Returns the concatenated response body.
    fn post_stream<F>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
        on_line: F,
    ) -> Result<String, GenError>
    where
        F: FnMut(&str);
}
