//! Fake transport for testing
//!
//! Uses fixture strings instead of real HTTP calls, and counts outbound
//! calls so tests can assert that gated requests never hit the network.

use crate::gen::transport_types::{GenError, SyncTransport};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Fake transport for testing (uses fixture strings)
#[derive(Debug)]
pub struct FakeTransport {
    /// Response body to return
    pub response_body: String,
    /// Stream body to return line-by-line
    pub stream_body: String,
    /// Error message to return (if set)
    pub error_message: Option<String>,
    /// Number of post_json/post_stream invocations
    calls: Arc<AtomicUsize>,
}

impl FakeTransport {
    /// Create fake transport with given response
    pub fn new(response: &str) -> Self {
        Self {
            response_body: response.to_string(),
            stream_body: String::new(),
            error_message: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create fake transport with streaming response
    pub fn with_stream(response: &str, stream: &str) -> Self {
        Self {
            response_body: response.to_string(),
            stream_body: stream.to_string(),
            error_message: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create fake transport that returns a network error
    pub fn with_error(msg: &str) -> Self {
        Self {
            response_body: String::new(),
            stream_body: String::new(),
            error_message: Some(msg.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared call counter, grab before handing the transport to a client
    pub fn counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

impl SyncTransport for FakeTransport {
    fn post_json(
        &self,
        _url: &str,
        _headers: &[(&str, &str)],
        _body: &str,
    ) -> Result<String, GenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref msg) = self.error_message {
            return Err(GenError::Network(msg.clone()));
        }
        Ok(self.response_body.clone())
    }

    fn post_stream<F>(
        &self,
        _url: &str,
        _headers: &[(&str, &str)],
        _body: &str,
        mut on_line: F,
    ) -> Result<String, GenError>
    where
        F: FnMut(&str),
    {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref msg) = self.error_message {
            return Err(GenError::Network(msg.clone()));
        }
        let body = if self.stream_body.is_empty() {
            &self.response_body
        } else {
            &self.stream_body
        };
        let mut full = String::new();
        for line in body.lines() {
            on_line(line);
            full.push_str(line);
            full.push('\n');
        }
        Ok(full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_transport_basic() {
        let transport = FakeTransport::new("test response");
        let result = transport.post_json("http://test", &[], "{}");
        assert_eq!(result.unwrap(), "test response");
    }

    #[test]
    fn test_fake_transport_with_error() {
        let transport = FakeTransport::with_error("test error");
        let result = transport.post_json("http://test", &[], "{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_fake_transport_stream() {
        let transport = FakeTransport::with_stream("response", "line1\nline2\nline3");
        let mut lines = Vec::new();
        let result = transport.post_stream("http://test", &[], "{}", |line| {
            lines.push(line.to_string());
        });
        assert!(result.is_ok());
        assert_eq!(lines, vec!["line1", "line2", "line3"]);
    }

    #[test]
    fn test_fake_transport_counts_calls() {
        let transport = FakeTransport::new("ok");
        let counter = transport.counter();
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        let _ = transport.post_json("http://test", &[], "{}");
        let _ = transport.post_stream("http://test", &[], "{}", |_| {});
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_gen_error_display() {
        let err = GenError::Network("test".to_string());
        assert_eq!(format!("{}", err), "network error: test");

        let err = GenError::Http {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(format!("{}", err), "HTTP error 404: not found");

        let err = GenError::NotConfigured("API_KEY missing".to_string());
        assert!(format!("{}", err).contains("API_KEY missing"));
    }
}
