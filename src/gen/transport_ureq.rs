//! Real HTTP transport using ureq
//!
//! Synchronous blocking HTTP client for the generation service.

use crate::gen::transport_types::{GenError, SyncTransport};
use std::io::{BufRead, Read};

/// Default request timeout in seconds.
///
/// Covers the whole streamed read: a stalled upstream surfaces as a
/// transport error instead of hanging the worker thread forever.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Real HTTP transport using ureq
#[derive(Debug)]
pub struct UreqTransport {
    /// Timeout in seconds for requests
    timeout: u64,
}

impl UreqTransport {
    /// Create new transport with the default timeout
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create transport with custom timeout
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            timeout: timeout_secs,
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncTransport for UreqTransport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, GenError> {
        let mut request =
            ureq::request("POST", url).timeout(std::time::Duration::from_secs(self.timeout));

        for (key, value) in headers {
            request = request.set(key, value);
        }

        // send_string surfaces 4xx/5xx as Err via the ureq::Error
        // conversion, so a response here is always a success status
        let response = request.send_string(body)?;

        let mut reader = response.into_reader();
        let mut body = String::new();
        reader.read_to_string(&mut body)?;
        Ok(body)
    }

    fn post_stream<F>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
        mut on_line: F,
    ) -> Result<String, GenError>
    where
        F: FnMut(&str),
    {
        tracing::debug!(url, body_len = body.len(), timeout = self.timeout, "POST stream");
        let mut request =
            ureq::request("POST", url).timeout(std::time::Duration::from_secs(self.timeout));

        for (key, value) in headers {
            request = request.set(key, value);
        }

        let response = request.send_string(body)?;
        tracing::debug!(status = response.status(), "stream response opened");

        // Read response body line by line. A read failure after chunks
        // began is a stream error, not a fresh network failure.
        let reader = response.into_reader();
        let mut buf_reader = std::io::BufReader::new(reader);
        let mut full_body = String::new();
        let mut line_buffer = String::new();

        loop {
            line_buffer.clear();
            let bytes_read = buf_reader
                .read_line(&mut line_buffer)
                .map_err(|e| GenError::Stream(e.to_string()))?;
            if bytes_read == 0 {
                break;
            }
            let line = line_buffer.trim_end();
            on_line(line);
            full_body.push_str(line);
            full_body.push('\n');
        }

        Ok(full_body)
    }
}
