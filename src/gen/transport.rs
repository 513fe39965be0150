//! HTTP transport for the generation client
//!
//! Concrete transport dispatch over the real ureq client and the
//! fixture-driven fake used in tests.

pub use crate::gen::transport_fake::FakeTransport;
pub use crate::gen::transport_types::{GenError, SyncTransport};
pub use crate::gen::transport_ureq::UreqTransport;

/// Concrete transport enum
///
/// Wraps both transport types; the trait has a generic streaming method
/// and is not dyn-compatible.
#[derive(Debug)]
pub enum Transport {
    Real(UreqTransport),
    Fake(FakeTransport),
}

impl SyncTransport for Transport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, GenError> {
        match self {
            Transport::Real(t) => t.post_json(url, headers, body),
            Transport::Fake(t) => t.post_json(url, headers, body),
        }
    }

    fn post_stream<F>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
        on_line: F,
    ) -> Result<String, GenError>
    where
        F: FnMut(&str),
    {
        match self {
            Transport::Real(t) => t.post_stream(url, headers, body, on_line),
            Transport::Fake(t) => t.post_stream(url, headers, body, on_line),
        }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Transport::Real(UreqTransport::new())
    }
}
