//! Generation boundary
//!
//! Streaming text generation against the hosted service: blocking HTTP
//! transport with a fake for tests, an SSE parser, the client with its
//! once-at-startup configuration state, and the background worker that
//! feeds events to the UI thread.

pub mod client;
pub mod events;
pub mod sse;
pub mod transport;
pub mod transport_fake;
pub mod transport_types;
pub mod transport_ureq;
pub mod worker;

pub use client::{ConfigState, GenClient, API_KEY_VAR, MODEL};
pub use events::{GenEvent, GenReceiver, GenSender};
pub use transport::{GenError, SyncTransport, Transport};
pub use worker::{spawn_generation, GenHandle};
