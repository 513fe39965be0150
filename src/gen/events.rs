//! Generation events
//!
//! Events sent from the background generation thread to the main thread
//! via mpsc::channel. The main thread drains them in its event loop and
//! updates the display buffer.

use crate::gen::transport_types::GenError;
use std::sync::mpsc;

/// Channel sender for generation events
pub type GenSender = mpsc::Sender<GenEvent>;
/// Channel receiver for generation events
pub type GenReceiver = mpsc::Receiver<GenEvent>;

/// Event sent from the generation thread to the main thread
#[derive(Debug, Clone)]
pub enum GenEvent {
    /// Worker spawned (prompt submitted)
    Started { request_id: String, prompt: String },
    /// Streaming text increment received
    Chunk { request_id: String, content: String },
    /// Generation complete (full response available)
    Complete {
        request_id: String,
        full_text: String,
    },
    /// Generation failed
    Error { request_id: String, error: GenError },
}

impl GenEvent {
    /// Request ID for this event
    pub fn request_id(&self) -> &str {
        match self {
            GenEvent::Started { request_id, .. } => request_id,
            GenEvent::Chunk { request_id, .. } => request_id,
            GenEvent::Complete { request_id, .. } => request_id,
            GenEvent::Error { request_id, .. } => request_id,
        }
    }

    /// Check if this event ends the stream
    pub fn is_terminal(&self) -> bool {
        matches!(self, GenEvent::Complete { .. } | GenEvent::Error { .. })
    }
}
