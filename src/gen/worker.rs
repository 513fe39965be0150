//! Background generation thread
//!
//! Spawns a fire-and-forget thread that owns the blocking HTTP stream.
//! The thread sends events via mpsc::channel to the main thread; a shared
//! shutdown flag is checked before every chunk send so a cancelled
//! consumer stops receiving appends immediately.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::gen::client::GenClient;
use crate::gen::events::{GenEvent, GenSender};

/// Active generation thread handle (for cleanup)
#[derive(Debug)]
pub struct GenHandle {
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
    request_id: String,
}

impl GenHandle {
    fn new(handle: JoinHandle<()>, shutdown: Arc<AtomicBool>, request_id: String) -> Self {
        Self {
            handle: Some(handle),
            shutdown,
            request_id,
        }
    }

    /// Request ID for this worker
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Check if the worker is still running
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    /// Request shutdown (worker checks the flag before each chunk send)
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    /// Join the worker with a timeout
    pub fn join_timeout(mut self, duration: Duration) -> Result<(), WorkerTimeoutError> {
        if let Some(handle) = self.handle.take() {
            let start = std::time::Instant::now();
            while start.elapsed() < duration {
                if handle.is_finished() {
                    return handle.join().map_err(|_| WorkerTimeoutError::JoinError);
                }
                thread::sleep(Duration::from_millis(50));
            }
            self.shutdown();
            Err(WorkerTimeoutError::Timeout {
                request_id: self.request_id,
                elapsed: start.elapsed(),
            })
        } else {
            Ok(())
        }
    }
}

/// Worker timeout error
#[derive(Debug)]
pub enum WorkerTimeoutError {
    /// Worker did not finish within timeout
    Timeout {
        request_id: String,
        elapsed: Duration,
    },
    /// Worker panicked or join failed
    JoinError,
}

impl std::fmt::Display for WorkerTimeoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkerTimeoutError::Timeout {
                request_id,
                elapsed,
            } => write!(
                f,
                "generation worker {:?} timed out after {:?}",
                request_id, elapsed
            ),
            WorkerTimeoutError::JoinError => write!(f, "generation worker failed to join"),
        }
    }
}

impl std::error::Error for WorkerTimeoutError {}

/// Spawn a background generation worker
///
/// Sends `Started` immediately, then `Chunk` events as increments arrive,
/// then exactly one terminal event (`Complete` or `Error`).
///
/// The worker does only generation I/O; all state mutation happens on the
/// main thread as it drains the channel.
pub fn spawn_generation(
    client: Arc<GenClient>,
    prompt: String,
    tx: GenSender,
    request_id: Option<String>,
) -> GenHandle {
    let request_id = request_id.unwrap_or_else(generate_request_id);
    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_clone = shutdown.clone();

    let _ = tx.send(GenEvent::Started {
        request_id: request_id.clone(),
        prompt: prompt.clone(),
    });

    let request_id_for_handle = request_id.clone();

    let handle = thread::spawn(move || {
        tracing::debug!(request_id, "generation worker started");

        let result = client.generate_streaming(&prompt, |chunk| {
            if shutdown_clone.load(Ordering::Relaxed) {
                return;
            }
            let _ = tx.send(GenEvent::Chunk {
                request_id: request_id.clone(),
                content: chunk.to_string(),
            });
        });

        match result {
            Ok(full_text) => {
                tracing::debug!(request_id, chars = full_text.len(), "generation complete");
                let _ = tx.send(GenEvent::Complete {
                    request_id,
                    full_text,
                });
            }
            Err(error) => {
                tracing::debug!(request_id, %error, "generation failed");
                let _ = tx.send(GenEvent::Error { request_id, error });
            }
        }
    });

    GenHandle::new(handle, shutdown, request_id_for_handle)
}

/// Generate a request ID
fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    format!("gen-{:x}", nanos)
}
