//! Application state
//!
//! State is a single explicit struct with command-handler mutation entry
//! points:
//! - Transient UI state (input buffer, panel selection, walkthrough step)
//! - Streaming state (answer buffer, loading flag, worker handle)
//! - Session flags (process lifetime only, nothing persisted)

use std::collections::VecDeque;
use std::sync::mpsc::channel;
use std::sync::Arc;

use crate::gen::client::GenClient;
use crate::gen::events::{GenEvent, GenReceiver};
use crate::gen::worker::{spawn_generation, GenHandle};
use crate::modules::fixtures::{self, CanopyStat};
use crate::modules::{AnalysisRun, SurveyModule};
use crate::session::SessionFlags;

/// Maximum number of activity entries to retain (prevents unbounded growth)
const MAX_ACTIVITY_ENTRIES: usize = 200;

/// Activity log entry for the console panel
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub content: String,
    pub timestamp: u64,
}

/// Severity of a queued alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Warning,
    Error,
}

/// One queued toast/banner alert
#[derive(Debug, Clone)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

/// Onboarding walkthrough step machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkthroughStep {
    Welcome,
    Modules,
    Ask,
    Export,
    Done,
}

impl WalkthroughStep {
    pub fn next(self) -> Self {
        match self {
            WalkthroughStep::Welcome => WalkthroughStep::Modules,
            WalkthroughStep::Modules => WalkthroughStep::Ask,
            WalkthroughStep::Ask => WalkthroughStep::Export,
            WalkthroughStep::Export => WalkthroughStep::Done,
            WalkthroughStep::Done => WalkthroughStep::Done,
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            WalkthroughStep::Welcome => "Welcome to Underwhere. /walkthrough to continue.",
            WalkthroughStep::Modules => "List modules with /modules, open one with /module <id>.",
            WalkthroughStep::Ask => "Type any question to query AI Discovery.",
            WalkthroughStep::Export => "Bundle this session with /export <path>.",
            WalkthroughStep::Done => "",
        }
    }
}

/// Panel selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Transcript,
    Module,
    Diagnostics,
}

/// Main application state
pub struct App {
    /// Current input buffer
    pub input_buffer: String,
    /// Activity log (bounded)
    pub activity_log: Vec<ActivityEntry>,
    /// Pending alert queue (front = currently shown)
    pub alerts: VecDeque<Alert>,
    /// Completed (question, answer) pairs
    pub history: Vec<(String, String)>,
    /// Question currently being answered
    pub question: Option<String>,
    /// Streaming display buffer; chunks appended strictly in arrival order
    pub answer_buffer: String,
    /// Loading flag for the in-flight generation
    pub generating: bool,
    /// Last generation failure, shown in diagnostics
    pub gen_error: Option<String>,
    /// Most recent completed question/answer pair
    pub last_qa: Option<(String, String)>,
    /// Session flags
    pub session: SessionFlags,
    /// Walkthrough step
    pub walkthrough: WalkthroughStep,
    /// Active panel
    pub active_panel: Panel,
    /// Currently opened module
    pub selected_module: Option<&'static SurveyModule>,
    /// Most recent simulated analysis run
    pub last_run: Option<AnalysisRun>,
    /// Canopy rows shown in the module panel (stress helper appends here)
    pub canopy_rows: Vec<CanopyStat>,
    /// Should quit
    pub should_quit: bool,
    /// Consumer liveness: cleared on teardown so late chunks cannot
    /// mutate the buffer
    pub live: bool,

    client: Arc<GenClient>,
    /// Generation event receiver (from background worker)
    pub gen_rx: Option<GenReceiver>,
    /// Active worker handle (for cancellation/cleanup)
    pub gen_handle: Option<GenHandle>,
    /// Request ID of the in-flight generation
    pub current_request_id: Option<String>,
}

impl App {
    /// Create new application around a generation client
    pub fn new(client: Arc<GenClient>) -> Self {
        App {
            input_buffer: String::new(),
            activity_log: Vec::new(),
            alerts: VecDeque::new(),
            history: Vec::new(),
            question: None,
            answer_buffer: String::new(),
            generating: false,
            gen_error: None,
            last_qa: None,
            session: SessionFlags::new(),
            walkthrough: WalkthroughStep::Welcome,
            active_panel: Panel::Transcript,
            selected_module: None,
            last_run: None,
            canopy_rows: fixtures::canopy_stats(),
            should_quit: false,
            live: true,
            client,
            gen_rx: None,
            gen_handle: None,
            current_request_id: None,
        }
    }

    pub fn client(&self) -> &Arc<GenClient> {
        &self.client
    }

    /// Persistent configuration banner text, if the credential is missing
    pub fn config_banner(&self) -> Option<&str> {
        self.client.config().reason()
    }

    /// Add activity log entry
    pub fn log(&mut self, message: String) {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        self.activity_log.push(ActivityEntry {
            content: message,
            timestamp,
        });
        if self.activity_log.len() > MAX_ACTIVITY_ENTRIES {
            self.activity_log.remove(0);
        }
    }

    /// Activity log formatted for the reproducibility export
    pub fn activity_lines(&self) -> Vec<String> {
        self.activity_log
            .iter()
            .map(|e| {
                let time = chrono::DateTime::from_timestamp(e.timestamp as i64, 0)
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| e.timestamp.to_string());
                format!("{} {}", time, e.content)
            })
            .collect()
    }

    // Alert queue

    pub fn push_alert(&mut self, level: AlertLevel, message: String) {
        self.alerts.push_back(Alert { level, message });
    }

    /// Dismiss the currently shown alert
    pub fn dismiss_alert(&mut self) -> Option<Alert> {
        self.alerts.pop_front()
    }

    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    // Input handling

    pub fn handle_char(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    pub fn handle_backspace(&mut self) {
        self.input_buffer.pop();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // Walkthrough

    pub fn advance_walkthrough(&mut self) {
        self.walkthrough = self.walkthrough.next();
        if self.walkthrough == WalkthroughStep::Done {
            self.session.mark_onboarding_seen();
        }
    }

    pub fn skip_walkthrough(&mut self) {
        self.walkthrough = WalkthroughStep::Done;
        self.session.mark_onboarding_seen();
    }

    // Generation lifecycle

    /// Start a generation for `question`, sending `prompt` upstream.
    ///
    /// Checks the configuration flag first: when not configured this
    /// surfaces an alert and returns without spawning anything, so no
    /// network call is ever attempted.
    pub fn start_generation(&mut self, question: String, prompt: String) {
        if self.generating {
            self.push_alert(
                AlertLevel::Warning,
                "a generation is already running; /cancel first".to_string(),
            );
            return;
        }
        if let Some(reason) = self.client.config().reason() {
            let reason = reason.to_string();
            self.push_alert(
                AlertLevel::Error,
                format!("generation unavailable: {}", reason),
            );
            return;
        }

        self.gen_error = None;
        self.answer_buffer.clear();
        self.generating = true;
        self.question = Some(question.clone());
        self.log(format!("generation started: {}", question));

        let (tx, rx) = channel();
        let handle = spawn_generation(self.client.clone(), prompt, tx, None);
        self.gen_rx = Some(rx);
        self.gen_handle = Some(handle);
    }

    /// Cancel the in-flight generation, if any.
    ///
    /// Drops the event receiver along with the worker handle: chunks
    /// already queued in the channel at cancel time must never reach
    /// the buffer, and the worker's eventual terminal event is
    /// discarded rather than logged as a completion.
    pub fn cancel_generation(&mut self) {
        if let Some(handle) = self.gen_handle.take() {
            handle.shutdown();
            self.gen_rx = None;
            self.current_request_id = None;
            self.generating = false;
            self.question = None;
            self.log("generation cancelled".to_string());
        } else {
            self.log("no generation to cancel".to_string());
        }
    }

    /// Drop worker state after a terminal event
    fn cleanup_generation(&mut self) {
        if let Some(handle) = self.gen_handle.take() {
            handle.shutdown();
        }
        self.current_request_id = None;
    }

    /// Process generation events from the background worker.
    ///
    /// Non-blocking; drains all available events. Returns true when a
    /// terminal event was handled.
    pub fn process_gen_events(&mut self) -> bool {
        if let Some(rx) = self.gen_rx.take() {
            while let Ok(event) = rx.try_recv() {
                if self.handle_gen_event(event) {
                    self.gen_rx = Some(rx);
                    return true;
                }
            }
            self.gen_rx = Some(rx);
        }
        false
    }

    /// Handle a single generation event.
    /// Returns true if this is a terminal event.
    fn handle_gen_event(&mut self, event: GenEvent) -> bool {
        match event {
            GenEvent::Started { request_id, .. } => {
                self.current_request_id = Some(request_id);
                false
            }
            GenEvent::Chunk { content, .. } => {
                // Liveness check before every mutation: a torn-down
                // consumer must not grow the buffer
                if self.live {
                    self.answer_buffer.push_str(&content);
                }
                false
            }
            GenEvent::Complete { .. } => {
                // The buffer already holds the chunks in arrival order;
                // the terminal event only flips the loading flag
                self.generating = false;
                if let Some(question) = self.question.take() {
                    let pair = (question, self.answer_buffer.clone());
                    self.last_qa = Some(pair.clone());
                    self.history.push(pair);
                }
                self.log("generation complete".to_string());
                self.cleanup_generation();
                true
            }
            GenEvent::Error { error, .. } => {
                self.generating = false;
                let message = error.to_string();
                self.gen_error = Some(message.clone());
                self.push_alert(AlertLevel::Error, format!("generation failed: {}", message));
                self.question = None;
                self.cleanup_generation();
                true
            }
        }
    }
}
