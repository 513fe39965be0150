//! UI streaming integration tests
//!
//! Tests the full generation workflow from command handling through
//! event streaming to process_gen_events, without making real HTTP calls.

use std::sync::atomic::Ordering;
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use underwhere::gen::client::{ConfigState, GenClient};
use underwhere::gen::events::{GenEvent, GenSender};
use underwhere::gen::transport::{FakeTransport, Transport};
use underwhere::gen::worker::spawn_generation;
use underwhere::ui::handlers::execute_command;
use underwhere::ui::input::Command;
use underwhere::ui::state::{AlertLevel, App};

/// SSE line carrying one text chunk, in the upstream wire shape
fn sse_line(text: &str) -> String {
    format!(
        "data: {}",
        serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": text}]}}
            ]
        })
    )
}

fn configured_app_with_stream(chunks: &[&str]) -> App {
    let mut body = chunks.iter().map(|c| sse_line(c)).collect::<Vec<_>>();
    body.push("data: [DONE]".to_string());
    let transport = FakeTransport::with_stream("", &body.join("\n"));
    let client = GenClient::with_transport(
        ConfigState::Configured {
            api_key: "test-key".to_string(),
        },
        Transport::Fake(transport),
    );
    App::new(Arc::new(client))
}

/// Drain generation events until a terminal event or the deadline
fn pump_until_terminal(app: &mut App, deadline: Duration) -> bool {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if app.process_gen_events() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    false
}

/// Simulate a worker thread that sends events through the channel
fn simulate_worker(tx: GenSender, request_id: &str, chunks: Vec<&'static str>, fail_after: Option<&'static str>) -> thread::JoinHandle<()> {
    let request_id = request_id.to_string();
    thread::spawn(move || {
        let _ = tx.send(GenEvent::Started {
            request_id: request_id.clone(),
            prompt: "prompt".to_string(),
        });
        for chunk in chunks {
            thread::sleep(Duration::from_millis(5));
            let _ = tx.send(GenEvent::Chunk {
                request_id: request_id.clone(),
                content: chunk.to_string(),
            });
        }
        match fail_after {
            Some(message) => {
                let _ = tx.send(GenEvent::Error {
                    request_id,
                    error: underwhere::GenError::Network(message.to_string()),
                });
            }
            None => {
                let _ = tx.send(GenEvent::Complete {
                    request_id,
                    full_text: String::new(),
                });
            }
        }
    })
}

/// End-to-end: a question routed through the command handler streams its
/// answer into the display buffer, and completion flips the loading flag.
#[test]
fn test_end_to_end_question_streams_into_buffer() {
    let mut app = configured_app_with_stream(&["## Analysis\n", "Slope is stable."]);

    execute_command(&mut app, Command::Ask("Assess slope stability".to_string()));
    assert!(app.generating);

    assert!(pump_until_terminal(&mut app, Duration::from_secs(2)));

    assert_eq!(app.answer_buffer, "## Analysis\nSlope is stable.");
    assert!(!app.generating);
    let (question, answer) = app.last_qa.as_ref().unwrap();
    assert_eq!(question, "Assess slope stability");
    assert_eq!(answer, "## Analysis\nSlope is stable.");
    assert!(app.gen_error.is_none());
}

/// Chunk ordering: the final buffer equals the concatenation of the
/// chunks in arrival order, for any number of chunks including zero.
#[test]
fn test_buffer_equals_concatenation_in_order() {
    let mut app = configured_app_with_stream(&["a", "b", "c", "d"]);
    execute_command(&mut app, Command::Ask("q".to_string()));
    assert!(pump_until_terminal(&mut app, Duration::from_secs(2)));
    assert_eq!(app.answer_buffer, "abcd");
}

#[test]
fn test_zero_chunks_completes_with_empty_buffer() {
    let mut app = configured_app_with_stream(&[]);
    execute_command(&mut app, Command::Ask("q".to_string()));
    assert!(pump_until_terminal(&mut app, Duration::from_secs(2)));
    assert_eq!(app.answer_buffer, "");
    assert!(!app.generating);
    assert!(app.gen_error.is_none());
}

/// Cancellation: once the consumer is torn down, late chunks never
/// mutate the buffer. The buffer holds exactly what arrived before.
#[test]
fn test_teardown_freezes_buffer_against_late_chunks() {
    let mut app = configured_app_with_stream(&[]);
    let (tx, rx) = channel();
    app.gen_rx = Some(rx);
    app.generating = true;
    app.question = Some("q".to_string());

    let _ = tx.send(GenEvent::Started {
        request_id: "r".to_string(),
        prompt: "p".to_string(),
    });
    let _ = tx.send(GenEvent::Chunk {
        request_id: "r".to_string(),
        content: "early".to_string(),
    });
    app.process_gen_events();
    assert_eq!(app.answer_buffer, "early");

    // Consumer goes away; chunks still in flight must be dropped
    app.live = false;
    let _ = tx.send(GenEvent::Chunk {
        request_id: "r".to_string(),
        content: "late".to_string(),
    });
    let _ = tx.send(GenEvent::Complete {
        request_id: "r".to_string(),
        full_text: "earlylate".to_string(),
    });
    assert!(pump_until_terminal(&mut app, Duration::from_secs(1)));

    assert_eq!(app.answer_buffer, "early");
    assert!(!app.generating);
}

/// Cancellation: chunks already sitting in the channel when the
/// operator cancels are discarded, and the worker's late terminal
/// event never logs a completion after the cancel.
#[test]
fn test_cancel_discards_chunks_queued_before_cancel() {
    let mut app = configured_app_with_stream(&[]);
    let (tx, rx) = channel();
    app.gen_rx = Some(rx);
    app.generating = true;
    app.question = Some("q".to_string());

    // Real worker handle for /cancel to tear down; its events go to a
    // throwaway channel
    let (worker_tx, _worker_rx) = channel();
    let worker_client = GenClient::with_transport(
        ConfigState::Configured {
            api_key: "k".to_string(),
        },
        Transport::Fake(FakeTransport::new("")),
    );
    app.gen_handle = Some(spawn_generation(
        Arc::new(worker_client),
        "p".to_string(),
        worker_tx,
        None,
    ));

    let _ = tx.send(GenEvent::Chunk {
        request_id: "r".to_string(),
        content: "early".to_string(),
    });
    app.process_gen_events();
    assert_eq!(app.answer_buffer, "early");

    // Still queued when the cancel lands
    let _ = tx.send(GenEvent::Chunk {
        request_id: "r".to_string(),
        content: "late".to_string(),
    });
    let _ = tx.send(GenEvent::Complete {
        request_id: "r".to_string(),
        full_text: "earlylate".to_string(),
    });

    execute_command(&mut app, Command::Cancel);
    app.process_gen_events();

    assert_eq!(app.answer_buffer, "early");
    assert!(!app.generating);
    let log: Vec<&str> = app.activity_log.iter().map(|e| e.content.as_str()).collect();
    assert!(log.contains(&"generation cancelled"));
    assert!(!log.iter().any(|l| l.contains("generation complete")));
}

/// Error termination: the loading flag flips exactly once, the first k
/// chunks are kept, and the failure is recorded.
#[test]
fn test_error_keeps_partial_chunks_and_records_failure() {
    let mut app = configured_app_with_stream(&[]);
    let (tx, rx) = channel();
    app.gen_rx = Some(rx);
    app.generating = true;
    app.question = Some("q".to_string());

    let worker = simulate_worker(tx, "r-err", vec!["first ", "second"], Some("connection reset"));
    assert!(pump_until_terminal(&mut app, Duration::from_secs(2)));
    worker.join().unwrap();

    assert_eq!(app.answer_buffer, "first second");
    assert!(!app.generating);
    assert!(app.gen_error.as_ref().unwrap().contains("connection reset"));
    assert_eq!(app.current_alert().unwrap().level, AlertLevel::Error);
}

/// Simulated worker completion through the event channel (no transport).
#[test]
fn test_simulated_worker_lifecycle() {
    let mut app = configured_app_with_stream(&[]);
    let (tx, rx) = channel();
    app.gen_rx = Some(rx);
    app.generating = true;
    app.question = Some("hello".to_string());

    let worker = simulate_worker(tx, "r-ok", vec!["Hello", ", world", "!"], None);
    assert!(pump_until_terminal(&mut app, Duration::from_secs(2)));
    worker.join().unwrap();

    assert_eq!(app.answer_buffer, "Hello, world!");
    assert!(!app.generating);
    assert_eq!(app.history.len(), 1);
    assert_eq!(app.history[0].0, "hello");
}

/// A missing credential surfaces its reason in the alert and the
/// persistent banner, with zero outbound calls.
#[test]
fn test_not_configured_surfaces_reason_with_zero_calls() {
    let transport = FakeTransport::new("");
    let calls = transport.counter();
    let client = GenClient::with_transport(
        ConfigState::NotConfigured {
            reason: "API_KEY missing".to_string(),
        },
        Transport::Fake(transport),
    );
    let mut app = App::new(Arc::new(client));

    execute_command(&mut app, Command::Ask("Assess slope stability".to_string()));

    assert!(!app.generating);
    assert!(app.gen_handle.is_none());
    assert!(app
        .current_alert()
        .unwrap()
        .message
        .contains("API_KEY missing"));
    assert!(app.config_banner().unwrap().contains("API_KEY missing"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

/// Repeated questions reuse the startup configuration without
/// re-evaluating the environment; each completed question lands in
/// history with its own answer.
#[test]
fn test_successive_questions_each_complete() {
    let mut app = configured_app_with_stream(&["answer"]);

    for n in 0..3 {
        execute_command(&mut app, Command::Ask(format!("question {}", n)));
        assert!(pump_until_terminal(&mut app, Duration::from_secs(2)));
        assert_eq!(app.answer_buffer, "answer");
    }

    assert_eq!(app.history.len(), 3);
    assert_eq!(app.history[2].0, "question 2");
}
