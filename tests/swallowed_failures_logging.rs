// Swallowed failures must still be visible in logs, without leaking JSON payloads.
use domkit::api::{MemoryEvent, from_json, stop_propagation};
use serde_json::json;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("capture lock")).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_logs(run: impl FnOnce()) -> String {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_target(false)
        .with_ansi(false)
        .with_writer(capture.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    capture.contents()
}

#[test]
fn failed_suppression_is_logged_as_warning() {
    let ev = MemoryEvent::failing();
    let logs = capture_logs(|| stop_propagation(&ev));
    assert!(logs.contains("WARN"));
    assert!(logs.contains("event stopPropagation failed"));
    assert!(logs.contains("event preventDefault failed"));
}

#[test]
fn successful_suppression_logs_nothing() {
    let ev = MemoryEvent::new();
    let logs = capture_logs(|| stop_propagation(&ev));
    assert!(logs.is_empty(), "unexpected logs: {logs}");
}

#[test]
fn json_fallback_logs_category_not_payload() {
    let mut value = json!(null);
    let logs = capture_logs(|| value = from_json("password=hunter2"));
    assert_eq!(value, json!({}));
    assert!(logs.contains("category=\"syntax\"") || logs.contains("category=syntax"));
    assert!(!logs.contains("hunter2"));
}
