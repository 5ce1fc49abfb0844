//! Test helpers shared by the unit tests.
//!
//! Provides:
//! - [`RecordingAdvice`]: an advice that records every hook it sees
//! - [`capture_logs`]: runs a closure under a scoped subscriber and returns
//!   the formatted log lines it emitted

use std::fmt;
use std::io;
use std::sync::{Arc, Mutex};

use crate::advice::Advice;
use crate::model::invocation::Invocation;

pub type EventLog = Arc<Mutex<Vec<String>>>;

/// Pushes `name:hook` entries into an [`EventLog`], which can be shared
/// between several advices to observe their interleaving.
pub struct RecordingAdvice {
    name: String,
    log: EventLog,
}

impl RecordingAdvice {
    pub fn new(name: &str) -> Self {
        Self::sharing(name, &EventLog::default())
    }

    pub fn sharing(name: &str, log: &EventLog) -> Self {
        Self {
            name: name.to_string(),
            log: Arc::clone(log),
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn push(&self, entry: String) {
        self.log.lock().unwrap().push(entry);
    }
}

impl Advice for RecordingAdvice {
    fn name(&self) -> &str {
        &self.name
    }

    fn before(&self, _invocation: &Invocation) {
        self.push(format!("{}:before", self.name));
    }

    fn after_returning(&self, _invocation: &Invocation, result: &dyn fmt::Debug) {
        self.push(format!("{}:return={result:?}", self.name));
    }

    fn after_throwing(&self, _invocation: &Invocation, error: &dyn fmt::Display) {
        self.push(format!("{}:ex={error}", self.name));
    }

    fn after(&self, _invocation: &Invocation) {
        self.push(format!("{}:after", self.name));
    }
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with INFO-level events rendered as bare messages into memory.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_target(false)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);

    let raw = buffer.0.lock().unwrap().clone();
    let lines = String::from_utf8_lossy(&raw)
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    (out, lines)
}
