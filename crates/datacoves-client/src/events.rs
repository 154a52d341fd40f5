//! Observability notes emitted by the client before each API request.

/// Emit an informational note about client activity.
///
/// One trait, one operation — implement this to capture notes in tests
/// instead of sending them to the global tracing subscriber.
pub trait EmitNote {
    fn note(&self, msg: &str);
}

/// Zero-sized production sink — forwards notes to `tracing::info!`.
pub struct TracingNotes;

impl EmitNote for TracingNotes {
    fn note(&self, msg: &str) {
        tracing::info!("{msg}");
    }
}

/// Records every note emitted during a test run.
///
/// Backed by `Arc<Mutex<Vec<String>>>` so it is `Clone`, `Send`, and `Sync` —
/// keep one handle in the test and move its clone into the client.
#[cfg(any(test, feature = "test-support"))]
#[derive(Clone, Default)]
pub struct MockNotes {
    records: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

#[cfg(any(test, feature = "test-support"))]
impl MockNotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> Vec<String> {
        self.records.lock().unwrap().clone()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl EmitNote for MockNotes {
    fn note(&self, msg: &str) {
        self.records.lock().unwrap().push(msg.to_string());
    }
}
