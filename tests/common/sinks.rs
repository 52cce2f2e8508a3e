#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use greeter::logging::{EventSink, Severity};

/// Event sink double that appends every call to a shared list.
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<(Severity, String)>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<(Severity, String)> {
        self.records.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn record(&self, severity: Severity, message: &str) {
        self.records
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

/// Event sink double that panics on every call, standing in for a sink
/// whose backing destination is unreachable.
pub struct PanickingSink;

impl EventSink for PanickingSink {
    fn record(&self, _severity: Severity, _message: &str) {
        panic!("sink unavailable");
    }
}
