//! Reporting of recoverable, per-file problems.
//! Skipped files are not errors; they are reported through a sink and
//! the conversion carries on with the next file.

use std::cell::RefCell;

/// Receiver of diagnostics produced while converting a collection.
pub trait DiagnosticSink {
    /// Reports a single diagnostic message.
    fn report(&self, message: &str);
}

/// Sink that forwards every diagnostic to the `log` facade as a warning.
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for LogSink {
    fn report(&self, message: &str) {
        log::warn!("{message}");
    }
}

/// Sink that keeps every diagnostic in memory, in arrival order.
///
/// Intended for tests and for embedders that want to inspect skipped files
/// after a run. The binary always reports through [`LogSink`].
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: RefCell<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the messages reported so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
