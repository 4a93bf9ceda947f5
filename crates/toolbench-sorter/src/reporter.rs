/// Reporting channel for the sorter.
///
/// The sorter never configures or reaches for a process-wide logger. It
/// writes to whatever `Reporter` the caller hands in: the binary passes a
/// [`TracingReporter`], tests pass a [`CollectingReporter`].
use std::cell::RefCell;

/// Sink for the sorter's human-readable messages.
pub trait Reporter {
    /// Progress and summary lines.
    fn info(&self, message: &str);
    /// Failures detected during the run.
    fn error(&self, message: &str);
}

/// Forwards messages to `tracing` at INFO and ERROR level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Keeps every message in memory, in arrival order.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    infos: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Reporter for CollectingReporter {
    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_owned());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_owned());
    }
}
