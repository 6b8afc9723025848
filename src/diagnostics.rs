//! Injected diagnostic sinks.
//!
//! Evaluation and merging report recoverable oddities (skipped degenerate
//! cells, exhausted candidate lists, union sizes) through a sink supplied
//! by the caller instead of a process-wide logger. [`LogSink`] forwards to
//! the `log` facade and is the default; [`NullSink`] discards everything.

/// Receiver for diagnostic messages emitted during field operations.
pub trait DiagnosticSink {
    /// Fine-grained trace of internal decisions.
    fn debug(&self, message: &str);
    /// Noteworthy but expected events.
    fn info(&self, message: &str);
    /// Failures about to be reported to the caller.
    fn error(&self, message: &str);
}

/// Sink forwarding to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn debug(&self, message: &str) {
        log::debug!("{message}");
    }

    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Sink that discards every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn debug(&self, _message: &str) {}

    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
