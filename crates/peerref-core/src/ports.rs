use std::sync::{Arc, Mutex};

/// Append-only channel for non-fatal decode diagnostics.
///
/// Fire-and-forget: implementations must not block and cannot fail towards the
/// caller.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, message: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, message: &str) {
        (**self).report(message)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }
}

/// Reports through `tracing` at error level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, message: &str) {
        tracing::error!(target: "peerref_core::input_dialog", "{message}");
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SilentDiagnostics;

impl DiagnosticSink for SilentDiagnostics {
    fn report(&self, _message: &str) {}
}

/// Keeps every reported message in order.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn is_empty(&self) -> bool {
        self.messages().is_empty()
    }
}

impl DiagnosticSink for MemoryDiagnostics {
    fn report(&self, message: &str) {
        let mut guard = match self.messages.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push(message.to_string());
    }
}
