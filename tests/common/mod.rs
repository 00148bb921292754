//! Common test utilities for docweave integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// A captured `WARN` event.
#[derive(Debug, Clone, Default)]
pub struct Warning {
    pub message: String,
    pub document: Option<String>,
    pub kind: Option<String>,
}

/// Layer that records every `WARN` event.
#[derive(Clone, Default)]
pub struct WarningCapture {
    warnings: Arc<Mutex<Vec<Warning>>>,
}

impl WarningCapture {
    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.warnings.lock().unwrap().len()
    }
}

#[derive(Default)]
struct WarningVisitor(Warning);

impl Visit for WarningVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.0.message = value.to_string(),
            "document" => self.0.document = Some(value.to_string()),
            "kind" => self.0.kind = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "message" => self.0.message = format!("{value:?}"),
            "document" => self.0.document = Some(format!("{value:?}")),
            "kind" => self.0.kind = Some(format!("{value:?}")),
            _ => {}
        }
    }
}

impl<S: Subscriber> Layer<S> for WarningCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }
        let mut visitor = WarningVisitor::default();
        event.record(&mut visitor);
        self.warnings.lock().unwrap().push(visitor.0);
    }
}

/// Run `f` with a thread-local subscriber that captures warnings.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, WarningCapture) {
    let capture = WarningCapture::default();
    let subscriber = Registry::default().with(capture.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture)
}
