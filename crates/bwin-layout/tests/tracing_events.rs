#![forbid(unsafe_code)]

//! Structured tracing emitted by sash tree mutations.
//!
//! Run:
//!   cargo test -p bwin-layout --test tracing_events

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bwin_layout::{DropIntent, DropOutcome, LayoutConfig, Position, Rect, SashTree, SplitSize, Store};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    message: String,
    fields: HashMap<String, String>,
    parent_span_name: Option<String>,
}

/// A tracing Layer that records spans and events for later inspection.
struct Capture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

#[derive(Clone)]
struct CaptureHandle {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureHandle {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    fn event(&self, message: &str) -> CapturedEvent {
        self.events()
            .into_iter()
            .find(|event| event.message == message)
            .unwrap_or_else(|| panic!("no event {message:?} in {:?}", self.events()))
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let fields: HashMap<String, String> = visitor.0.into_iter().collect();
        let message = fields.get("message").cloned().unwrap_or_default();
        let parent_span_name = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span_ref| span_ref.name().to_string());

        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message,
            fields,
            parent_span_name,
        });
    }
}

fn with_captured<F>(f: F) -> CaptureHandle
where
    F: FnOnce(),
{
    let handle = CaptureHandle {
        spans: Arc::new(Mutex::new(Vec::new())),
        events: Arc::new(Mutex::new(Vec::new())),
    };
    let layer = Capture {
        spans: handle.spans.clone(),
        events: handle.events.clone(),
    };
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::TRACE)
        .with(layer);
    tracing::subscriber::with_default(subscriber, f);
    handle
}

fn fresh_tree() -> SashTree {
    SashTree::with_root(
        LayoutConfig::default(),
        "root",
        Rect::from_size(800.0, 600.0),
        Store::new(),
    )
    .expect("valid root")
}

#[test]
fn split_emits_span_and_commit_event() {
    let handle = with_captured(|| {
        let mut tree = fresh_tree();
        let _ = tree
            .split("root", Position::Right, SplitSize::Ratio(0.25))
            .expect("split");
    });

    let span = handle
        .spans()
        .into_iter()
        .find(|span| span.name == "sash.split")
        .expect("sash.split span");
    assert_eq!(span.fields.get("sash").map(String::as_str), Some("root"));
    assert_eq!(span.fields.get("position").map(String::as_str), Some("right"));

    let event = handle.event("split committed");
    assert_eq!(event.level, tracing::Level::DEBUG);
    assert_eq!(event.parent_span_name.as_deref(), Some("sash.split"));
    assert_eq!(event.fields.get("container").map(String::as_str), Some("root"));
    assert_eq!(event.fields.get("width").map(String::as_str), Some("200"));
}

#[test]
fn failed_split_emits_no_commit() {
    let handle = with_captured(|| {
        let mut tree = fresh_tree();
        assert!(tree.split("missing", Position::Left, SplitSize::default()).is_err());
    });
    assert!(handle.events().iter().all(|event| event.message != "split committed"));
}

#[test]
fn clamped_resize_emits_trace() {
    let handle = with_captured(|| {
        let mut tree = fresh_tree();
        let _ = tree
            .split("root", Position::Right, SplitSize::default())
            .expect("split");
        let _ = tree.set_width("root", 10.0).expect("resize");
    });

    let event = handle.event("resize clamped to subtree minimum");
    assert_eq!(event.level, tracing::Level::TRACE);
    assert_eq!(event.fields.get("min").map(String::as_str), Some("200"));
}

#[test]
fn remove_and_drop_are_spanned() {
    let handle = with_captured(|| {
        let mut tree = fresh_tree();
        let first = tree
            .split("root", Position::Right, SplitSize::default())
            .expect("split");
        let second = tree
            .split(&first.created, Position::Bottom, SplitSize::default())
            .expect("split");
        let intent = DropIntent::Split {
            target: first.existing.clone(),
            position: Position::Top,
        };
        let DropOutcome::Moved { created, .. } =
            tree.apply_drop(&second.created, &intent).expect("drop")
        else {
            panic!("edge drop should move the pane");
        };
        let _ = tree.remove(&created).expect("remove");
    });

    let names: Vec<String> = handle.spans().into_iter().map(|span| span.name).collect();
    assert!(names.iter().any(|name| name == "sash.drop"), "{names:?}");
    assert!(names.iter().any(|name| name == "sash.remove"), "{names:?}");

    let moved = handle.event("drop moved pane");
    assert_eq!(moved.parent_span_name.as_deref(), Some("sash.drop"));
    let removed = handle
        .events()
        .into_iter()
        .filter(|event| event.message == "leaf removed")
        .collect::<Vec<_>>();
    assert_eq!(removed.len(), 2);
    assert_eq!(removed[1].parent_span_name.as_deref(), Some("sash.remove"));
}
