#![cfg(feature = "trace")]

use parsalg::prelude::*;
use parsalg::text::{TextError, digit, is_char, unsigned};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

#[derive(Debug, Clone, PartialEq)]
struct Recorded {
    target: String,
    items: Option<u64>,
}

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Recorded>>>,
}

struct ItemsField(Option<u64>);

impl Visit for ItemsField {
    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "items" {
            self.0 = Some(value);
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut items = ItemsField(None);
        event.record(&mut items);
        self.events.lock().unwrap().push(Recorded {
            target: event.metadata().target().to_string(),
            items: items.0,
        });
    }
}

fn record<T>(run: impl FnOnce() -> T) -> (T, Vec<Recorded>) {
    let recorder = Recorder::default();
    let subscriber = Registry::default().with(recorder.clone());
    let result = tracing::subscriber::with_default(subscriber, run);
    let events = recorder.events.lock().unwrap().clone();
    (result, events)
}

fn targets(events: &[Recorded]) -> Vec<&str> {
    events.iter().map(|event| event.target.as_str()).collect()
}

#[test]
fn or_reports_fallback_to_second_alternative() {
    let parser = is_char('a').or(is_char('b'));

    let (result, events) = record(|| parser.parse("b"));
    assert!(result.is_ok());
    assert_eq!(targets(&events), vec!["parsalg::or"]);

    let (_, events) = record(|| parser.parse("a"));
    assert!(events.is_empty());
}

#[test]
fn flat_map_reports_rejection() {
    let parser = unsigned().flat_map(|n| {
        if n < 10 {
            Ok(n)
        } else {
            Err(TextError::invalid("too large"))
        }
    });

    let (result, events) = record(|| parser.parse("42"));
    assert_eq!(result, Err(TextError::invalid("too large")));
    assert_eq!(targets(&events), vec!["parsalg::flat_map"]);

    let (_, events) = record(|| parser.parse("7"));
    assert!(events.is_empty());
}

#[test]
fn many_reports_item_count() {
    let parser = digit().many();

    let (result, events) = record(|| parser.parse("123abc"));
    let (values, rest) = result.unwrap();
    assert_eq!(values, vec![1, 2, 3]);
    assert_eq!(rest, "abc");

    assert_eq!(
        events,
        vec![Recorded {
            target: "parsalg::many".to_string(),
            items: Some(values.len() as u64),
        }]
    );
}
