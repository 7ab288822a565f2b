//! Shared helpers: capture diagnostic events and panic outcomes.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe, Location};
use std::sync::{Arc, Mutex, Once};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// One captured tracing event.
#[derive(Debug, Clone)]
pub struct Record {
    pub target: String,
    pub level: Level,
    pub fields: BTreeMap<String, String>,
}

impl Record {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }
}

struct FieldVisitor<'a>(&'a mut BTreeMap<String, String>);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    records: Arc<Mutex<Vec<Record>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut FieldVisitor(&mut fields));

        let record = Record {
            target: event.metadata().target().to_string(),
            level: *event.metadata().level(),
            fields,
        };
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record);
    }
}

/// Result of running a closure under the capture subscriber.
pub struct Outcome {
    pub records: Vec<Record>,
    /// Panic message, if the closure panicked.
    pub panic: Option<String>,
    /// Location reported to the panic hook, if the closure panicked.
    pub panic_location: Option<(String, u32)>,
}

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static LAST_PANIC_LOCATION: RefCell<Option<(String, u32)>> = const { RefCell::new(None) };
}

/// Wraps the panic hook: panics raised inside [`capture`] record their
/// location per thread and stay silent, all others reach the previous hook.
pub fn quiet_panics() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !CAPTURING.with(Cell::get) {
                previous(info);
                return;
            }
            let location = info
                .location()
                .map(|location: &Location<'_>| (location.file().to_string(), location.line()));
            LAST_PANIC_LOCATION.with(|slot| *slot.borrow_mut() = location);
        }));
    });
}

/// Whether panics on this thread are currently captured.
pub fn is_capturing() -> bool {
    CAPTURING.with(Cell::get)
}

/// Runs `f` with a capturing subscriber as the thread default.
pub fn capture<F: FnOnce()>(f: F) -> Outcome {
    quiet_panics();
    LAST_PANIC_LOCATION.with(|slot| slot.borrow_mut().take());

    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let previous = CAPTURING.with(|flag| flag.replace(true));
    let result = tracing::subscriber::with_default(subscriber, || {
        panic::catch_unwind(AssertUnwindSafe(f))
    });
    CAPTURING.with(|flag| flag.set(previous));

    let panic = result.err().map(|payload| match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(message) => message.to_string(),
            Err(_) => String::from("<non-string payload>"),
        },
    });
    let records = std::mem::take(
        &mut *layer
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()),
    );

    Outcome {
        records,
        panic,
        panic_location: LAST_PANIC_LOCATION.with(|slot| slot.borrow_mut().take()),
    }
}
