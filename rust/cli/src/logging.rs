//! Tracing setup for the binary, plus an in-memory capture layer for tests.
//!
//! The engine and AI crates only emit `tracing` events; nothing is printed
//! until a subscriber is installed. `SHOWDOWN_LOG` takes an `EnvFilter`
//! directive such as `debug` or `showdown_engine=debug`; the default is `warn`.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::Level;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

pub const ENV_LOG: &str = "SHOWDOWN_LOG";

/// Structured log entry for testing and analysis
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

/// Subscriber that captures log entries for verification
#[derive(Debug, Clone, Default)]
pub struct TestLogSubscriber {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    pub fn entries_at(&self, level: Level) -> Vec<LogEntry> {
        self.lock().iter().filter(|e| e.level == level).cloned().collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn into_layer<S>(self) -> TestLayer<S>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        TestLayer {
            subscriber: self,
            _phantom: PhantomData,
        }
    }
}

pub struct TestLayer<S> {
    subscriber: TestLogSubscriber,
    _phantom: PhantomData<S>,
}

impl<S> Layer<S> for TestLayer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = EventFields::default();
        event.record(&mut fields);

        self.subscriber.lock().push(LogEntry {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            message: fields.message.unwrap_or_default(),
            fields: fields.rest,
        });
    }
}

// `message` is split out; every other field is kept as (name, rendered value)
#[derive(Default)]
struct EventFields {
    message: Option<String>,
    rest: Vec<(String, String)>,
}

impl EventFields {
    fn push(&mut self, name: &str, value: String) {
        match name {
            "message" => self.message = Some(value),
            _ => self.rest.push((name.to_string(), value)),
        }
    }
}

impl tracing::field::Visit for EventFields {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.push(field.name(), value.to_string());
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.push(field.name(), format!("{:?}", value));
    }
}

/// Installs the global fmt subscriber, writing to stderr.
pub fn init_logging() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, info, warn};
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn captures_levels_and_fields() {
        let subscriber = TestLogSubscriber::new();
        let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());

        tracing::subscriber::with_default(registry, || {
            debug!("partitioned");
            warn!(amount = 40, "pot left unclaimed");
        });

        let entries = subscriber.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, Level::DEBUG);

        let warned = subscriber.entries_at(Level::WARN);
        assert_eq!(warned.len(), 1);
        assert!(warned[0].message.contains("pot left unclaimed"));
        assert!(warned[0].fields.iter().any(|(k, v)| k == "amount" && v == "40"));
    }

    #[test]
    fn clear_empties_the_buffer() {
        let subscriber = TestLogSubscriber::new();
        let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());
        tracing::subscriber::with_default(registry, || info!("one"));
        assert_eq!(subscriber.entries().len(), 1);
        subscriber.clear();
        assert!(subscriber.entries().is_empty());
    }
}
