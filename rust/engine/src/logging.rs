//! Subscriber setup for the engine's `tracing` events.
//!
//! The engine only emits events; a host application calls [`init_logging`]
//! once, and tests call [`init_test_logging`] to see what a move emitted.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

/// One recorded engine event.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Events recorded by a [`CaptureLayer`], shared with the test holding it.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CapturedLogs {
    /// Entries whose message equals `message`, oldest first.
    pub fn with_message(&self, message: &str) -> Vec<LogEntry> {
        self.lock()
            .iter()
            .filter(|e| e.message == message)
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn layer(&self) -> CaptureLayer {
        CaptureLayer { logs: self.clone() }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Layer appending every event to its [`CapturedLogs`].
pub struct CaptureLayer {
    logs: CapturedLogs,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut entry = LogEntry {
            level: *event.metadata().level(),
            message: String::new(),
            fields: Vec::new(),
        };
        event.record(&mut entry);
        self.logs.lock().push(entry);
    }
}

impl Visit for LogEntry {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let value = format!("{:?}", value);
        match field.name() {
            "message" => self.message = value,
            name => self.fields.push((name.to_string(), value)),
        }
    }
}

/// Installs a global fmt subscriber filtered by `RUST_LOG`.
///
/// Returns an error if a global subscriber is already set.
pub fn init_logging() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,elevens_engine=debug"));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}

/// Installs a capturing subscriber once per process and hands back its
/// buffer, emptied.
pub fn init_test_logging() -> CapturedLogs {
    static LOGS: OnceLock<CapturedLogs> = OnceLock::new();

    let logs = LOGS.get_or_init(|| {
        let logs = CapturedLogs::default();
        // if another global subscriber already won, nothing is captured
        let _ = tracing::subscriber::set_global_default(Registry::default().with(logs.layer()));
        logs
    });
    logs.clear();
    logs.clone()
}
