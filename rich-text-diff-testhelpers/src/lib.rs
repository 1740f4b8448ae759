#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

use std::sync::{Arc, LazyLock, Mutex, PoisonError};
use std::time::Instant;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

struct Uptime;

impl FormatTime for Uptime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let elapsed = START_TIME.elapsed();
        write!(w, "{:4}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

static SUBSCRIBER_INIT: LazyLock<()> = LazyLock::new(|| {
    let _ = *START_TIME;

    color_backtrace::BacktracePrinter::new()
        .verbosity(color_backtrace::Verbosity::Full)
        .add_frame_filter(Box::new(|frames| {
            frames.retain(|frame| match &frame.name {
                Some(name) => {
                    !(name.starts_with("test::")
                        || name.starts_with("std::panicking::")
                        || name.starts_with("core::panicking::")
                        || name.starts_with("core::ops::function::FnOnce::call_once"))
                }
                None => true,
            })
        }))
        .install(Box::new(termcolor::StandardStream::stderr(
            termcolor::ColorChoice::Auto,
        )));

    let filter = std::env::var("RICH_TEXT_DIFF_LOG")
        .ok()
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(Level::TRACE));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(Uptime)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_test_writer()
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
});

/// Install the test tracing subscriber, once per process.
///
/// Call it at the top of a test. Output goes through the test harness'
/// capture, so it only shows for failing tests (or with `--nocapture`).
pub fn setup() {
    #[allow(clippy::let_unit_value)]
    let _ = *SUBSCRIBER_INIT;
}

/// A warn-level (or more severe) event recorded by [`capture_warnings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    /// Severity of the event.
    pub level: Level,
    /// The event's message.
    pub message: String,
    /// Every other field, formatted, in recording order.
    pub fields: Vec<(&'static str, String)>,
}

impl CapturedEvent {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push((field.name(), format!("{value:?}")));
        }
    }
}

/// Records warn-level and more severe events.
struct WarningLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for WarningLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        if level > Level::WARN {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CapturedEvent {
                level,
                message: visitor.message,
                fields: visitor.fields,
            });
    }
}

/// Run `f` with a scoped subscriber and return its result together with the
/// warn-level (and more severe) events it emitted on this thread.
pub fn capture_warnings<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedEvent>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(WarningLayer {
        events: Arc::clone(&events),
    });

    let result = tracing::subscriber::with_default(subscriber, f);

    let captured = std::mem::take(&mut *events.lock().unwrap_or_else(PoisonError::into_inner));
    (result, captured)
}
