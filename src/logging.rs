// SPDX-License-Identifier: MPL-2.0
//! Structured logging.
//!
//! Events emitted with the `tracing` macros are formatted by [`ConsoleLayer`]
//! as `LEVEL target: message key=value ...` and written to a [`LogSink`]:
//! the browser console on wasm32, stderr on native hosts, or an in-memory
//! buffer that tests can inspect.
//!
//! ```
//! use savory_bites::logging::{ConsoleLayer, LogSink};
//! use tracing_subscriber::prelude::*;
//!
//! let (sink, logs) = LogSink::capture();
//! let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(sink));
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!(items = 3, "gallery ready");
//! });
//! assert!(logs.lines()[0].ends_with("gallery ready items=3"));
//! ```

use std::fmt::{self, Write as FmtWrite};
use std::sync::{Arc, Mutex, Once};
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Layer;

// =============================================================================
// Sink
// =============================================================================

/// Lines written to a capturing sink.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<String>>>);

impl CapturedLogs {
    /// Snapshot of every line written so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self.0.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns `true` if any line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    fn push(&self, line: String) {
        let mut lines = match self.0.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push(line);
    }
}

/// Destination of formatted log lines.
#[derive(Debug, Clone)]
pub enum LogSink {
    /// `console.debug/info/warn/error` in the browser; stderr elsewhere.
    Console,
    /// Standard error.
    Stderr,
    /// In-memory buffer.
    Capture(CapturedLogs),
}

impl LogSink {
    /// Creates a capturing sink and a handle to read what it receives.
    #[must_use]
    pub fn capture() -> (Self, CapturedLogs) {
        let logs = CapturedLogs::default();
        (Self::Capture(logs.clone()), logs)
    }

    fn write(&self, level: Level, line: String) {
        match self {
            Self::Console => write_console(level, &line),
            Self::Stderr => eprintln!("{line}"),
            Self::Capture(logs) => logs.push(line),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        Level::DEBUG | Level::TRACE => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{line}");
}

// =============================================================================
// Event visitor
// =============================================================================

/// Extracts the message and structured fields from an event.
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let rendered = format!("{value:?}");
        if field.name() == "message" {
            self.message = Some(rendered);
        } else {
            self.fields.push((field.name(), rendered));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }
}

// =============================================================================
// ConsoleLayer
// =============================================================================

/// A `tracing_subscriber::Layer` that writes one line per event to a [`LogSink`].
#[derive(Debug, Clone)]
pub struct ConsoleLayer {
    sink: LogSink,
    show_target: bool,
}

impl ConsoleLayer {
    #[must_use]
    pub fn new(sink: LogSink) -> Self {
        Self {
            sink,
            show_target: true,
        }
    }

    /// Builder: set whether to show the target module.
    #[must_use]
    pub fn show_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    fn format_event(&self, event: &Event<'_>) -> String {
        let metadata = event.metadata();
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let mut line = format!("{:<5}", metadata.level().as_str());
        if self.show_target {
            let _ = write!(line, " {}:", metadata.target());
        }
        if let Some(message) = visitor.message {
            let _ = write!(line, " {message}");
        }
        for (key, value) in &visitor.fields {
            let _ = write!(line, " {key}={value}");
        }
        line
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        self.sink.write(level, self.format_event(event));
    }
}

// =============================================================================
// Global setup
// =============================================================================

/// Installs the global subscriber.
///
/// Returns `false` if a global subscriber was already set, in which case the
/// existing one is kept.
pub fn init(max_level: LevelFilter, sink: LogSink) -> bool {
    tracing_subscriber::registry()
        .with(max_level)
        .with(ConsoleLayer::new(sink))
        .try_init()
        .is_ok()
}

/// Routes panics through `tracing` before the previous hook runs.
///
/// Idempotent: only the first call installs the hook.
pub fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "savory_bites::panic", "{info}");
            previous(info);
        }));
    });
}
