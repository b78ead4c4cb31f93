//! Tracing configuration for roster-dioxus.
//!
//! The webview emits a steady stream of pointer and selection events that
//! drown out the drop-flow log lines, so the subscriber carries a per-layer
//! filter that drops events whose message matches a configured noise
//! pattern before they are ever formatted.
//!
//! Must be initialized BEFORE Dioxus launch to prevent dioxus-logger from
//! setting its own subscriber.

use std::fmt::Write as _;
use std::fs::File;
use std::io;
use std::sync::Mutex;

use tracing::field::{Field, Visit};
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::{Context, Filter, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Per-layer filter that drops events whose message contains one of the
/// configured noise patterns.
struct NoiseFilter {
    patterns: Vec<String>,
}

impl NoiseFilter {
    fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    fn is_noise(&self, event: &Event<'_>) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        // Only the `message` field is inspected; structured fields stay out
        // of the match.
        struct MessageVisitor(String);

        impl Visit for MessageVisitor {
            fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
                if field.name() == "message" {
                    let _ = write!(self.0, "{value:?}");
                }
            }
        }

        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.patterns.iter().any(|p| visitor.0.contains(p.as_str()))
    }
}

impl<S: Subscriber> Filter<S> for NoiseFilter {
    fn enabled(&self, _meta: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        true
    }

    fn event_enabled(&self, event: &Event<'_>, _cx: &Context<'_, S>) -> bool {
        !self.is_noise(event)
    }
}

/// Initialize the tracing subscriber with configuration from [`LoggingConfig`].
///
/// Events are filtered by level (`RUST_LOG` overrides the configured
/// default) and by the noise patterns, then written to the configured log
/// file, or to stderr when no file is configured or it cannot be created.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let log_file = config
        .log_file
        .as_ref()
        .and_then(|path| File::create(path).ok());

    // ANSI colors only make sense on the stderr fallback
    let ansi = log_file.is_none();
    let writer = match log_file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::stderr),
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer)
        .with_filter(NoiseFilter::new(config.suppressed_patterns.clone()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// MakeWriter that appends to a shared buffer for assertions.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().expect("buffer lock").clone())
                .expect("log output should be utf-8")
        }
    }

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> fmt::MakeWriter<'a> for SharedBuf {
        type Writer = SharedBuf;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn noise_patterns_suppress_matching_events() {
        let buf = SharedBuf::default();
        let layer = fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(buf.clone())
            .with_filter(NoiseFilter::new(vec!["mousemove".to_string()]));
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("mousemove at 3,4");
            tracing::info!("Dropping CSE101-student42 (banned: false)");
        });

        let out = buf.contents();
        assert!(!out.contains("mousemove"));
        assert!(out.contains("Dropping CSE101-student42"));
    }

    #[test]
    fn empty_pattern_list_suppresses_nothing() {
        let buf = SharedBuf::default();
        let layer = fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(buf.clone())
            .with_filter(NoiseFilter::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("mousemove at 3,4");
        });

        assert!(buf.contents().contains("mousemove"));
    }
}
