// runar_lazy_log/src/backends/tracing_backend.rs
//
// `Logger` backed by `tracing` events

use std::error::Error;
use std::sync::Arc;

use crate::factory::LoggerFactory;
use crate::logging::{Level, Logger, Marker};

use super::render_error_chain;

// tracing callsites need a constant level, so each level gets its own arm
macro_rules! emit_event {
    ($level:expr, $name:ident, $marker:ident, $error:ident, $message:ident) => {
        match $level {
            Level::Error => tracing::event!(
                tracing::Level::ERROR,
                logger = $name,
                marker = $marker,
                error = $error,
                "{}",
                $message
            ),
            Level::Warn => tracing::event!(
                tracing::Level::WARN,
                logger = $name,
                marker = $marker,
                error = $error,
                "{}",
                $message
            ),
            Level::Info => tracing::event!(
                tracing::Level::INFO,
                logger = $name,
                marker = $marker,
                error = $error,
                "{}",
                $message
            ),
            Level::Debug => tracing::event!(
                tracing::Level::DEBUG,
                logger = $name,
                marker = $marker,
                error = $error,
                "{}",
                $message
            ),
            Level::Trace => tracing::event!(
                tracing::Level::TRACE,
                logger = $name,
                marker = $marker,
                error = $error,
                "{}",
                $message
            ),
        }
    };
}

/// A logger that records `tracing` events carrying `logger`, `marker` and `error` fields.
///
/// `tracing` fixes an event's target at compile time, so every event uses this
/// module's path as its target. Subscriber filters cannot select by logger
/// name through the target; filter on the `logger` field instead.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Logger for TracingLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: Level, _marker: Option<&Marker>) -> bool {
        match level {
            Level::Error => tracing::enabled!(tracing::Level::ERROR),
            Level::Warn => tracing::enabled!(tracing::Level::WARN),
            Level::Info => tracing::enabled!(tracing::Level::INFO),
            Level::Debug => tracing::enabled!(tracing::Level::DEBUG),
            Level::Trace => tracing::enabled!(tracing::Level::TRACE),
        }
    }

    fn log(
        &self,
        level: Level,
        marker: Option<&Marker>,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        let name = self.name.as_str();
        let marker = marker.map(Marker::name);
        let rendered = error.map(render_error_chain);
        let error = rendered.as_deref();
        emit_event!(level, name, marker, error, message);
    }
}

/// Factory producing [`TracingLogger`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFactory;

impl LoggerFactory for TracingFactory {
    fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(TracingLogger::new(name))
    }
}
