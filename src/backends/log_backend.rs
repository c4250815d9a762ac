// runar_lazy_log/src/backends/log_backend.rs
//
// `Logger` backed by the `log` crate, plus env_logger initialisation

use std::error::Error;
use std::sync::Arc;

use crate::errors::Result;
use crate::factory::LoggerFactory;
use crate::logging::{Level, Logger, Marker};

use super::render_error_chain;

/// A logger that emits through the `log` facade, using its name as the target
#[derive(Debug, Clone)]
pub struct LogLogger {
    name: String,
}

impl LogLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Logger for LogLogger {
    fn name(&self) -> &str {
        &self.name
    }

    // `log` has no notion of markers, so enablement only depends on target and level
    fn is_enabled(&self, level: Level, _marker: Option<&Marker>) -> bool {
        log::log_enabled!(target: self.name.as_str(), level)
    }

    fn log(
        &self,
        level: Level,
        marker: Option<&Marker>,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        let target = self.name.as_str();
        match (marker, error) {
            (Some(marker), Some(error)) => log::log!(
                target: target,
                level,
                "[{}] {}: {}",
                marker,
                message,
                render_error_chain(error)
            ),
            (Some(marker), None) => log::log!(target: target, level, "[{}] {}", marker, message),
            (None, Some(error)) => log::log!(
                target: target,
                level,
                "{}: {}",
                message,
                render_error_chain(error)
            ),
            (None, None) => log::log!(target: target, level, "{}", message),
        }
    }
}

/// Factory producing [`LogLogger`]s; the default process-wide factory
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFactory;

impl LoggerFactory for LogFactory {
    fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(LogLogger::new(name))
    }
}

/// Install `env_logger` as the `log` backend.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn init() -> Result<()> {
    init_with_filter("info")
}

/// Install `env_logger` with `default_filter` used when `RUST_LOG` is unset
pub fn init_with_filter(default_filter: &str) -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init()?;
    Ok(())
}
