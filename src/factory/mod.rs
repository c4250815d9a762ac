//! Logger resolution
//!
//! A [`LoggerFactory`] turns a name into a concrete [`Logger`]. One factory can
//! be installed for the whole process with [`set_logger_factory`]; until then
//! loggers are resolved through the `log` crate backend.

use std::sync::{Arc, OnceLock};

use lazy_static::lazy_static;

use crate::backends::LogFactory;
use crate::errors::{LoggingError, Result};
use crate::logging::{DelegatingLogger, Logger};

/// Resolves loggers by name
pub trait LoggerFactory: Send + Sync {
    /// Return the logger for `name`
    fn get_logger(&self, name: &str) -> Arc<dyn Logger>;
}

impl<F> LoggerFactory for F
where
    F: Fn(&str) -> Arc<dyn Logger> + Send + Sync,
{
    fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        self(name)
    }
}

static FACTORY: OnceLock<Arc<dyn LoggerFactory>> = OnceLock::new();

lazy_static! {
    static ref DEFAULT_FACTORY: Arc<dyn LoggerFactory> = Arc::new(LogFactory);
}

/// Install the process-wide logger factory.
///
/// Only the first call succeeds. Deferred handles that were already resolved
/// keep the logger they resolved.
pub fn set_logger_factory(factory: Arc<dyn LoggerFactory>) -> Result<()> {
    FACTORY
        .set(factory)
        .map_err(|_| LoggingError::FactoryAlreadySet)
}

/// The installed factory, or the `log` backend factory if none was installed
pub fn logger_factory() -> Arc<dyn LoggerFactory> {
    match FACTORY.get() {
        Some(factory) => factory.clone(),
        None => DEFAULT_FACTORY.clone(),
    }
}

/// Resolve a logger by name right away
pub fn get_logger(name: &str) -> DelegatingLogger {
    DelegatingLogger::new(logger_factory().get_logger(name))
}

/// Resolve a logger named after `T` right away
pub fn get_logger_for<T: ?Sized>() -> DelegatingLogger {
    get_logger(simple_type_name::<T>())
}

/// The unqualified name of `T`, without generic arguments.
///
/// `runar_node::network::Peer<u8>` becomes `Peer`. Meant for named types:
/// references, pointers, tuples and slices keep their full `type_name`.
pub fn simple_type_name<T: ?Sized>() -> &'static str {
    simplify_type_name(std::any::type_name::<T>())
}

pub(crate) fn simplify_type_name(full: &'static str) -> &'static str {
    if full.starts_with(&['(', '[', '&', '*'][..]) {
        return full;
    }
    let base = match full.find('<') {
        Some(idx) => &full[..idx],
        None => full,
    };
    match base.rfind("::") {
        Some(idx) => &base[idx + 2..],
        None => base,
    }
}
