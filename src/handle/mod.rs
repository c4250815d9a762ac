// runar_lazy_log/src/handle/mod.rs
//
// Loggers that are resolved on first use

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, OnceLock};

use crate::factory::{logger_factory, simplify_type_name, LoggerFactory};
use crate::logging::DelegatingLogger;

/// Where a deferred logger takes its name from
#[derive(Clone)]
enum NameSource {
    Name(Cow<'static, str>),
    Type(fn() -> &'static str),
}

impl NameSource {
    fn resolve(&self) -> Cow<'static, str> {
        match self {
            NameSource::Name(name) => name.clone(),
            NameSource::Type(type_name) => Cow::Borrowed(simplify_type_name(type_name())),
        }
    }
}

/// A logger handle that resolves its logger on first access and caches it.
///
/// Resolution happens at most once per handle, even when several threads
/// race on the first access; every caller observes the same logger. The
/// constructors are `const`, so a handle can live in a `static`:
///
/// ```
/// use runar_lazy_log::{DeferredLogger, LazyLog};
///
/// static LOG: DeferredLogger = DeferredLogger::new("runar.network");
///
/// LOG.info(|| "listener started");
/// ```
pub struct DeferredLogger {
    source: NameSource,
    factory: Option<Arc<dyn LoggerFactory>>,
    cell: OnceLock<DelegatingLogger>,
}

impl DeferredLogger {
    /// Handle for a logger with a static name, resolved through the process-wide factory
    pub const fn new(name: &'static str) -> Self {
        Self {
            source: NameSource::Name(Cow::Borrowed(name)),
            factory: None,
            cell: OnceLock::new(),
        }
    }

    /// Handle for a logger named after `T`, resolved through the process-wide factory
    pub const fn for_type<T: ?Sized>() -> Self {
        Self {
            source: NameSource::Type(std::any::type_name::<T>),
            factory: None,
            cell: OnceLock::new(),
        }
    }

    /// Handle for a logger with the given name, resolved through `factory`
    pub fn with_factory(name: impl Into<String>, factory: Arc<dyn LoggerFactory>) -> Self {
        Self {
            source: NameSource::Name(Cow::Owned(name.into())),
            factory: Some(factory),
            cell: OnceLock::new(),
        }
    }

    /// Handle for a logger named after `T`, resolved through `factory`
    pub fn for_type_with_factory<T: ?Sized>(factory: Arc<dyn LoggerFactory>) -> Self {
        Self {
            source: NameSource::Type(std::any::type_name::<T>),
            factory: Some(factory),
            cell: OnceLock::new(),
        }
    }

    /// The logger, resolving it if this is the first access
    pub fn get(&self) -> &DelegatingLogger {
        self.cell.get_or_init(|| {
            let name = self.source.resolve();
            let delegate = match &self.factory {
                Some(factory) => factory.get_logger(&name),
                None => logger_factory().get_logger(&name),
            };
            DelegatingLogger::new(delegate)
        })
    }

    /// Whether the logger has been resolved yet
    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Deref for DeferredLogger {
    type Target = DelegatingLogger;

    fn deref(&self) -> &DelegatingLogger {
        self.get()
    }
}

impl fmt::Debug for DeferredLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredLogger")
            .field("name", &self.source.resolve())
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

/// A deferred handle for a logger with the given name
pub fn lazy_logger(name: impl Into<String>) -> DeferredLogger {
    DeferredLogger {
        source: NameSource::Name(Cow::Owned(name.into())),
        factory: None,
        cell: OnceLock::new(),
    }
}

/// A deferred handle for a logger named after `T`
pub fn lazy_logger_for<T: ?Sized>() -> DeferredLogger {
    DeferredLogger::for_type::<T>()
}
