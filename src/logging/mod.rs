// Logging capability for the Runar system
//
// This module provides:
// - The `Logger` trait that every backend implements
// - Category markers carried through log calls
// - The lazy, level-guarded entry points (`LazyLog`)
// - A delegating wrapper handed out by factories and deferred handles

use std::error::Error;
use std::fmt;
use std::sync::Arc;

pub mod lazy;
pub mod marker;

pub use lazy::LazyLog;
pub use log::Level;
pub use marker::Marker;

/// A named logger that can report whether a level is enabled and emit messages.
///
/// Backends implement the two required operations; the per-level predicates
/// are provided in terms of [`Logger::is_enabled`] but may be overridden.
pub trait Logger: Send + Sync {
    /// Name of this logger, usually the owning component or type
    fn name(&self) -> &str;

    /// Whether a message at `level` (optionally tagged with `marker`) would be emitted
    fn is_enabled(&self, level: Level, marker: Option<&Marker>) -> bool;

    /// Emit a message at `level` with an optional marker and attached error
    fn log(
        &self,
        level: Level,
        marker: Option<&Marker>,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    );

    fn is_trace_enabled(&self) -> bool {
        self.is_enabled(Level::Trace, None)
    }

    fn is_trace_enabled_with_marker(&self, marker: &Marker) -> bool {
        self.is_enabled(Level::Trace, Some(marker))
    }

    fn is_debug_enabled(&self) -> bool {
        self.is_enabled(Level::Debug, None)
    }

    fn is_debug_enabled_with_marker(&self, marker: &Marker) -> bool {
        self.is_enabled(Level::Debug, Some(marker))
    }

    fn is_info_enabled(&self) -> bool {
        self.is_enabled(Level::Info, None)
    }

    fn is_info_enabled_with_marker(&self, marker: &Marker) -> bool {
        self.is_enabled(Level::Info, Some(marker))
    }

    fn is_warn_enabled(&self) -> bool {
        self.is_enabled(Level::Warn, None)
    }

    fn is_warn_enabled_with_marker(&self, marker: &Marker) -> bool {
        self.is_enabled(Level::Warn, Some(marker))
    }

    fn is_error_enabled(&self) -> bool {
        self.is_enabled(Level::Error, None)
    }

    fn is_error_enabled_with_marker(&self, marker: &Marker) -> bool {
        self.is_enabled(Level::Error, Some(marker))
    }
}

macro_rules! forward_level_predicates {
    () => {
        fn is_trace_enabled(&self) -> bool {
            (**self).is_trace_enabled()
        }

        fn is_trace_enabled_with_marker(&self, marker: &Marker) -> bool {
            (**self).is_trace_enabled_with_marker(marker)
        }

        fn is_debug_enabled(&self) -> bool {
            (**self).is_debug_enabled()
        }

        fn is_debug_enabled_with_marker(&self, marker: &Marker) -> bool {
            (**self).is_debug_enabled_with_marker(marker)
        }

        fn is_info_enabled(&self) -> bool {
            (**self).is_info_enabled()
        }

        fn is_info_enabled_with_marker(&self, marker: &Marker) -> bool {
            (**self).is_info_enabled_with_marker(marker)
        }

        fn is_warn_enabled(&self) -> bool {
            (**self).is_warn_enabled()
        }

        fn is_warn_enabled_with_marker(&self, marker: &Marker) -> bool {
            (**self).is_warn_enabled_with_marker(marker)
        }

        fn is_error_enabled(&self) -> bool {
            (**self).is_error_enabled()
        }

        fn is_error_enabled_with_marker(&self, marker: &Marker) -> bool {
            (**self).is_error_enabled_with_marker(marker)
        }
    };
}

macro_rules! forward_logger {
    ($($ty:ty),*) => {
        $(
            impl<L: Logger + ?Sized> Logger for $ty {
                fn name(&self) -> &str {
                    (**self).name()
                }

                fn is_enabled(&self, level: Level, marker: Option<&Marker>) -> bool {
                    (**self).is_enabled(level, marker)
                }

                fn log(
                    &self,
                    level: Level,
                    marker: Option<&Marker>,
                    message: &str,
                    error: Option<&(dyn Error + 'static)>,
                ) {
                    (**self).log(level, marker, message, error)
                }

                forward_level_predicates!();
            }
        )*
    };
}

forward_logger!(&L, Box<L>, Arc<L>);

/// A logger that forwards every call to a wrapped delegate.
///
/// This is the type handed out by [`crate::get_logger`] and
/// [`crate::DeferredLogger`], so callers depend on a concrete type rather than
/// on whichever backend the factory produced.
#[derive(Clone)]
pub struct DelegatingLogger {
    delegate: Arc<dyn Logger>,
}

impl DelegatingLogger {
    /// Wrap a resolved logger
    pub fn new(delegate: Arc<dyn Logger>) -> Self {
        Self { delegate }
    }

    /// The wrapped logger
    pub fn delegate(&self) -> &Arc<dyn Logger> {
        &self.delegate
    }
}

impl Logger for DelegatingLogger {
    fn name(&self) -> &str {
        self.delegate.name()
    }

    fn is_enabled(&self, level: Level, marker: Option<&Marker>) -> bool {
        self.delegate.is_enabled(level, marker)
    }

    fn log(
        &self,
        level: Level,
        marker: Option<&Marker>,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        self.delegate.log(level, marker, message, error)
    }

    fn is_trace_enabled(&self) -> bool {
        self.delegate.is_trace_enabled()
    }

    fn is_trace_enabled_with_marker(&self, marker: &Marker) -> bool {
        self.delegate.is_trace_enabled_with_marker(marker)
    }

    fn is_debug_enabled(&self) -> bool {
        self.delegate.is_debug_enabled()
    }

    fn is_debug_enabled_with_marker(&self, marker: &Marker) -> bool {
        self.delegate.is_debug_enabled_with_marker(marker)
    }

    fn is_info_enabled(&self) -> bool {
        self.delegate.is_info_enabled()
    }

    fn is_info_enabled_with_marker(&self, marker: &Marker) -> bool {
        self.delegate.is_info_enabled_with_marker(marker)
    }

    fn is_warn_enabled(&self) -> bool {
        self.delegate.is_warn_enabled()
    }

    fn is_warn_enabled_with_marker(&self, marker: &Marker) -> bool {
        self.delegate.is_warn_enabled_with_marker(marker)
    }

    fn is_error_enabled(&self) -> bool {
        self.delegate.is_error_enabled()
    }

    fn is_error_enabled_with_marker(&self, marker: &Marker) -> bool {
        self.delegate.is_error_enabled_with_marker(marker)
    }
}

impl fmt::Debug for DelegatingLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatingLogger")
            .field("name", &self.name())
            .finish()
    }
}
