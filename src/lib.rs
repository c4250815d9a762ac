// runar_lazy_log/src/lib.rs
//
// Lazy, level-guarded logging helpers for the Runar P2P stack

// Export modules
pub mod backends;
pub mod errors;
pub mod factory;
pub mod handle;
pub mod logging;
pub mod macros;

// Re-export traits and types at the root level
pub use backends::{init, init_with_filter, LogFactory, LogLogger, TracingFactory, TracingLogger};
pub use errors::{LoggingError, Result};
pub use factory::{
    get_logger, get_logger_for, logger_factory, set_logger_factory, simple_type_name,
    LoggerFactory,
};
pub use handle::{lazy_logger, lazy_logger_for, DeferredLogger};
pub use logging::{DelegatingLogger, LazyLog, Level, Logger, Marker};

// The lazy_log!/lazy_trace!..lazy_error! macros are exported at the crate root
// through #[macro_export] in the macros module.
