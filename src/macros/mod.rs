// runar_lazy_log/src/macros/mod.rs
//
// Format-style wrappers around the `LazyLog` entry points

/// Log with `format!` arguments that are only evaluated when the level is enabled.
///
/// The first argument is anything that derefs to a [`Logger`](crate::Logger)
/// (a logger, a reference, an `Arc`, a [`DeferredLogger`](crate::DeferredLogger)).
/// An optional `marker:` and/or `error:` may precede the format string.
///
/// # Examples
///
/// ```
/// use runar_lazy_log::{lazy_log, lazy_logger, Level, Marker};
///
/// let logger = lazy_logger("runar.service");
/// let marker = Marker::new("AUDIT");
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
///
/// lazy_log!(logger, Level::Info, "started {} workers", 4);
/// lazy_log!(logger, Level::Warn, marker: &marker, "user {} logged in", "ada");
/// lazy_log!(logger, Level::Error, error: &err, "flush failed");
/// lazy_log!(logger, Level::Error, marker: &marker, error: &err, "audit flush failed");
/// ```
#[macro_export]
macro_rules! lazy_log {
    ($logger:expr, $level:expr, marker: $marker:expr, error: $error:expr, $($arg:tt)+) => {{
        use $crate::LazyLog as _;
        ($logger).log_lazy_with_marker_error($level, $marker, $error, |_| ::std::format!($($arg)+))
    }};
    ($logger:expr, $level:expr, marker: $marker:expr, $($arg:tt)+) => {{
        use $crate::LazyLog as _;
        ($logger).log_lazy_with_marker($level, $marker, |_| ::std::format!($($arg)+))
    }};
    ($logger:expr, $level:expr, error: $error:expr, $($arg:tt)+) => {{
        use $crate::LazyLog as _;
        ($logger).log_lazy_with_error($level, $error, || ::std::format!($($arg)+))
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::LazyLog as _;
        ($logger).log_lazy($level, || ::std::format!($($arg)+))
    }};
}

/// [`lazy_log!`] at the TRACE level
#[macro_export]
macro_rules! lazy_trace {
    ($logger:expr, $($rest:tt)+) => {
        $crate::lazy_log!($logger, $crate::Level::Trace, $($rest)+)
    };
}

/// [`lazy_log!`] at the DEBUG level
#[macro_export]
macro_rules! lazy_debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::lazy_log!($logger, $crate::Level::Debug, $($rest)+)
    };
}

/// [`lazy_log!`] at the INFO level
#[macro_export]
macro_rules! lazy_info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::lazy_log!($logger, $crate::Level::Info, $($rest)+)
    };
}

/// [`lazy_log!`] at the WARN level
#[macro_export]
macro_rules! lazy_warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::lazy_log!($logger, $crate::Level::Warn, $($rest)+)
    };
}

/// [`lazy_log!`] at the ERROR level
#[macro_export]
macro_rules! lazy_error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::lazy_log!($logger, $crate::Level::Error, $($rest)+)
    };
}
