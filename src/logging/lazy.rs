// runar_lazy_log/src/logging/lazy.rs
//
// Level-guarded logging calls whose message is built by a closure

use std::error::Error;

use super::{Level, Logger, Marker};

/// Asks the per-level predicate matching `level`, so backends that override
/// e.g. [`Logger::is_trace_enabled`] are honoured.
fn level_enabled<L: Logger + ?Sized>(logger: &L, level: Level, marker: Option<&Marker>) -> bool {
    match (level, marker) {
        (Level::Trace, None) => logger.is_trace_enabled(),
        (Level::Trace, Some(m)) => logger.is_trace_enabled_with_marker(m),
        (Level::Debug, None) => logger.is_debug_enabled(),
        (Level::Debug, Some(m)) => logger.is_debug_enabled_with_marker(m),
        (Level::Info, None) => logger.is_info_enabled(),
        (Level::Info, Some(m)) => logger.is_info_enabled_with_marker(m),
        (Level::Warn, None) => logger.is_warn_enabled(),
        (Level::Warn, Some(m)) => logger.is_warn_enabled_with_marker(m),
        (Level::Error, None) => logger.is_error_enabled(),
        (Level::Error, Some(m)) => logger.is_error_enabled_with_marker(m),
    }
}

/// Generates the six call shapes for one level, delegating to the
/// runtime-level methods of [`LazyLog`].
macro_rules! level_methods {
    (
        $level:expr, $upper:literal,
        $plain:ident, $with_marker:ident, $with_error:ident,
        $with_marker_error:ident, $throwable:ident, $throwable_with_marker:ident
    ) => {
        #[doc = concat!("Log a message at the ", $upper, " level.")]
        ///
        /// `producer` is only called when the level is enabled.
        fn $plain<F, S>(&self, producer: F)
        where
            F: FnOnce() -> S,
            S: Into<String>,
        {
            self.log_lazy($level, producer)
        }

        #[doc = concat!("Log a message tagged with `marker` at the ", $upper, " level.")]
        ///
        /// `producer` receives the marker and is only called when the level is
        /// enabled for that marker.
        fn $with_marker<F, S>(&self, marker: &Marker, producer: F)
        where
            F: FnOnce(&Marker) -> S,
            S: Into<String>,
        {
            self.log_lazy_with_marker($level, marker, producer)
        }

        #[doc = concat!("Log `error` at the ", $upper, " level with a lazily built message.")]
        fn $with_error<F, S>(&self, error: &(dyn Error + 'static), producer: F)
        where
            F: FnOnce() -> S,
            S: Into<String>,
        {
            self.log_lazy_with_error($level, error, producer)
        }

        #[doc = concat!("Log `error` tagged with `marker` at the ", $upper, " level.")]
        fn $with_marker_error<F, S>(
            &self,
            marker: &Marker,
            error: &(dyn Error + 'static),
            producer: F,
        ) where
            F: FnOnce(&Marker) -> S,
            S: Into<String>,
        {
            self.log_lazy_with_marker_error($level, marker, error, producer)
        }

        #[doc = concat!("Log an error produced together with its message at the ", $upper, " level.")]
        fn $throwable<F, S, E>(&self, producer: F)
        where
            F: FnOnce() -> (S, E),
            S: Into<String>,
            E: Error + 'static,
        {
            self.log_lazy_throwable($level, producer)
        }

        #[doc = concat!("Log an error produced together with its message, tagged with `marker`, at the ", $upper, " level.")]
        fn $throwable_with_marker<F, S, E>(&self, marker: &Marker, producer: F)
        where
            F: FnOnce(&Marker) -> (S, E),
            S: Into<String>,
            E: Error + 'static,
        {
            self.log_lazy_throwable_with_marker($level, marker, producer)
        }
    };
}

/// Lazy logging entry points, available on every [`Logger`].
///
/// Every call checks the level first. When it is disabled the producer is
/// never invoked and nothing is emitted. When it is enabled the producer runs
/// exactly once and its message is emitted exactly once. Panics raised by the
/// producer or the logger propagate to the caller.
///
/// ```
/// use runar_lazy_log::{lazy_logger, LazyLog};
///
/// let logger = lazy_logger("runar.node");
/// let peers = vec!["a", "b"];
/// logger.debug(|| format!("connected peers: {:?}", peers));
/// ```
pub trait LazyLog: Logger {
    /// Log at a runtime-selected level
    fn log_lazy<F, S>(&self, level: Level, producer: F)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        if level_enabled(self, level, None) {
            let message: String = producer().into();
            self.log(level, None, &message, None);
        }
    }

    /// Log with a marker at a runtime-selected level
    fn log_lazy_with_marker<F, S>(&self, level: Level, marker: &Marker, producer: F)
    where
        F: FnOnce(&Marker) -> S,
        S: Into<String>,
    {
        if level_enabled(self, level, Some(marker)) {
            let message: String = producer(marker).into();
            self.log(level, Some(marker), &message, None);
        }
    }

    /// Log an attached error at a runtime-selected level
    fn log_lazy_with_error<F, S>(&self, level: Level, error: &(dyn Error + 'static), producer: F)
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        if level_enabled(self, level, None) {
            let message: String = producer().into();
            self.log(level, None, &message, Some(error));
        }
    }

    /// Log an attached error with a marker at a runtime-selected level
    fn log_lazy_with_marker_error<F, S>(
        &self,
        level: Level,
        marker: &Marker,
        error: &(dyn Error + 'static),
        producer: F,
    ) where
        F: FnOnce(&Marker) -> S,
        S: Into<String>,
    {
        if level_enabled(self, level, Some(marker)) {
            let message: String = producer(marker).into();
            self.log(level, Some(marker), &message, Some(error));
        }
    }

    /// Log a message and error that are both built by the producer
    fn log_lazy_throwable<F, S, E>(&self, level: Level, producer: F)
    where
        F: FnOnce() -> (S, E),
        S: Into<String>,
        E: Error + 'static,
    {
        if level_enabled(self, level, None) {
            let (message, error) = producer();
            let message: String = message.into();
            self.log(level, None, &message, Some(&error as &(dyn Error + 'static)));
        }
    }

    /// Log a message and error built by the producer, tagged with a marker
    fn log_lazy_throwable_with_marker<F, S, E>(&self, level: Level, marker: &Marker, producer: F)
    where
        F: FnOnce(&Marker) -> (S, E),
        S: Into<String>,
        E: Error + 'static,
    {
        if level_enabled(self, level, Some(marker)) {
            let (message, error) = producer(marker);
            let message: String = message.into();
            self.log(level, Some(marker), &message, Some(&error as &(dyn Error + 'static)));
        }
    }

    level_methods!(
        Level::Trace, "TRACE",
        trace, trace_with_marker, trace_with_error,
        trace_with_marker_error, trace_throwable, trace_throwable_with_marker
    );

    level_methods!(
        Level::Debug, "DEBUG",
        debug, debug_with_marker, debug_with_error,
        debug_with_marker_error, debug_throwable, debug_throwable_with_marker
    );

    level_methods!(
        Level::Info, "INFO",
        info, info_with_marker, info_with_error,
        info_with_marker_error, info_throwable, info_throwable_with_marker
    );

    level_methods!(
        Level::Warn, "WARN",
        warn, warn_with_marker, warn_with_error,
        warn_with_marker_error, warn_throwable, warn_throwable_with_marker
    );

    level_methods!(
        Level::Error, "ERROR",
        error, error_with_marker, error_with_error,
        error_with_marker_error, error_throwable, error_throwable_with_marker
    );
}

impl<L: Logger + ?Sized> LazyLog for L {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::DelegatingLogger;
    use std::cell::Cell;
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Fixed(bool);

    impl Logger for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn is_enabled(&self, _level: Level, _marker: Option<&Marker>) -> bool {
            self.0
        }

        fn log(
            &self,
            _level: Level,
            _marker: Option<&Marker>,
            _message: &str,
            _error: Option<&(dyn Error + 'static)>,
        ) {
        }
    }

    #[derive(Debug)]
    struct Oops;

    impl fmt::Display for Oops {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("oops")
        }
    }

    impl Error for Oops {}

    #[test]
    fn test_disabled_skips_producer() {
        let calls = Cell::new(0);
        let logger = Fixed(false);
        let marker = Marker::new("M");

        logger.trace(|| {
            calls.set(calls.get() + 1);
            "x"
        });
        logger.info_with_marker(&marker, |_| {
            calls.set(calls.get() + 1);
            "x"
        });
        logger.error_throwable(|| {
            calls.set(calls.get() + 1);
            ("x", Oops)
        });

        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_enabled_runs_producer_once() {
        let calls = Cell::new(0);
        let logger = Fixed(true);

        logger.warn(|| {
            calls.set(calls.get() + 1);
            String::from("x")
        });

        assert_eq!(calls.get(), 1);
    }

    /// Enabled everywhere except where a per-level predicate says otherwise
    struct TraceOff {
        produced: AtomicUsize,
    }

    impl Logger for TraceOff {
        fn name(&self) -> &str {
            "trace-off"
        }

        fn is_enabled(&self, _level: Level, _marker: Option<&Marker>) -> bool {
            true
        }

        fn log(
            &self,
            _level: Level,
            _marker: Option<&Marker>,
            _message: &str,
            _error: Option<&(dyn Error + 'static)>,
        ) {
        }

        fn is_trace_enabled(&self) -> bool {
            false
        }

        fn is_debug_enabled_with_marker(&self, _marker: &Marker) -> bool {
            false
        }
    }

    #[test]
    fn test_overridden_level_predicates_are_honoured() {
        let inner = Arc::new(TraceOff {
            produced: AtomicUsize::new(0),
        });
        let wrapped = DelegatingLogger::new(inner.clone());
        let marker = Marker::new("M");
        let bump = || {
            inner.produced.fetch_add(1, Ordering::SeqCst);
            "x"
        };

        inner.as_ref().trace(bump);
        inner.trace(bump);
        wrapped.trace(bump);
        wrapped.debug_with_marker(&marker, |_| bump());
        wrapped.trace_throwable(|| (bump(), Oops));
        assert_eq!(inner.produced.load(Ordering::SeqCst), 0);

        // predicates that are not overridden still fall back to is_enabled
        wrapped.trace_with_marker(&marker, |_| bump());
        wrapped.debug(bump);
        assert_eq!(inner.produced.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_callable_through_trait_object() {
        let calls = Cell::new(0);
        let logger: &dyn Logger = &Fixed(true);

        logger.debug_with_error(&Oops, || {
            calls.set(calls.get() + 1);
            "x"
        });

        assert_eq!(calls.get(), 1);
    }
}
