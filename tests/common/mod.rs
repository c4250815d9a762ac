// Shared test doubles for the integration tests

#![allow(dead_code)]

use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex};

use runar_lazy_log::{Level, Logger, Marker};

/// One interaction observed by a [`RecordingLogger`]
#[derive(Debug, Clone)]
pub enum Call {
    IsEnabled {
        level: Level,
        marker: Option<Marker>,
    },
    Produce,
    Log {
        level: Level,
        marker: Option<Marker>,
        message: String,
        error: Option<String>,
        error_addr: Option<usize>,
    },
}

/// A logger that answers every enablement query with a fixed value and
/// records every interaction in order
#[derive(Clone)]
pub struct RecordingLogger {
    name: String,
    enabled: bool,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingLogger {
    pub fn new(enabled: bool) -> Self {
        Self::named("recording", enabled)
    }

    pub fn named(name: &str, enabled: bool) -> Self {
        Self {
            name: name.to_string(),
            enabled,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Record a producer invocation; call this from inside message closures
    pub fn produced(&self) {
        self.calls.lock().unwrap().push(Call::Produce);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Logger for RecordingLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: Level, marker: Option<&Marker>) -> bool {
        self.calls.lock().unwrap().push(Call::IsEnabled {
            level,
            marker: marker.cloned(),
        });
        self.enabled
    }

    fn log(
        &self,
        level: Level,
        marker: Option<&Marker>,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        self.calls.lock().unwrap().push(Call::Log {
            level,
            marker: marker.cloned(),
            message: message.to_string(),
            error: error.map(|e| e.to_string()),
            error_addr: error.map(error_addr),
        });
    }
}

/// Address of an error instance, for identity checks
pub fn error_addr(error: &(dyn Error + 'static)) -> usize {
    error as *const dyn Error as *const () as usize
}

#[derive(Debug)]
pub struct TestError(pub String);

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for TestError {}

pub fn sentinel() -> String {
    uuid::Uuid::new_v4().to_string()
}
