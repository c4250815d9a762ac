// runar_lazy_log/src/backends/mod.rs
//
// Concrete `Logger` implementations over existing logging facades

mod log_backend;
mod tracing_backend;

pub use log_backend::{init, init_with_filter, LogFactory, LogLogger};
pub use tracing_backend::{TracingFactory, TracingLogger};

use std::error::Error;
use std::fmt::Write;

/// Render an error and its `source()` chain on one line
pub(crate) fn render_error_chain(error: &(dyn Error + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(rendered, "; caused by: {}", cause);
        source = cause.source();
    }
    rendered
}
