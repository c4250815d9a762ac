// runar_lazy_log/src/bin/lazy_log_example.rs
//
// Example demonstrating lazy, level-guarded logging

use std::cell::Cell;
use std::io;

use anyhow::Result;
use runar_lazy_log::{lazy_info, DeferredLogger, LazyLog, Marker};

struct Registry;

static NODE_LOG: DeferredLogger = DeferredLogger::new("runar.node");
static REGISTRY_LOG: DeferredLogger = DeferredLogger::for_type::<Registry>();

fn main() -> Result<()> {
    runar_lazy_log::init()?;

    println!("Lazy logging example (set RUST_LOG=debug to see the suppressed lines)");
    println!("--------------------------------------------------------------------");

    // Example 1: Messages only built when enabled
    example_guarded();

    // Example 2: Markers and errors
    example_markers_and_errors();

    // Example 3: Format-style macros
    example_macros();

    Ok(())
}

fn example_guarded() {
    println!("\n### Example 1: Guarded messages ###");

    let builds = Cell::new(0);
    NODE_LOG.debug(|| {
        builds.set(builds.get() + 1);
        "expensive debug dump"
    });
    NODE_LOG.info(|| {
        builds.set(builds.get() + 1);
        "node started"
    });

    println!("Messages built: {}", builds.get());
}

fn example_markers_and_errors() {
    println!("\n### Example 2: Markers and errors ###");

    let audit = Marker::new("AUDIT");
    let err = io::Error::new(io::ErrorKind::NotFound, "service manifest missing");

    REGISTRY_LOG.warn_with_marker(&audit, |m| format!("{} check skipped", m));
    REGISTRY_LOG.error_with_error(&err, || "could not register service");
    REGISTRY_LOG.error_throwable(|| {
        (
            "registry reload failed",
            io::Error::new(io::ErrorKind::Other, "lock poisoned"),
        )
    });
}

fn example_macros() {
    println!("\n### Example 3: Macros ###");

    let peers = ["peer-a", "peer-b"];
    lazy_info!(NODE_LOG, "connected to {} peers: {:?}", peers.len(), peers);
}
