mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use anyhow::Result;
use common::{sentinel, Call, RecordingLogger};
use runar_lazy_log::{DeferredLogger, LazyLog, Logger, LoggerFactory};

struct NodeService;

/// A factory that counts how often it is asked to resolve a logger
struct CountingFactory {
    resolutions: AtomicUsize,
}

impl CountingFactory {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            resolutions: AtomicUsize::new(0),
        })
    }

    fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }
}

impl LoggerFactory for CountingFactory {
    fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        Arc::new(RecordingLogger::named(name, true))
    }
}

#[test]
fn test_resolves_once_across_accesses() -> Result<()> {
    let factory = CountingFactory::new();
    let handle = DeferredLogger::with_factory("runar.node", factory.clone());

    assert_eq!(factory.resolutions(), 0);
    assert!(!handle.is_resolved());

    let first = Arc::clone(handle.get().delegate());
    for _ in 0..3 {
        assert!(Arc::ptr_eq(&first, handle.get().delegate()));
    }

    assert_eq!(factory.resolutions(), 1);
    assert_eq!(handle.name(), "runar.node");
    Ok(())
}

#[test]
fn test_type_handle_is_named_after_simple_type_name() {
    let factory = CountingFactory::new();
    let handle = DeferredLogger::for_type_with_factory::<NodeService>(factory.clone());

    assert_eq!(handle.name(), "NodeService");
    assert_eq!(factory.resolutions(), 1);
}

#[test]
fn test_closure_factory() {
    let recorder = RecordingLogger::named("closure", true);
    let shared = recorder.clone();
    let handle = DeferredLogger::with_factory(
        "ignored",
        Arc::new(move |_name: &str| -> Arc<dyn Logger> { Arc::new(shared.clone()) }),
    );

    let msg = sentinel();
    handle.info(|| msg.clone());

    let calls = recorder.calls();
    assert_eq!(calls.len(), 2);
    match &calls[1] {
        Call::Log { message, .. } => assert_eq!(message, &msg),
        other => panic!("expected a log call, got {:?}", other),
    }
}

#[test]
fn test_concurrent_first_access_resolves_once() {
    const THREADS: usize = 8;

    let factory = CountingFactory::new();
    let handle = DeferredLogger::with_factory("runar.concurrent", factory.clone());
    let barrier = Barrier::new(THREADS);
    let (barrier, handle) = (&barrier, &handle);

    let delegates: Vec<Arc<dyn Logger>> = thread::scope(|scope| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(move || {
                    barrier.wait();
                    Arc::clone(handle.get().delegate())
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().expect("worker panicked"))
            .collect()
    });

    assert_eq!(factory.resolutions(), 1);
    assert!(delegates
        .iter()
        .all(|delegate| Arc::ptr_eq(delegate, &delegates[0])));
}

#[test]
fn test_static_handle() {
    static LOG: DeferredLogger = DeferredLogger::new("runar.static");

    assert_eq!(LOG.name(), "runar.static");
    assert!(LOG.is_resolved());
}
