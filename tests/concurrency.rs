//! Integration tests for sharing one registry between threads.

use focus_registry::{FocusEvent, FocusRegistry};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, Mutex};
use std::thread;

#[test]
fn test_registry_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FocusRegistry>();
    assert_send_sync::<focus_registry::FocusHandle>();
}

#[test]
fn test_parallel_claims_keep_one_holder() {
    const THREADS: usize = 8;
    const CLAIMS: usize = 200;

    let registry = FocusRegistry::new();
    let closes = Arc::new(AtomicUsize::new(0));
    let displacements = Arc::new(AtomicUsize::new(0));

    let displacements_clone = displacements.clone();
    registry.set_trace_callback(move |event| {
        if let FocusEvent::Claim {
            displaced: Some(_), ..
        } = event
        {
            displacements_clone.fetch_add(1, Ordering::SeqCst);
        }
    });

    let barrier = Arc::new(Barrier::new(THREADS));
    let workers: Vec<_> = (0..THREADS)
        .map(|_| {
            let closes = closes.clone();
            let handle = registry.register(move || {
                closes.fetch_add(1, Ordering::SeqCst);
            });
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..CLAIMS {
                    handle.claim_focus();
                }
                handle
            })
        })
        .collect();

    let handles: Vec<_> = workers.into_iter().map(|w| w.join().unwrap()).collect();

    let holders = handles.iter().filter(|h| h.is_focused()).count();
    assert_eq!(holders, 1);
    // Nobody deregistered, so every displacement force-closed exactly once.
    assert_eq!(
        closes.load(Ordering::SeqCst),
        displacements.load(Ordering::SeqCst)
    );
}

#[test]
fn test_parallel_registrations_get_unique_ids() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;

    // Two-letter ids: 676 slots for 400 subscribers, so collisions happen.
    let registry = FocusRegistry::builder().id_length(2).build().unwrap();
    let ids = Arc::new(Mutex::new(Vec::new()));

    let workers: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = registry.clone();
            let ids = ids.clone();
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    let handle = registry.register(|| {});
                    ids.lock().unwrap().push(handle.id().clone());
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }

    let ids = ids.lock().unwrap();
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), THREADS * PER_THREAD);
    assert_eq!(registry.len(), THREADS * PER_THREAD);
}
