//! Shared testing utilities for chunklist integration tests.

use std::sync::{Arc, Barrier};
use std::thread;

/// Run `action` on `threads` OS threads against one shared subject.
///
/// All threads are released at the same instant behind a barrier to maximize
/// overlap, and each receives its own index. Returns the subject once every
/// worker has joined, so callers can assert it came through unchanged.
#[allow(dead_code)]
pub fn run_concurrently<S, F>(threads: usize, subject: S, action: F) -> S
where
    S: Send + Sync + 'static,
    F: Fn(&S, usize) + Send + Sync + 'static,
{
    let subject = Arc::new(subject);
    let action = Arc::new(action);
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|idx| {
            let subject = Arc::clone(&subject);
            let action = Arc::clone(&action);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                action(&subject, idx);
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    Arc::try_unwrap(subject)
        .unwrap_or_else(|_| panic!("subject still shared after workers joined"))
}
