//! Sleeping and shutdown signalling for the blocking loops

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::{Duration, Instant},
};

const SLICE: Duration = Duration::from_millis(100);

pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Cancellation flag shared between the signal handler and the loops
#[derive(Debug, Clone, Default)]
pub struct Shutdown(Arc<AtomicBool>);

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Sleeps on the current thread, waking early once shutdown is triggered
pub struct ThreadSleeper {
    shutdown: Shutdown,
}

impl ThreadSleeper {
    pub fn new(shutdown: Shutdown) -> Self {
        Self { shutdown }
    }
}

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        let deadline = Instant::now() + duration;
        loop {
            if self.shutdown.is_triggered() {
                return;
            }
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            thread::sleep(SLICE.min(deadline - now));
        }
    }
}
