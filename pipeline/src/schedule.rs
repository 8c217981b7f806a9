//! Deferred callbacks with per-channel debounce.
//!
//! GUI panels coalesce rapid selection changes by scheduling the
//! resulting query on a named channel: a later schedule on the same
//! channel cancels the pending one, so only the last callback per
//! channel runs. Cancellation is a condvar wake, never a busy-wait.
use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::{Duration, Instant};

#[derive(Default)]
struct Shared {
    /// Generation per channel; a pending callback only runs if its
    /// generation is still current when the delay elapses.
    generations: Mutex<HashMap<String, u64>>,
    wake: Condvar,
}

/// Debouncing scheduler.
///
/// Dropping the scheduler cancels everything still pending.
#[derive(Default)]
pub struct Scheduler {
    shared: Arc<Shared>,
}

impl Scheduler {
    pub fn new() -> Scheduler {
        Scheduler::default()
    }

    /// Schedules `callback` to run after `delay`, replacing any callback
    /// still pending on the same channel.
    pub fn schedule(
        &self,
        channel: impl Into<String>,
        delay: Duration,
        callback: impl FnOnce() + Send + 'static,
    ) {
        let channel = channel.into();
        let generation = self.bump(&channel);

        let shared = Arc::clone(&self.shared);
        thread::spawn(move || {
            let deadline = Instant::now() + delay;
            let mut generations = shared
                .generations
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());

            loop {
                if generations.get(&channel) != Some(&generation) {
                    // superseded or cancelled
                    return;
                }

                let now = Instant::now();
                if now >= deadline {
                    break;
                }

                let (guard, _) = shared
                    .wake
                    .wait_timeout(generations, deadline - now)
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
                generations = guard;
            }

            generations.remove(&channel);
            drop(generations);

            callback();
        });
    }

    /// Cancels the callback pending on `channel`, if any.
    pub fn cancel(&self, channel: &str) {
        let mut generations = self
            .shared
            .generations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        generations.remove(channel);
        drop(generations);
        self.shared.wake.notify_all();
    }

    fn bump(&self, channel: &str) -> u64 {
        let mut generations = self
            .shared
            .generations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let generation = generations
            .get(channel)
            .map(|generation| generation + 1)
            .unwrap_or(1);
        generations.insert(channel.to_string(), generation);
        drop(generations);

        self.shared.wake.notify_all();
        generation
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        let mut generations = self
            .shared
            .generations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        generations.clear();
        drop(generations);
        self.shared.wake.notify_all();
    }
}

#[cfg(test)]
#[path = "./schedule_test.rs"]
mod schedule_test;
