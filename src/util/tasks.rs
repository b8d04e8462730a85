//! Cancellable scheduled tasks keyed by target.
//!
//! DESIGN
//! ======
//! Timer handles (gloo-timers `Interval`/`Timeout`) cancel themselves on drop,
//! so owning the handle is owning the task. The registry keeps at most one
//! live handle per key: scheduling again for the same key drops, and so
//! cancels, whatever was running there.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug)]
pub struct TaskRegistry<K, H> {
    tasks: HashMap<K, H>,
}

impl<K, H> Default for TaskRegistry<K, H> {
    fn default() -> Self {
        Self { tasks: HashMap::new() }
    }
}

impl<K: Eq + Hash, H> TaskRegistry<K, H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `handle` for `key`. Returns `true` if a previous task was cancelled.
    pub fn schedule(&mut self, key: K, handle: H) -> bool {
        self.tasks.insert(key, handle).is_some()
    }

    /// Remove a task that has run to completion, handing back its handle so the
    /// caller decides when to release it.
    pub fn finish(&mut self, key: &K) -> Option<H> {
        self.tasks.remove(key)
    }

    /// Cancel the task for `key`. Returns `true` if one was running.
    pub fn cancel(&mut self, key: &K) -> bool {
        self.tasks.remove(key).is_some()
    }

    #[must_use]
    pub fn is_active(&self, key: &K) -> bool {
        self.tasks.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Stop a finished interval from inside its own callback.
///
/// The interval is cleared immediately; its closure is released on the next
/// turn of the event loop, after the current invocation has returned.
#[cfg(feature = "csr")]
pub fn retire_interval(interval: gloo_timers::callback::Interval) {
    let closure = interval.cancel();
    gloo_timers::callback::Timeout::new(0, move || drop(closure)).forget();
}
