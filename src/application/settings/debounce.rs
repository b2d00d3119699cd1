// src/application/settings/debounce.rs
use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::lock;
use crate::domain::post::PostId;

/// Trailing-edge debounce keyed by post identity.
///
/// `schedule` spawns the work behind the quiet period; scheduling again for
/// the same key before the timer fires aborts the pending task and starts
/// the wait over. At most one pending task exists per key.
pub struct DebounceScheduler {
    quiet: Duration,
    pending: Mutex<HashMap<PostId, JoinHandle<()>>>,
}

impl DebounceScheduler {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Run `work` once `quiet` has elapsed without a reschedule for `key`.
    /// Must be called from within a Tokio runtime.
    pub fn schedule<F>(&self, key: PostId, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let quiet = self.quiet;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            work.await;
        });
        if let Some(previous) = lock(&self.pending).insert(key, handle) {
            previous.abort();
        }
    }

    pub fn cancel(&self, key: PostId) {
        if let Some(handle) = lock(&self.pending).remove(&key) {
            handle.abort();
        }
    }

    pub fn cancel_all(&self) {
        for (_, handle) in lock(&self.pending).drain() {
            handle.abort();
        }
    }
}

impl Drop for DebounceScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
