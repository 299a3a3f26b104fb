//! Shared archive of rejected submissions.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Append-only log of raw submissions that failed to parse.
///
/// Thread-safe via an interior `Mutex`; construct once at startup and share
/// it behind an `Arc`. The lock is never held across an `.await`.
///
/// Growth is unbounded: entries are only removed by [`ErrorLog::clear`].
#[derive(Debug, Default)]
pub struct ErrorLog {
    entries: Mutex<Vec<String>>,
}

impl ErrorLog {
    /// Create a new, empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw submission verbatim.
    pub fn push(&self, raw: impl Into<String>) {
        self.lock().push(raw.into());
    }

    /// Copy of the current entries in insertion order.
    ///
    /// Later pushes never show up in a snapshot already returned.
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Remove every entry and return how many were removed.
    ///
    /// Count and reset happen under one lock acquisition, so each push lands
    /// either in this count or in the log afterwards.
    pub fn clear(&self) -> usize {
        std::mem::take(&mut *self.lock()).len()
    }

    /// Current number of entries. May be stale as soon as it returns.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave the Vec half-updated, so a
    // poisoned lock is safe to keep using.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
