//! Deletion counters
//!
//! The attempt counter drives the throttle heuristic and is shared by every
//! delete issued through the same [`PackageDeleter`](crate::deleter::PackageDeleter).
//! It starts at zero and only ever grows. Outcome counters are informational.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters for deletion attempts and their outcomes
#[derive(Debug, Default)]
pub struct DeletionCounter {
    attempted: AtomicU64,
    deleted: AtomicU64,
    not_deleted: AtomicU64,
    failed: AtomicU64,
}

impl DeletionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one attempt, returning the count as it was before this attempt
    pub fn record_attempt(&self) -> u64 {
        self.attempted.fetch_add(1, Ordering::SeqCst)
    }

    /// Record a mutation response and its success flag
    pub fn record_outcome(&self, success: bool) {
        if success {
            self.deleted.fetch_add(1, Ordering::Relaxed);
        } else {
            self.not_deleted.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a mutation that failed at the transport
    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Deletions attempted so far
    pub fn attempted(&self) -> u64 {
        self.attempted.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> DeletionCounterSnapshot {
        DeletionCounterSnapshot {
            attempted: self.attempted.load(Ordering::SeqCst),
            deleted: self.deleted.load(Ordering::Relaxed),
            not_deleted: self.not_deleted.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of a [`DeletionCounter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionCounterSnapshot {
    pub attempted: u64,
    pub deleted: u64,
    pub not_deleted: u64,
    pub failed: u64,
}

impl DeletionCounterSnapshot {
    /// Attempts that have not produced an outcome yet
    pub fn in_flight(&self) -> u64 {
        self.attempted
            .saturating_sub(self.deleted + self.not_deleted + self.failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_record_attempt_returns_previous_value() {
        let counter = DeletionCounter::new();
        assert_eq!(counter.record_attempt(), 0);
        assert_eq!(counter.record_attempt(), 1);
        assert_eq!(counter.attempted(), 2);
    }

    #[test]
    fn test_snapshot_tracks_outcomes() {
        let counter = DeletionCounter::new();
        for _ in 0..4 {
            counter.record_attempt();
        }
        counter.record_outcome(true);
        counter.record_outcome(false);
        counter.record_failure();

        let snapshot = counter.snapshot();
        assert_eq!(snapshot.attempted, 4);
        assert_eq!(snapshot.deleted, 1);
        assert_eq!(snapshot.not_deleted, 1);
        assert_eq!(snapshot.failed, 1);
        assert_eq!(snapshot.in_flight(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_attempts_are_not_lost() {
        let counter = Arc::new(DeletionCounter::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                tokio::spawn(async move {
                    for _ in 0..250 {
                        counter.record_attempt();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(counter.attempted(), 2000);
    }
}
