//! Advisory per-series coordination ensuring at-most-one concurrent
//! leaderboard rebuild per `series_id`. Readers that miss the cache coalesce
//! on this guard: the first acquires, the rest wait, and on release they
//! re-read the leaderboard store rather than triggering another recompute.
//! Correctness never depends on this — two racing rebuilds of the same
//! series are both valid, since the engines are pure and deterministic; this
//! only avoids a CPU stampede under concurrent cache misses.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct BuildGuard {
    locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl BuildGuard {
    pub fn new() -> Self {
        Self::default()
    }

    async fn lock_for(&self, series_id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(series_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Runs `f` while holding the per-series lock. Cross-series calls never
    /// contend with each other.
    pub async fn with_guard<F, Fut, T>(&self, series_id: Uuid, f: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = T>,
    {
        let lock = self.lock_for(series_id).await;
        let _permit = lock.lock().await;
        f().await
    }
}
