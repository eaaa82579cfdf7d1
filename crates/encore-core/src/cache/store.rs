use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use crate::cache::snapshot::Snapshot;

/// Handle to the latest aggregated snapshot.
///
/// Clones share the same slot, so the store can be handed to the service,
/// background tasks and tests without any module-level global. Readers copy
/// the `Arc` out and never hold the lock across I/O; `install` is a single
/// pointer replace, so a reader sees the previous snapshot in full or the
/// new one in full, never a mix of both refresh cycles.
#[derive(Clone, Default)]
pub struct SnapshotStore {
  inner: Arc<RwLock<Option<Arc<Snapshot>>>>,
}

impl SnapshotStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Latest installed snapshot. `None` until the first successful refresh.
  pub fn current(&self) -> Option<Arc<Snapshot>> {
    self.inner.read().clone()
  }

  /// The current snapshot, only if it is younger than `ttl`.
  pub fn fresh(&self, now: Instant, ttl: Duration) -> Option<Arc<Snapshot>> {
    self.current().filter(|snap| now.saturating_duration_since(snap.fetched_at) <= ttl)
  }

  /// True when no snapshot exists or the existing one outlived `ttl`.
  pub fn is_stale(&self, now: Instant, ttl: Duration) -> bool {
    self.fresh(now, ttl).is_none()
  }

  /// Atomically replaces the previous snapshot, if any. Last writer wins.
  pub fn install(&self, snapshot: Snapshot) {
    *self.inner.write() = Some(Arc::new(snapshot));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const TTL: Duration = Duration::from_secs(20 * 60);

  #[test]
  fn empty_store_is_stale() {
    let store = SnapshotStore::new();
    assert!(store.current().is_none());
    assert!(store.is_stale(Instant::now(), TTL));
  }

  #[test]
  fn install_makes_store_fresh() {
    let store = SnapshotStore::new();
    let now = Instant::now();

    store.install(Snapshot::new(vec![], now));

    assert!(!store.is_stale(now, TTL));
    assert!(store.fresh(now, TTL).is_some());
    assert_eq!(store.current().unwrap().artists.len(), 0);
  }

  #[test]
  fn snapshot_expires_after_ttl() {
    let store = SnapshotStore::new();
    let fetched_at = Instant::now();
    store.install(Snapshot::new(vec![], fetched_at));

    let later = fetched_at + TTL + Duration::from_secs(1);
    assert!(store.is_stale(later, TTL));
  }

  #[test]
  fn clones_share_the_same_slot() {
    let store = SnapshotStore::new();
    let other = store.clone();

    store.install(Snapshot::new(vec![], Instant::now()));
    assert!(other.current().is_some());
  }

  #[test]
  fn readers_keep_their_snapshot_across_installs() {
    let store = SnapshotStore::new();
    let t0 = Instant::now();

    store.install(Snapshot::new(vec![], t0));
    let held = store.current().unwrap();

    store.install(Snapshot::new(vec![], t0 + Duration::from_secs(1)));

    // The old reference stays whole; only new reads see the replacement.
    assert_eq!(held.fetched_at, t0);
    assert_ne!(store.current().unwrap().fetched_at, t0);
  }
}
