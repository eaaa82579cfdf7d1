use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tokio::sync::{Mutex, Semaphore};
use tracing::{debug, error, warn};

use crate::cache::{CachedArtist, Snapshot, SnapshotStore};
use crate::errors::CoreError;
use crate::ports::{ArtistSource, LocationSource};
use crate::query::{SearchHit, filter_snapshot, search_snapshot};

/// Tuning knobs for the aggregation cache.
#[derive(Debug, Clone)]
pub struct TrackerOptions {
  /// Age after which the snapshot must be rebuilt before serving a read.
  pub cache_ttl: Duration,

  /// Maximum number of simultaneous per-artist location fetches.
  pub fanout_limit: usize,
}

impl Default for TrackerOptions {
  fn default() -> Self {
    Self { cache_ttl: Duration::from_secs(20 * 60), fanout_limit: 64 }
  }
}

/// Read-through aggregation cache over the two upstream ports.
///
/// El servicio no conoce HTTP ni reqwest: recibe los ports ya construidos
/// y el resto de la aplicación solo le habla vía `search` / `filter` /
/// `warm`. Todo el estado compartido vive en `Arc`, así que clonar el
/// servicio produce handles sobre el mismo snapshot.
pub struct TrackerService<A, L>
where
  A: ArtistSource + 'static,
  L: LocationSource + 'static,
{
  artists: Arc<A>,
  locations: Arc<L>,
  store: SnapshotStore,
  options: TrackerOptions,
  // Single-flight gate: at most one stale-triggered refresh in flight.
  refresh_gate: Arc<Mutex<()>>,
}

impl<A, L> Clone for TrackerService<A, L>
where
  A: ArtistSource + 'static,
  L: LocationSource + 'static,
{
  fn clone(&self) -> Self {
    Self {
      artists: Arc::clone(&self.artists),
      locations: Arc::clone(&self.locations),
      store: self.store.clone(),
      options: self.options.clone(),
      refresh_gate: Arc::clone(&self.refresh_gate),
    }
  }
}

impl<A, L> TrackerService<A, L>
where
  A: ArtistSource + 'static,
  L: LocationSource + 'static,
{
  pub fn new(artists: A, locations: L, options: TrackerOptions) -> Self {
    Self {
      artists: Arc::new(artists),
      locations: Arc::new(locations),
      store: SnapshotStore::new(),
      options,
      refresh_gate: Arc::new(Mutex::new(())),
    }
  }

  /// The store handle, mainly for wiring and assertions in tests.
  pub fn store(&self) -> &SnapshotStore {
    &self.store
  }

  /// Rebuilds the snapshot from both upstreams and installs it.
  ///
  /// A primary-list failure aborts the whole refresh and leaves the store
  /// untouched (stale-but-available beats no data). Per-artist location
  /// failures are absorbed into an empty list so one unreachable locator
  /// cannot hide every other artist.
  pub async fn refresh(&self) -> Result<Arc<Snapshot>, CoreError> {
    let artists = self.artists.fetch_artists().await.map_err(CoreError::from)?;

    // The TTL clock starts when the primary list arrived, not when the
    // fan-out finished.
    let fetched_at = Instant::now();

    debug!(artists = artists.len(), "primary list fetched, fanning out location fetches");

    let semaphore = Arc::new(Semaphore::new(self.options.fanout_limit.max(1)));
    let mut tasks = FuturesUnordered::new();

    for artist in artists {
      let locations = Arc::clone(&self.locations);
      let semaphore = Arc::clone(&semaphore);

      tasks.push(tokio::spawn(async move {
        let _permit = match semaphore.acquire_owned().await {
          Ok(permit) => permit,
          // The semaphore is never closed while tasks run; degrade anyway.
          Err(_) => return CachedArtist { artist, locations: Vec::new() },
        };

        match locations.fetch_locations(&artist.locations).await {
          Ok(fetched) => CachedArtist { artist, locations: fetched },
          Err(err) => {
            warn!(artist = %artist.name, error = %err, "location fetch failed, caching empty list");
            CachedArtist { artist, locations: Vec::new() }
          }
        }
      }));
    }

    // Join barrier: every task finishes before anything becomes visible.
    // Records land in completion order; consumers key off artist ids.
    let mut cached = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.next().await {
      let record = joined.map_err(|e| CoreError::Internal(format!("location fan-out task failed: {e}")))?;
      cached.push(record);
    }

    let snapshot = Snapshot::new(cached, fetched_at);
    self.store.install(snapshot);

    self
      .store
      .current()
      .ok_or_else(|| CoreError::Internal("snapshot missing right after install".to_string()))
  }

  /// Triggers one background refresh to warm the cache at process start.
  /// Failures are logged, never surfaced.
  pub fn warm(&self) -> tokio::task::JoinHandle<()> {
    let service = self.clone();

    tokio::spawn(async move {
      if let Err(err) = service.refresh().await {
        error!(error = %err, "cache warm-up failed");
      }
    })
  }

  /// Categorized suggestions for every field containing `query`.
  pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, CoreError> {
    if query.is_empty() {
      return Err(CoreError::InvalidQuery);
    }

    let snapshot = self.ensure_fresh().await.map_err(reader_error)?;
    Ok(search_snapshot(&snapshot, query))
  }

  /// Whole records with at least one field containing `query`.
  pub async fn filter(&self, query: &str) -> Result<Vec<CachedArtist>, CoreError> {
    if query.is_empty() {
      return Err(CoreError::InvalidQuery);
    }

    let snapshot = self.ensure_fresh().await.map_err(reader_error)?;
    Ok(filter_snapshot(&snapshot, query))
  }

  /// Freshness gate shared by both read operations.
  ///
  /// A fresh snapshot is served without touching the upstream. When stale,
  /// the first caller holds the gate and refreshes inline; callers queued
  /// behind it re-check and normally ride on the leader's result instead of
  /// refreshing again. If the leader failed, the next waiter retries.
  async fn ensure_fresh(&self) -> Result<Arc<Snapshot>, CoreError> {
    if let Some(snapshot) = self.store.fresh(Instant::now(), self.options.cache_ttl) {
      return Ok(snapshot);
    }

    let _leader = self.refresh_gate.lock().await;

    if let Some(snapshot) = self.store.fresh(Instant::now(), self.options.cache_ttl) {
      return Ok(snapshot);
    }

    self.refresh().await
  }
}

/// A refresh that fails while serving a read surfaces as an opaque internal
/// error: the reader deliberately gets no stale fallback and no upstream
/// detail.
fn reader_error(err: CoreError) -> CoreError {
  match err {
    CoreError::Internal(msg) => CoreError::Internal(msg),
    other => CoreError::Internal(other.to_string()),
  }
}
