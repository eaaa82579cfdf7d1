use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::domain::Artist;

/// One artist paired with its fetched tour locations.
///
/// An empty `locations` list is deliberately ambiguous: it means either
/// "the upstream has none" or "the per-artist fetch failed and was absorbed".
/// Consumers cannot tell the two apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedArtist {
  #[serde(rename = "Artist")]
  pub artist: Artist,

  #[serde(rename = "Locations")]
  pub locations: Vec<String>,
}

/// The whole aggregated cache content, replaced as a unit.
///
/// `fetched_at` is taken when the primary fetch returned, so the TTL clock
/// does not count the fan-out time.
#[derive(Debug, Clone)]
pub struct Snapshot {
  pub artists: Vec<CachedArtist>,
  pub fetched_at: Instant,
}

impl Snapshot {
  pub fn new(artists: Vec<CachedArtist>, fetched_at: Instant) -> Self {
    Self { artists, fetched_at }
  }
}
