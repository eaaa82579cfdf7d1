use crate::cache::snapshot::{CachedArtist, Snapshot};

/// Same substring matching as search, but yields whole records.
///
/// A record is included at most once no matter how many of its fields match.
/// Output preserves the snapshot's record order.
///
/// Callers must validate the query first: an empty `query` matches every
/// record. `TrackerService` rejects it as `InvalidQuery` before getting
/// here; embedders calling this directly have to do the same.
pub fn filter_snapshot(snapshot: &Snapshot, query: &str) -> Vec<CachedArtist> {
  let needle = query.to_lowercase();

  snapshot.artists.iter().filter(|cached| matches_any_field(cached, &needle)).cloned().collect()
}

fn matches_any_field(cached: &CachedArtist, needle: &str) -> bool {
  let artist = &cached.artist;

  artist.name.to_lowercase().contains(needle)
    || artist.members.iter().any(|m| m.to_lowercase().contains(needle))
    || cached.locations.iter().any(|l| l.to_lowercase().contains(needle))
    || artist.first_album.to_lowercase().contains(needle)
    || artist.creation_date.to_string().contains(needle)
}
