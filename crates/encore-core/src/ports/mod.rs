pub mod artist_source;
pub mod location_source;

pub use artist_source::ArtistSource;
pub use location_source::LocationSource;

use thiserror::Error;

/// Failure modes shared by both upstream ports.
///
/// `Unavailable` covers network errors, timeouts and non-success statuses;
/// `Malformed` covers bodies that arrived but could not be decoded.
#[derive(Debug, Error)]
pub enum SourceError {
  #[error("upstream unavailable: {0}")]
  Unavailable(String),

  #[error("malformed upstream response: {0}")]
  Malformed(String),
}
