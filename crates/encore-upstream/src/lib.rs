mod artists;
pub mod config;
mod locations;

pub use artists::HttpArtistSource;
pub use config::UpstreamConfig;
pub use locations::HttpLocationSource;

use std::time::Duration;

use encore_core::services::TrackerService;
use thiserror::Error;

/// Alias to simplify the generic signature of the wired-up service.
pub type HttpTrackerService = TrackerService<HttpArtistSource, HttpLocationSource>;

#[derive(Debug, Error)]
pub enum SetupError {
  #[error("config error: {0}")]
  Config(#[from] encore_config::ConfigError),

  #[error("http client error: {0}")]
  Client(#[from] reqwest::Error),
}

/// Shared HTTP client with the upstream timeout applied to every request.
pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
  reqwest::Client::builder().timeout(timeout).build()
}

/// Wires both live adapters into a `TrackerService` using `encore.toml`.
pub fn tracker_from_config() -> Result<HttpTrackerService, SetupError> {
  let cfg = UpstreamConfig::load()?;
  let client = build_client(cfg.request_timeout())?;

  let artists = HttpArtistSource::new(client.clone(), &cfg.api_base);
  let locations = HttpLocationSource::new(client);

  Ok(TrackerService::new(artists, locations, cfg.tracker_options()))
}
