use std::time::Duration;

use encore_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use encore_core::services::TrackerOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpstreamConfig {
  /// Base de la API primaria; `/artists` se resuelve contra esta URL.
  #[serde(default = "default_api_base")]
  pub api_base: String,

  /// Timeout por request HTTP (primario y secundarios).
  #[serde(default = "default_request_timeout_secs")]
  pub request_timeout_secs: u64,

  /// Vida útil del snapshot antes de forzar un refresh.
  #[serde(default = "default_cache_ttl_mins")]
  pub cache_ttl_mins: u64,

  /// Máximo de fetches de locaciones simultáneos durante un refresh.
  #[serde(default = "default_fanout_limit")]
  pub fanout_limit: usize,
}

fn default_api_base() -> String {
  "https://groupietrackers.herokuapp.com/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
  20
}

fn default_cache_ttl_mins() -> u64 {
  20
}

fn default_fanout_limit() -> usize {
  64
}

impl Default for UpstreamConfig {
  fn default() -> Self {
    UpstreamConfig {
      api_base: default_api_base(),
      request_timeout_secs: default_request_timeout_secs(),
      cache_ttl_mins: default_cache_ttl_mins(),
      fanout_limit: default_fanout_limit(),
    }
  }
}

impl UpstreamConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("upstream")?;
    CONFIG_BACKEND.save_section("upstream", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("upstream", self)
  }

  pub fn request_timeout(&self) -> Duration {
    Duration::from_secs(self.request_timeout_secs)
  }

  pub fn cache_ttl(&self) -> Duration {
    Duration::from_secs(self.cache_ttl_mins * 60)
  }

  pub fn tracker_options(&self) -> TrackerOptions {
    TrackerOptions { cache_ttl: self.cache_ttl(), fanout_limit: self.fanout_limit }
  }
}
