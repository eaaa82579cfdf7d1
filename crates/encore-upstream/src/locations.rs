use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use encore_core::ports::{LocationSource, SourceError};

/// Live adapter for the per-artist locations resource.
///
/// The locator comes straight out of the artist record; nothing is appended
/// or rewritten here.
pub struct HttpLocationSource {
  client: Client,
}

impl HttpLocationSource {
  pub fn new(client: Client) -> Self {
    Self { client }
  }
}

#[async_trait]
impl LocationSource for HttpLocationSource {
  async fn fetch_locations(&self, locator: &str) -> Result<Vec<String>, SourceError> {
    debug!(locator, "fetching tour locations");

    let response = self
      .client
      .get(locator)
      .send()
      .await
      .map_err(|e| SourceError::Unavailable(format!("GET {locator}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
      return Err(SourceError::Unavailable(format!("GET {locator}: status {status}")));
    }

    let body = response
      .text()
      .await
      .map_err(|e| SourceError::Unavailable(format!("GET {locator}: read body: {e}")))?;

    decode_locations(&body)
  }
}

#[derive(Debug, Deserialize)]
struct LocationsBody {
  locations: Vec<String>,
}

fn decode_locations(body: &str) -> Result<Vec<String>, SourceError> {
  let decoded: LocationsBody =
    serde_json::from_str(body).map_err(|e| SourceError::Malformed(format!("locations: {e}")))?;
  Ok(decoded.locations)
}
