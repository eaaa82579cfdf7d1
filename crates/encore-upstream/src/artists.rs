use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use encore_core::domain::Artist;
use encore_core::ports::{ArtistSource, SourceError};

/// Live adapter for the primary artist listing.
///
/// Stateless: no caching here. Timeout discipline lives in the injected
/// `Client`, so the adapter never outlives a hung upstream.
pub struct HttpArtistSource {
  client: Client,
  api_base: String,
}

impl HttpArtistSource {
  pub fn new(client: Client, api_base: impl Into<String>) -> Self {
    Self { client, api_base: api_base.into().trim_end_matches('/').to_string() }
  }

  fn artists_url(&self) -> String {
    format!("{}/artists", self.api_base)
  }
}

#[async_trait]
impl ArtistSource for HttpArtistSource {
  async fn fetch_artists(&self) -> Result<Vec<Artist>, SourceError> {
    let url = self.artists_url();
    debug!(%url, "fetching artist list");

    let response = self
      .client
      .get(&url)
      .send()
      .await
      .map_err(|e| SourceError::Unavailable(format!("GET {url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
      return Err(SourceError::Unavailable(format!("GET {url}: status {status}")));
    }

    let body = response
      .text()
      .await
      .map_err(|e| SourceError::Unavailable(format!("GET {url}: read body: {e}")))?;

    decode_artists(&body)
  }
}

/// Split out of the trait impl so decoding is testable without a server.
fn decode_artists(body: &str) -> Result<Vec<Artist>, SourceError> {
  serde_json::from_str(body).map_err(|e| SourceError::Malformed(format!("artist list: {e}")))
}
