use crate::ports::SourceError;

/// Port sobre el recurso secundario de locaciones de gira.
///
/// `locator` es la URL opaca embebida en cada `Artist`; el core no la
/// interpreta, solo la reenvía al adapter.
#[async_trait::async_trait]
pub trait LocationSource: Send + Sync {
  async fn fetch_locations(&self, locator: &str) -> Result<Vec<String>, SourceError>;
}
