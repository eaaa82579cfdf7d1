use crate::domain::Artist;
use crate::ports::SourceError;

/// Port sobre el listado primario de artistas.
///
/// Implementaciones posibles:
/// - cliente HTTP contra la API pública
/// - fixture en memoria para tests
///
/// El contrato es todo-o-nada: nunca se devuelve una lista parcial.
#[async_trait::async_trait]
pub trait ArtistSource: Send + Sync {
  async fn fetch_artists(&self) -> Result<Vec<Artist>, SourceError>;
}
