use serde::{Deserialize, Serialize};

/// Id asignado por la fuente primaria. Único dentro de un mismo fetch;
/// no se garantiza estabilidad entre fetches si el upstream renumera.
pub type ArtistId = u64;

/// Representa a un artista o banda tal como lo entrega la fuente primaria.
///
/// Es una entidad inmutable: nunca se actualiza campo a campo, solo se
/// reemplaza completa en el próximo refresh del snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
  pub id: ArtistId,

  /// URL de la imagen promocional.
  pub image: String,

  /// Nombre principal (canónico) del artista o banda.
  pub name: String,

  /// Año de formación.
  pub creation_date: i32,

  /// Fecha del primer álbum, tal cual viene del upstream (no se parsea).
  pub first_album: String,

  /// Integrantes, en el orden del upstream.
  pub members: Vec<String>,

  /// Locator del recurso secundario de locaciones (URL opaca).
  pub locations: String,

  /// Locator del recurso de fechas de conciertos.
  pub concert_dates: String,

  /// Locator del recurso de relaciones fecha→lugar.
  pub relations: String,
}
