use crate::ports::SourceError;
use thiserror::Error;

/// Error genérico del núcleo de Encore.
///
/// Las capas superiores (HTTP, CLI, etc.) deberían mapear este error
/// a códigos de estado o mensajes de usuario.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("upstream unavailable: {0}")]
  UpstreamUnavailable(String),

  #[error("malformed upstream response: {0}")]
  UpstreamMalformed(String),

  #[error("search query must not be empty")]
  InvalidQuery,

  #[error("internal error: {0}")]
  Internal(String),
}

impl From<SourceError> for CoreError {
  fn from(err: SourceError) -> Self {
    match err {
      SourceError::Unavailable(msg) => CoreError::UpstreamUnavailable(msg),
      SourceError::Malformed(msg) => CoreError::UpstreamMalformed(msg),
    }
  }
}
