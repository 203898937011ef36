use thiserror::Error;

/// Error genérico del núcleo del catálogo.
///
/// Las capas superiores (HTTP, almacenamiento, CLI) deberían mapear este
/// error a respuestas de usuario o a sus propios tipos de error.
#[derive(Debug, Error)]
pub enum CoreError {
  /// El valor en memoria no pudo serializarse al formato de almacenamiento.
  #[error("encode error: {0}")]
  Encode(#[source] serde_json::Error),

  /// Los bytes leídos del almacenamiento no tienen la forma esperada.
  /// No se intenta una decodificación parcial.
  #[error("decode error: {0}")]
  Decode(#[source] serde_json::Error),
}
