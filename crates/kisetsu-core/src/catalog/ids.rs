use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador único de una temporada (`Season`).
///
/// Entero no negativo, estable durante toda la vida del registro: se usa
/// (en decimal) como clave de almacenamiento y como segmento de URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonId(u64);

impl SeasonId {
  pub const fn new(id: u64) -> Self {
    SeasonId(id)
  }

  /// Devuelve el entero interno.
  pub const fn as_u64(self) -> u64 {
    self.0
  }
}

impl From<u64> for SeasonId {
  fn from(id: u64) -> Self {
    SeasonId(id)
  }
}

impl From<SeasonId> for u64 {
  fn from(id: SeasonId) -> Self {
    id.0
  }
}

impl fmt::Display for SeasonId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Referencia débil a un cantante: solo nombra por ID, sin garantía de
/// existencia del registro referenciado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SingerId(u64);

impl SingerId {
  pub const fn new(id: u64) -> Self {
    SingerId(id)
  }

  pub const fn as_u64(self) -> u64 {
    self.0
  }
}

impl From<u64> for SingerId {
  fn from(id: u64) -> Self {
    SingerId(id)
  }
}

impl From<SingerId> for u64 {
  fn from(id: SingerId) -> Self {
    id.0
  }
}

impl fmt::Display for SingerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Referencia débil a una canción.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongId(u64);

impl SongId {
  pub const fn new(id: u64) -> Self {
    SongId(id)
  }

  pub const fn as_u64(self) -> u64 {
    self.0
  }
}

impl From<u64> for SongId {
  fn from(id: u64) -> Self {
    SongId(id)
  }
}

impl From<SongId> for u64 {
  fn from(id: SongId) -> Self {
    id.0
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Referencia débil a un álbum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlbumId(u64);

impl AlbumId {
  pub const fn new(id: u64) -> Self {
    AlbumId(id)
  }

  pub const fn as_u64(self) -> u64 {
    self.0
  }
}

impl From<u64> for AlbumId {
  fn from(id: u64) -> Self {
    AlbumId(id)
  }
}

impl From<AlbumId> for u64 {
  fn from(id: AlbumId) -> Self {
    id.0
  }
}

impl fmt::Display for AlbumId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
