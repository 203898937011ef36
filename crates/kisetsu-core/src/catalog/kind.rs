use serde::{Deserialize, Serialize};
use std::fmt;

/// Tipos de entidad del catálogo.
///
/// Cada variante lleva asociado su discriminador fijo, que se usa tal cual
/// como nombre de partición en el almacenamiento y, pluralizado, como
/// segmento de ruta en las URLs del formato API. Pasar el tipo de forma
/// explícita evita el acoplamiento por constantes sueltas de texto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
  Season,
  Singer,
  Song,
  Album,
}

impl EntityKind {
  /// Discriminador fijo de este tipo de entidad.
  pub const fn as_str(self) -> &'static str {
    match self {
      EntityKind::Season => "season",
      EntityKind::Singer => "singer",
      EntityKind::Song => "song",
      EntityKind::Album => "album",
    }
  }

  /// Segmento de URL: el discriminador pluralizado (`seasons`, `albums`, …).
  pub fn url_segment(self) -> String {
    format!("{}s", self.as_str())
  }
}

impl fmt::Display for EntityKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_discriminators_are_fixed() {
    assert_eq!(EntityKind::Season.as_str(), "season");
    assert_eq!(EntityKind::Singer.as_str(), "singer");
    assert_eq!(EntityKind::Song.as_str(), "song");
    assert_eq!(EntityKind::Album.as_str(), "album");
  }

  #[test]
  fn test_url_segment_is_pluralized() {
    assert_eq!(EntityKind::Season.url_segment(), "seasons");
    assert_eq!(EntityKind::Album.url_segment(), "albums");
  }
}
