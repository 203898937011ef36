use serde::{Deserialize, Serialize};

use crate::catalog::ids::{AlbumId, SeasonId, SingerId, SongId};
use crate::catalog::kind::EntityKind;
use crate::errors::CoreError;

/// La Temporada (Season): agrupa obras y participantes de un periodo.
///
/// Las relaciones son referencias débiles por ID: la temporada no posee ni
/// valida los registros de cantante/canción/álbum a los que apunta. Un ID
/// colgante (apuntando a un registro borrado o inexistente) es representable
/// y es responsabilidad del llamador evitarlo.
///
/// Los nombres de campo serializados (`ID`, `Title`, `SingersID`, …) son el
/// contrato de la partición de almacenamiento; no cambiarlos sin migrar los
/// datos ya escritos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
  /// Identificador único de la temporada dentro del sistema.
  #[serde(rename = "ID")]
  pub id: SeasonId,

  /// Nombre visible, texto libre.
  #[serde(rename = "Title")]
  pub title: String,

  /// IDs de los cantantes asociados, en orden de primera inserción, sin duplicados.
  #[serde(rename = "SingersID")]
  pub singer_ids: Vec<SingerId>,

  /// IDs de las canciones asociadas.
  #[serde(rename = "SongsID")]
  pub song_ids: Vec<SongId>,

  /// IDs de los álbumes asociados.
  #[serde(rename = "AlbumsID")]
  pub album_ids: Vec<AlbumId>,
}

impl Season {
  /// Construye una temporada poblada tal cual con sus argumentos.
  ///
  /// No se deduplica la entrada: solo las operaciones `add_*` deduplican.
  pub fn new(
    id: SeasonId,
    title: impl Into<String>,
    singer_ids: Vec<SingerId>,
    song_ids: Vec<SongId>,
    album_ids: Vec<AlbumId>,
  ) -> Self {
    Season { id, title: title.into(), singer_ids, song_ids, album_ids }
  }

  /// Tipo de entidad de este registro.
  pub const fn kind(&self) -> EntityKind {
    EntityKind::Season
  }

  pub fn has_singer(&self, id: SingerId) -> bool {
    self.singer_ids.contains(&id)
  }

  pub fn has_song(&self, id: SongId) -> bool {
    self.song_ids.contains(&id)
  }

  pub fn has_album(&self, id: AlbumId) -> bool {
    self.album_ids.contains(&id)
  }

  /// Añade el ID solo si no estaba ya presente. Idempotente.
  pub fn add_singer_id(&mut self, id: SingerId) {
    if !self.has_singer(id) {
      self.singer_ids.push(id);
    }
  }

  pub fn add_song_id(&mut self, id: SongId) {
    if !self.has_song(id) {
      self.song_ids.push(id);
    }
  }

  pub fn add_album_id(&mut self, id: AlbumId) {
    if !self.has_album(id) {
      self.album_ids.push(id);
    }
  }

  /// Serializa el estado completo al formato de almacenamiento (JSON).
  pub fn encode(&self) -> Result<Vec<u8>, CoreError> {
    serde_json::to_vec(self).map_err(CoreError::Encode)
  }

  /// Reconstruye una temporada desde bytes producidos por [`Season::encode`].
  ///
  /// Invariante de ida y vuelta: `decode(encode(x))` es igual campo a campo
  /// a `x`, incluido el orden de las listas de relaciones.
  pub fn decode(bytes: &[u8]) -> Result<Season, CoreError> {
    serde_json::from_slice(bytes).map_err(CoreError::Decode)
  }
}
