use serde::Serialize;

use crate::catalog::kind::EntityKind;
use crate::catalog::season::Season;

/// Representación API de una temporada.
///
/// Transformación de solo ida: existe para la capa HTTP y no hay
/// decodificación de vuelta hacia [`Season`]. Las relaciones se exponen como
/// URLs completamente cualificadas, en el mismo orden que las listas de IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonApi {
  pub id: u64,
  pub title: String,
  pub albums: Vec<String>,
  pub songs: Vec<String>,
  pub singers: Vec<String>,
  pub url: String,
}

/// URL canónica de un recurso: `<host_prefix>/<kind>s/<id>/`.
pub fn resource_url(host_prefix: &str, kind: EntityKind, id: u64) -> String {
  format!("{host_prefix}/{}/{id}/", kind.url_segment())
}

impl Season {
  /// Construye la representación API con el prefijo de host dado.
  ///
  /// Listas de relaciones vacías producen arreglos vacíos, nunca `null`.
  pub fn to_api(&self, host_prefix: &str) -> SeasonApi {
    SeasonApi {
      id: self.id.as_u64(),
      title: self.title.clone(),
      albums: self
        .album_ids
        .iter()
        .map(|id| resource_url(host_prefix, EntityKind::Album, id.as_u64()))
        .collect(),
      songs: self
        .song_ids
        .iter()
        .map(|id| resource_url(host_prefix, EntityKind::Song, id.as_u64()))
        .collect(),
      singers: self
        .singer_ids
        .iter()
        .map(|id| resource_url(host_prefix, EntityKind::Singer, id.as_u64()))
        .collect(),
      url: resource_url(host_prefix, self.kind(), self.id.as_u64()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::ids::{AlbumId, SeasonId, SingerId, SongId};

  #[test]
  fn test_resource_url_shape() {
    assert_eq!(resource_url("http://h", EntityKind::Season, 7), "http://h/seasons/7/");
    assert_eq!(resource_url("http://h", EntityKind::Singer, 12), "http://h/singers/12/");
  }

  #[test]
  fn test_api_urls_follow_relationship_order() {
    let season = Season::new(
      SeasonId::new(7),
      "Spring 2024",
      vec![SingerId::new(1)],
      vec![SongId::new(5), SongId::new(2)],
      vec![AlbumId::new(3), AlbumId::new(9)],
    );

    let api = season.to_api("http://h");

    assert_eq!(api.id, 7);
    assert_eq!(api.title, "Spring 2024");
    assert_eq!(api.url, "http://h/seasons/7/");
    assert_eq!(api.albums, vec!["http://h/albums/3/", "http://h/albums/9/"]);
    assert_eq!(api.songs, vec!["http://h/songs/5/", "http://h/songs/2/"]);
    assert_eq!(api.singers, vec!["http://h/singers/1/"]);
  }

  #[test]
  fn test_empty_relationships_serialize_as_empty_arrays() {
    let season = Season::new(SeasonId::new(1), "empty", vec![], vec![], vec![]);
    let api = season.to_api("http://h");

    let value = serde_json::to_value(&api).unwrap();
    assert_eq!(value["albums"], serde_json::json!([]));
    assert_eq!(value["songs"], serde_json::json!([]));
    assert_eq!(value["singers"], serde_json::json!([]));
    assert_eq!(value["url"], "http://h/seasons/1/");
  }

  #[test]
  fn test_api_json_field_names() {
    let season = Season::new(SeasonId::new(2), "t", vec![], vec![], vec![]);
    let value = serde_json::to_value(season.to_api("http://h")).unwrap();
    let obj = value.as_object().unwrap();
    for key in ["id", "title", "albums", "songs", "singers", "url"] {
      assert!(obj.contains_key(key), "missing field {key}");
    }
  }
}
