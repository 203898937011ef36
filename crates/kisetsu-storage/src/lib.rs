pub mod config;
pub mod tables;

use std::path::Path;

use redb::{Database, ReadableTable, Table, TableError};
use thiserror::Error;
use tracing::{debug, warn};

use kisetsu_core::CoreError;
use kisetsu_core::catalog::{Season, SeasonId};
use kisetsu_core::ports::Entity;

use crate::config::StorageConfig;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("codec error: {0}")]
  Codec(#[from] CoreError),
  #[error("database error: {0}")]
  Database(#[from] redb::DatabaseError),
  #[error("transaction error: {0}")]
  Transaction(#[from] redb::TransactionError),
  #[error("table error: {0}")]
  Table(#[from] redb::TableError),
  #[error("storage error: {0}")]
  Storage(#[from] redb::StorageError),
  #[error("commit error: {0}")]
  Commit(#[from] redb::CommitError),
  #[error("config error: {0}")]
  Config(#[from] kisetsu_config::ConfigError),
  #[error(transparent)]
  Batch(#[from] BatchWriteError),
}

/// Fallo de un registro individual dentro de una escritura por lotes.
#[derive(Debug, Error)]
pub enum EntityWriteError {
  #[error("encode: {0}")]
  Codec(#[from] CoreError),
  #[error("put: {0}")]
  Put(#[from] redb::StorageError),
}

/// Una escritura por lotes se detuvo en el primer fallo.
///
/// `written` enumera las claves ya escritas antes del fallo; es el llamador
/// quien decide si el proceso debe abortar.
#[derive(Debug, Error)]
#[error("batch write aborted at key {failed_key} ({} written before failure): {source}", .written.len())]
pub struct BatchWriteError {
  pub written: Vec<String>,
  pub failed_key: String,
  #[source]
  pub source: EntityWriteError,
}

/// Escribe un lote de registros en una tabla ya abierta dentro de una
/// transacción de escritura del llamador.
///
/// Se detiene en el primer fallo de codificación o de escritura; lo escrito
/// hasta ese punto queda en la transacción, sin deshacer.
pub fn write_to_table<E: Entity>(
  table: &mut Table<'_, &str, &[u8]>,
  entities: &[E],
) -> Result<(), BatchWriteError> {
  let mut written = Vec::with_capacity(entities.len());
  for entity in entities {
    let key = entity.storage_key();
    let bytes = match entity.encode() {
      Ok(b) => b,
      Err(e) => {
        return Err(BatchWriteError { written, failed_key: key, source: e.into() });
      }
    };
    if let Err(e) = table.insert(key.as_str(), bytes.as_slice()) {
      return Err(BatchWriteError { written, failed_key: key, source: e.into() });
    }
    written.push(key);
  }
  Ok(())
}

/// Almacén del catálogo sobre redb.
pub struct CatalogStore {
  db: Database,
}

impl CatalogStore {
  pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
    let path = path.as_ref();
    let db = Database::create(path)?;
    debug!(path = %path.display(), "opened catalog store");
    Ok(CatalogStore { db })
  }

  /// Abre el almacén en la ruta de la sección `[storage]` de la configuración.
  pub fn open_default() -> Result<Self, StoreError> {
    let cfg = StorageConfig::load()?;
    Self::open(cfg.db_path)
  }

  /// Escribe un lote de temporadas en su partición, cada una bajo su ID decimal.
  ///
  /// Ante un fallo a mitad del lote se confirma lo ya escrito y se devuelve
  /// [`BatchWriteError`]; no hay reversión de los registros anteriores.
  pub fn write_seasons(&self, seasons: &[Season]) -> Result<(), StoreError> {
    let txn = self.db.begin_write()?;
    let outcome = {
      let mut table = txn.open_table(tables::SEASONS)?;
      write_to_table(&mut table, seasons)
    };
    txn.commit()?;

    match outcome {
      Ok(()) => {
        debug!(count = seasons.len(), "seasons written");
        Ok(())
      }
      Err(e) => {
        warn!(failed_key = %e.failed_key, written = e.written.len(), "batch write aborted");
        Err(e.into())
      }
    }
  }

  pub fn find_season(&self, id: SeasonId) -> Result<Option<Season>, StoreError> {
    let txn = self.db.begin_read()?;
    let table = match txn.open_table(tables::SEASONS) {
      Ok(t) => t,
      Err(TableError::TableDoesNotExist(_)) => return Ok(None),
      Err(e) => return Err(e.into()),
    };

    let key = id.to_string();
    let Some(guard) = table.get(key.as_str())? else {
      return Ok(None);
    };
    let season = Season::decode(guard.value())?;
    Ok(Some(season))
  }

  /// Devuelve todas las temporadas en el orden de iteración del almacén.
  ///
  /// Ese orden es lexicográfico por clave decimal, no numérico por ID:
  /// `"10"` se itera antes que `"2"`.
  pub fn list_seasons(&self) -> Result<Vec<Season>, StoreError> {
    let txn = self.db.begin_read()?;
    let table = match txn.open_table(tables::SEASONS) {
      Ok(t) => t,
      Err(TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
      Err(e) => return Err(e.into()),
    };

    let mut seasons = Vec::new();
    for item in table.iter()? {
      let (_, value) = item?;
      seasons.push(Season::decode(value.value())?);
    }
    Ok(seasons)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use kisetsu_core::catalog::{AlbumId, EntityKind, SingerId, SongId};
  use tempfile::TempDir;

  fn temp_store() -> (TempDir, CatalogStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = CatalogStore::open(dir.path().join("catalog.redb")).unwrap();
    (dir, store)
  }

  fn season(id: u64) -> Season {
    Season::new(
      SeasonId::new(id),
      format!("season {id}"),
      vec![SingerId::new(id + 100)],
      vec![SongId::new(id + 200)],
      vec![AlbumId::new(id + 300)],
    )
  }

  #[test]
  fn test_batch_write_and_read_back() {
    let (_dir, store) = temp_store();
    let seasons = vec![season(1), season(2), season(3)];

    store.write_seasons(&seasons).unwrap();

    for s in &seasons {
      let found = store.find_season(s.id).unwrap().unwrap();
      assert_eq!(&found, s);
    }
    assert_eq!(store.list_seasons().unwrap().len(), 3);
  }

  #[test]
  fn test_find_missing_season_is_none() {
    let (_dir, store) = temp_store();
    // Tabla inexistente todavía: ninguna escritura previa.
    assert!(store.find_season(SeasonId::new(42)).unwrap().is_none());

    store.write_seasons(&[season(1)]).unwrap();
    assert!(store.find_season(SeasonId::new(42)).unwrap().is_none());
  }

  #[test]
  fn test_rewrite_overwrites_same_key() {
    let (_dir, store) = temp_store();
    let mut s = season(5);
    store.write_seasons(std::slice::from_ref(&s)).unwrap();

    s.title = "renamed".to_string();
    store.write_seasons(std::slice::from_ref(&s)).unwrap();

    let found = store.find_season(s.id).unwrap().unwrap();
    assert_eq!(found.title, "renamed");
    assert_eq!(store.list_seasons().unwrap().len(), 1);
  }

  #[test]
  fn test_iteration_order_is_lexicographic_by_key() {
    let (_dir, store) = temp_store();
    store.write_seasons(&[season(2), season(10)]).unwrap();

    let listed = store.list_seasons().unwrap();
    let ids: Vec<u64> = listed.iter().map(|s| s.id.as_u64()).collect();
    // "10" < "2" por orden de cadenas: el orden de claves no es numérico.
    assert_eq!(ids, vec![10, 2]);
  }

  struct FlakyEntity {
    inner: Season,
    fail: bool,
  }

  impl Entity for FlakyEntity {
    fn kind(&self) -> EntityKind {
      self.inner.kind()
    }

    fn storage_key(&self) -> String {
      self.inner.id.to_string()
    }

    fn encode(&self) -> Result<Vec<u8>, CoreError> {
      if self.fail {
        Err(CoreError::Encode(serde_json::from_str::<u32>("boom").unwrap_err()))
      } else {
        self.inner.encode()
      }
    }
  }

  #[test]
  fn test_batch_halts_at_first_encode_failure() {
    let (_dir, store) = temp_store();
    let batch = vec![
      FlakyEntity { inner: season(1), fail: false },
      FlakyEntity { inner: season(2), fail: true },
      FlakyEntity { inner: season(3), fail: false },
    ];

    let txn = store.db.begin_write().unwrap();
    let err = {
      let mut table = txn.open_table(tables::SEASONS).unwrap();
      write_to_table(&mut table, &batch).unwrap_err()
    };
    txn.commit().unwrap();

    assert_eq!(err.written, vec!["1".to_string()]);
    assert_eq!(err.failed_key, "2");
    assert!(matches!(err.source, EntityWriteError::Codec(_)));

    // Lo anterior al fallo persiste; lo posterior nunca se escribió.
    assert!(store.find_season(SeasonId::new(1)).unwrap().is_some());
    assert!(store.find_season(SeasonId::new(2)).unwrap().is_none());
    assert!(store.find_season(SeasonId::new(3)).unwrap().is_none());
  }
}
