use kisetsu_core::catalog::EntityKind;
use redb::TableDefinition;

/// Particiones del catálogo: una tabla por tipo de entidad, nombrada con su
/// discriminador. Clave: ID en decimal. Valor: bytes del codec de almacenamiento.
pub const SEASONS: TableDefinition<&str, &[u8]> = TableDefinition::new(EntityKind::Season.as_str());
pub const SINGERS: TableDefinition<&str, &[u8]> = TableDefinition::new(EntityKind::Singer.as_str());
pub const SONGS: TableDefinition<&str, &[u8]> = TableDefinition::new(EntityKind::Song.as_str());
pub const ALBUMS: TableDefinition<&str, &[u8]> = TableDefinition::new(EntityKind::Album.as_str());
