use crate::catalog::kind::EntityKind;
use crate::catalog::season::Season;
use crate::errors::CoreError;

/// Contrato mínimo que el almacenamiento exige a un registro del catálogo.
///
/// La clave de almacenamiento es el ID en decimal, sin relleno: el orden
/// lexicográfico de las claves no coincide con el orden numérico cuando los
/// IDs mezclan cantidades de dígitos distintas.
pub trait Entity {
  /// Tipo de entidad; su discriminador nombra la partición.
  fn kind(&self) -> EntityKind;

  /// Clave bajo la que se guarda el registro.
  fn storage_key(&self) -> String;

  /// Bytes del registro en el formato de almacenamiento.
  fn encode(&self) -> Result<Vec<u8>, CoreError>;
}

impl Entity for Season {
  fn kind(&self) -> EntityKind {
    Season::kind(self)
  }

  fn storage_key(&self) -> String {
    self.id.to_string()
  }

  fn encode(&self) -> Result<Vec<u8>, CoreError> {
    Season::encode(self)
  }
}
