use serde::{Deserialize, Serialize};

use crate::paths::ConfigError;
use crate::{CONFIG_BACKEND, ConfigBackend};

/// Sección `[api]`: prefijo de host con el que la capa HTTP construye
/// las URLs del formato API (sin barra final, p. ej. `http://localhost:8080`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
  pub host_prefix: String,
}

impl Default for ApiConfig {
  fn default() -> Self {
    ApiConfig { host_prefix: "http://localhost:8080".to_string() }
  }
}

impl ApiConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("api")?;
    CONFIG_BACKEND.save_section("api", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("api", self)
  }
}
