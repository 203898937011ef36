use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Rutas base del catálogo.
///
/// `KISETSU_BASE_DIR` fuerza una instalación portable (config y datos bajo
/// un mismo directorio); sin la variable se usan los directorios del sistema.
#[derive(Debug, Clone)]
pub struct KisetsuPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
}

impl KisetsuPaths {
  pub fn new() -> Result<Self, ConfigError> {
    let (base_dir, config_dir, data_dir);

    if let Ok(env_base) = std::env::var("KISETSU_BASE_DIR") {
      let base = PathBuf::from(env_base);
      base_dir = base.clone();
      config_dir = base.join("config");
      data_dir = base.join("data");
    } else {
      let proj_dirs = ProjectDirs::from("com", "kisetsu", "kisetsu").ok_or(ConfigError::Directories)?;
      base_dir = proj_dirs.config_dir().to_path_buf();
      config_dir = proj_dirs.config_dir().to_path_buf();
      data_dir = proj_dirs.data_dir().to_path_buf();
    }

    std::fs::create_dir_all(&config_dir)?;
    std::fs::create_dir_all(&data_dir)?;

    Ok(Self { base_dir, config_dir, data_dir })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("kisetsu.toml")
  }

  /// Ruta por defecto del archivo redb del catálogo.
  pub fn database_file(&self) -> PathBuf {
    self.data_dir.join("kisetsu.redb")
  }
}
