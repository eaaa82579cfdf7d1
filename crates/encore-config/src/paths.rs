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

/// Filesystem locations for Encore's configuration.
///
/// Everything the tracker caches lives in memory, so unlike a full media
/// library there is no data/cache tree here: one config dir is enough.
#[derive(Debug, Clone)]
pub struct EncorePaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
}

impl EncorePaths {
  pub fn new() -> Result<Self, ConfigError> {
    let (base_dir, config_dir);

    // ENCORE_BASE_DIR keeps the whole tree portable (tests, USB installs).
    if let Ok(env_base) = std::env::var("ENCORE_BASE_DIR") {
      let base = PathBuf::from(env_base);
      base_dir = base.clone();
      config_dir = base.join("config");
    } else {
      let proj_dirs = ProjectDirs::from("com", "encore", "encore").ok_or(ConfigError::Directories)?;
      base_dir = proj_dirs.config_dir().to_path_buf();
      config_dir = proj_dirs.config_dir().to_path_buf();
    }

    std::fs::create_dir_all(&config_dir)?;

    Ok(Self { base_dir, config_dir })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("encore.toml")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  struct EnvVarGuard {
    key: String,
    original: Option<String>,
  }

  impl EnvVarGuard {
    fn new(key: &str, value: &str) -> Self {
      let original = std::env::var(key).ok();
      unsafe { std::env::set_var(key, value) };
      EnvVarGuard { key: key.to_owned(), original }
    }
  }

  impl Drop for EnvVarGuard {
    fn drop(&mut self) {
      match &self.original {
        Some(val) => unsafe { std::env::set_var(&self.key, val) },
        None => unsafe { std::env::remove_var(&self.key) },
      }
    }
  }

  #[test]
  fn test_encore_base_dir_override() {
    let tmp = tempdir().unwrap();
    let _env = EnvVarGuard::new("ENCORE_BASE_DIR", tmp.path().to_str().unwrap());

    let paths = EncorePaths::new().unwrap();

    assert_eq!(paths.base_dir, tmp.path());
    assert_eq!(paths.config_dir, tmp.path().join("config"));
    assert!(paths.config_dir.exists());
    assert_eq!(paths.config_file(), tmp.path().join("config").join("encore.toml"));
  }
}
