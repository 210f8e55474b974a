//! Reading the configuration file and seeding it on first run.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

use super::app_config::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Failures that stop configuration from loading.
///
/// A malformed file is not one of them: it falls back to defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform reports no per-user config directory.
    #[error("no per-user configuration directory on this platform")]
    NoConfigDir,
    /// Reading the file or writing the defaults failed.
    #[error("configuration file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The defaults could not be rendered as TOML.
    #[error("could not render default configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Location of `config.toml` and the logic to read it.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Store in the platform config directory (`~/.config/slidedeck` on Linux).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] when the platform has none.
    pub fn new() -> Result<Self, ConfigError> {
        AppConfig::default_config_dir()
            .map(Self::at)
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Store rooted at `dir`.
    #[must_use]
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File read by [`ConfigStore::load_config`].
    #[must_use]
    pub fn config_path(&self, path_override: Option<&Path>) -> PathBuf {
        path_override.map_or_else(|| self.dir.join(CONFIG_FILE_NAME), Path::to_path_buf)
    }

    /// Loads the configuration.
    ///
    /// A missing file is created with the defaults. A file that does not
    /// parse is left untouched and the defaults are used for this run.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the defaults
    /// cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = self.config_path(path_override);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "No configuration file, writing defaults");
                let config = AppConfig::default();
                write_config(&path, &config)?;
                return Ok(config);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(toml::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Malformed configuration, using defaults");
            AppConfig::default()
        }))
    }
}

/// Writes through a temporary file in the same directory, then renames.
fn write_config(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let rendered = toml::to_string_pretty(config)?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(rendered.as_bytes())?;
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}
