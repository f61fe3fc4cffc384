use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, VersioningError};
use crate::store;

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "versioning.toml";

/// Name of the user-level configuration file inside the config directory.
pub const USER_CONFIG_FILE_NAME: &str = ".versioning.toml";

/// Represents the complete configuration for versioning.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Version file used when `--file` is not given
    #[serde(default)]
    pub file: Option<PathBuf>,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Never write the bumped version back
    #[serde(default)]
    pub dry_run: bool,
}

impl Config {
    /// Resolves the version file path: an explicit path wins, then the
    /// configured one, then `./VERSION`.
    pub fn version_file(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.file.clone())
            .unwrap_or_else(|| store::version_file("."))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Looks for configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versioning.toml` in current directory
/// 3. `.versioning.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// An explicit path that cannot be read is an error; the implicit locations
/// are simply skipped when absent.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    load_config_from(config_path, Path::new("."), dirs::config_dir().as_deref())
}

/// Same as [`load_config`] with the search locations supplied by the caller.
pub fn load_config_from(
    config_path: Option<&Path>,
    working_dir: &Path,
    user_config_dir: Option<&Path>,
) -> Result<Config> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => {
            let local = working_dir.join(CONFIG_FILE_NAME);
            let user = user_config_dir.map(|dir| dir.join(USER_CONFIG_FILE_NAME));
            if local.is_file() {
                local
            } else if let Some(user) = user.filter(|p| p.is_file()) {
                user
            } else {
                return Ok(Config::default());
            }
        }
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        VersioningError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    toml::from_str(&config_str)
        .map_err(|e| VersioningError::config(format!("invalid {}: {}", path.display(), e)))
}
