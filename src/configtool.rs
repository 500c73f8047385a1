//  ____  ____                  ____
// |  _ \|  _ \ __ _ ___ ___   / ___| ___ _ __
// | |_) | |_) / _` / __/ __| | |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \ | |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-07
// Version : 0.1.0
// License : Mulan PSL v2
//
// Saved generation defaults

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use dirs::config_dir;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    ConfigDirError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::JsonError(e) => write!(f, "JSON error: {}", e),
            ConfigError::ConfigDirError(msg) => write!(f, "Config directory error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Saved defaults for the `gen` command. Preferences only; generated
/// passwords are never written anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenDefaults {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
}

impl Default for GenDefaults {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
            exclude_similar: false,
        }
    }
}

impl GenDefaults {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&defaults_path()?)
    }

    /// Missing file means the user never saved anything; fall back to the
    /// built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = fs::File::open(path).map_err(ConfigError::IoError)?;
        serde_json::from_reader(file).map_err(ConfigError::JsonError)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&defaults_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::IoError)?;
        }
        let file = fs::File::create(path).map_err(ConfigError::IoError)?;
        serde_json::to_writer_pretty(file, self).map_err(ConfigError::JsonError)
    }
}

pub fn defaults_path() -> Result<PathBuf, ConfigError> {
    let dir = config_dir().ok_or_else(|| {
        ConfigError::ConfigDirError("Could not determine config directory".to_string())
    })?;
    Ok(dir.join("rpassgen").join("defaults.json"))
}
