use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dialbook_core::InputFormat;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const APP_DIR: &str = "dialbook";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub input_format: InputFormat,
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    input_format: Option<InputFormat>,
    output_format: Option<OutputFormat>,
}

/// Loads the config file, falling back to defaults when the implicit location
/// has no file. An explicitly requested path must exist.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(err @ (ConfigError::MissingHomeDir | ConfigError::InvalidConfigPath(_)))
            if !required =>
        {
            debug!(error = %err, "config unavailable");
            return Ok(AppConfig::default());
        }
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => {
            debug!(path = %path.display(), "config resolved");
            Ok(config)
        }
        None => {
            debug!(path = %path.display(), "config missing, using defaults");
            Ok(AppConfig::default())
        }
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)))
}

fn merge_config(parsed: ConfigFile) -> AppConfig {
    let mut config = AppConfig::default();
    if let Some(format) = parsed.input_format {
        config.input_format = format;
    }
    if let Some(format) = parsed.output_format {
        config.output_format = format;
    }
    config
}
