use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Settings file looked up in the home directory when no explicit path is
/// given on the command line.
const DEFAULT_FILE_NAME: &str = ".snmprec.json";

/// Top-level settings for a polling run.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Target device address
    #[serde(default = "default_ip")]
    pub ip: String,
    /// v2c community string
    #[serde(default = "default_community")]
    pub community: String,
    /// Scheduled-run settings
    #[serde(default)]
    pub cron: CronConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip: default_ip(),
            community: default_community(),
            cron: CronConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CronConfig {
    /// Output backend: stdout, file, or syslog
    #[serde(default = "default_save_via")]
    pub save_via: String,
    /// Destination path, required when `save_via` is file
    #[serde(default)]
    pub save_file: Option<PathBuf>,
    /// Identifier lists for the daily run
    #[serde(default)]
    pub day: DayConfig,
}

impl Default for CronConfig {
    fn default() -> Self {
        Self {
            save_via: default_save_via(),
            save_file: None,
            day: DayConfig::default(),
        }
    }
}

/// Ordered identifier lists, one per query kind. List order fixes the field
/// order of emitted lines.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayConfig {
    #[serde(default)]
    pub get: Vec<String>,
    #[serde(default)]
    pub getbulk: Vec<String>,
    #[serde(default)]
    pub bulkwalk: Vec<String>,
}

fn default_ip() -> String {
    "127.0.0.1".to_string()
}

fn default_community() -> String {
    "public".to_string()
}

fn default_save_via() -> String {
    "stdout".to_string()
}

/// Resolved output backend; exactly one per run.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkSelection {
    Stdout,
    File(PathBuf),
    Syslog,
}

impl Config {
    /// Load settings from `path`, or from `$HOME/.snmprec.json` when none is
    /// given. A missing default file yields the built-in defaults; an
    /// explicit path must exist and parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let Some(home) = dirs::home_dir() else {
                    return Ok(Config::default());
                };
                let default = home.join(DEFAULT_FILE_NAME);
                if !default.exists() {
                    return Ok(Config::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    /// Resolve the configured sink into a closed selection. An unrecognized
    /// `save_via` value is a configuration error, not a silent stdout run.
    pub fn sink(&self) -> Result<SinkSelection> {
        match self.cron.save_via.to_lowercase().as_str() {
            "stdout" => Ok(SinkSelection::Stdout),
            "file" => match &self.cron.save_file {
                Some(path) if !path.as_os_str().is_empty() => {
                    Ok(SinkSelection::File(path.clone()))
                }
                _ => Err(Error::Config(
                    "save_via is file but save_file is not set".to_string(),
                )),
            },
            "syslog" => Ok(SinkSelection::Syslog),
            other => Err(Error::Config(format!("unknown save_via value: {}", other))),
        }
    }
}
