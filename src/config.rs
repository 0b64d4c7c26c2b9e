use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{PlaylistsError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Summary,
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Summary => write!(f, "summary"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PlaylistsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            other => Err(PlaylistsError::Config(format!(
                "unknown output format \"{other}\""
            ))),
        }
    }
}

/// On-disk form of the configuration; every key may be left out.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlaylistsConfigFile {
    format: Option<OutputFormat>,
    pretty: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaylistsConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl From<PlaylistsConfigFile> for PlaylistsConfig {
    fn from(file_config: PlaylistsConfigFile) -> Self {
        PlaylistsConfig {
            format: file_config.format.unwrap_or_default(),
            pretty: file_config.pretty.unwrap_or(false),
        }
    }
}

impl From<&PlaylistsConfig> for PlaylistsConfigFile {
    fn from(config: &PlaylistsConfig) -> Self {
        PlaylistsConfigFile {
            format: Some(config.format),
            pretty: Some(config.pretty),
        }
    }
}

impl PlaylistsConfig {
    pub fn parse(contents: &str) -> Result<PlaylistsConfig> {
        let file_config = serde_json::from_str::<PlaylistsConfigFile>(contents)
            .map_err(|err| PlaylistsError::Config(err.to_string()))?;
        Ok(file_config.into())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<PlaylistsConfig> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(PlaylistsConfig::default());
        }
        let contents = std::fs::read_to_string(path)?;
        PlaylistsConfig::parse(&contents)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file_config = PlaylistsConfigFile::from(self);
        std::fs::write(path, serde_json::to_string_pretty(&file_config)?)?;
        Ok(())
    }
}
