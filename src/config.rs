/// User configuration (config.toml)
///
/// The file lives in the platform config directory:
/// - Linux: ~/.config/folio/config.toml
/// - macOS: ~/Library/Application Support/folio/config.toml
/// - Windows: %APPDATA%\folio\config.toml
///
/// Every key is optional. Unknown keys are ignored.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::source::thumbnail::DEFAULT_THUMBNAIL_SIZE;

/// Color scheme of the window
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn theme(self) -> iced::Theme {
        match self {
            ThemeChoice::Dark => iced::Theme::Dark,
            ThemeChoice::Light => iced::Theme::Light,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Project document: a path or an http(s) URL
    pub source: Option<String>,
    pub theme: ThemeChoice,
    /// Longest edge of generated thumbnails, in pixels
    pub thumbnail_size: u32,
    /// tracing filter, e.g. "debug" or "folio=trace"
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            theme: ThemeChoice::default(),
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            log_level: None,
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
    }

    /// Read a config file. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        };

        let mut config: Config = toml::from_str(&text).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            source: err,
        })?;
        if config.thumbnail_size == 0 {
            config.thumbnail_size = DEFAULT_THUMBNAIL_SIZE;
        }
        Ok(config)
    }

    /// Read the config, falling back to defaults on any problem.
    ///
    /// Returns the error alongside so it can be logged once logging is up.
    pub fn load_or_default(path: Option<&Path>) -> (Self, Option<ConfigError>) {
        let Some(path) = path else {
            return (Self::default(), None);
        };
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}
