use std::path::{Path, PathBuf};

use serde::Deserialize;

use fifths_types::{Mode, Pitch};

use crate::state::MusicalSettings;
use crate::Error;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

#[derive(Deserialize, Default)]
struct DefaultsConfig {
    tonic: Option<String>,
    mode: Option<String>,
}

#[derive(Deserialize, Default)]
struct LoggingConfig {
    verbose: Option<bool>,
}

pub struct Config {
    defaults: DefaultsConfig,
    logging: LoggingConfig,
}

impl Config {
    /// Embedded defaults, overridden field by field by the user config if present.
    ///
    /// Never fails: a missing, unreadable or malformed user file is logged and ignored.
    pub fn load() -> Self {
        Self::load_with_user_file(user_config_path().as_deref())
    }

    /// Like [`Config::load`], reading the user file from `path` instead.
    pub fn load_with_user_file(path: Option<&Path>) -> Self {
        let mut base = embedded();

        if let Some(path) = path {
            if path.exists() {
                match read_config_file(path) {
                    Ok(user) => merge(&mut base, user),
                    Err(e) => {
                        log::warn!(target: "config", "ignoring config {}: {}", path.display(), e)
                    }
                }
            }
        }

        Config {
            defaults: base.defaults,
            logging: base.logging,
        }
    }

    /// Embedded defaults overridden by the file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let mut base = embedded();
        merge(&mut base, read_config_file(path)?);
        Ok(Config {
            defaults: base.defaults,
            logging: base.logging,
        })
    }

    /// Parse a config from TOML text, with no embedded defaults underneath.
    pub fn from_toml_str(contents: &str) -> Result<Self, Error> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(Config {
            defaults: file.defaults,
            logging: file.logging,
        })
    }

    pub fn defaults(&self) -> MusicalSettings {
        let fallback = MusicalSettings::default();
        MusicalSettings {
            tonic: self
                .defaults
                .tonic
                .as_deref()
                .and_then(Pitch::from_name)
                .unwrap_or(fallback.tonic),
            mode: self
                .defaults
                .mode
                .as_deref()
                .and_then(Mode::from_name)
                .unwrap_or(fallback.mode),
        }
    }

    /// Whether the log file should record debug output.
    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }
}

fn embedded() -> ConfigFile {
    toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!(target: "config", "embedded config.toml is invalid: {}", e);
        ConfigFile::default()
    })
}

fn read_config_file(path: &Path) -> Result<ConfigFile, Error> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fifths").join("config.toml"))
}

fn merge(base: &mut ConfigFile, user: ConfigFile) {
    if user.defaults.tonic.is_some() {
        base.defaults.tonic = user.defaults.tonic;
    }
    if user.defaults.mode.is_some() {
        base.defaults.mode = user.defaults.mode;
    }
    if user.logging.verbose.is_some() {
        base.logging.verbose = user.logging.verbose;
    }
}
