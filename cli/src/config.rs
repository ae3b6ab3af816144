// SPDX-FileCopyrightText: 2026 roteiro contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use roteiro_core::{APP_NAME, Locale};

const ROTEIRO_CONFIG_ENV: &str = "ROTEIRO_CONFIG";

/// Configuration for the roteiro CLI.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display language for calendars and timelines.
    pub locale: Locale,

    /// Where the local trip store lives. Defaults to the user data dir.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Resolve and parse the configuration: explicit `--config` path, then
    /// the `ROTEIRO_CONFIG` environment variable, then
    /// `<config dir>/roteiro/config.toml`. A missing default file is not an
    /// error; the defaults apply.
    pub fn parse(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
        let path = if let Some(path) = path {
            path
        } else if let Ok(env_path) = std::env::var(ROTEIRO_CONFIG_ENV) {
            PathBuf::from(env_path)
        } else {
            let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
            if !config.exists() {
                tracing::debug!("no config at {}, using defaults", config.display());
                return Ok(Config::default());
            }
            config
        };

        fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
            .parse()
    }

    /// Directory holding the local trip store.
    pub fn data_dir(&self) -> Result<PathBuf, Box<dyn Error>> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(get_data_dir()?.join(APP_NAME)),
        }
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn get_data_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let data_dir = xdg::BaseDirectories::new().get_data_home();
    #[cfg(windows)]
    let data_dir = dirs::data_dir();
    data_dir.ok_or_else(|| "User-specific data directory not found".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_and_data_dir() {
        let config: Config = "locale = \"en\"\ndata_dir = \"/tmp/roteiro\""
            .parse()
            .unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/roteiro")));
    }

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config.locale, Locale::PtBr);
        assert_eq!(config.data_dir, None);
    }
}
