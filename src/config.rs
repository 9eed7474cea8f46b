use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::i18n::Language;

const CONFIG_PATH_ENV_VAR: &str = "ONEPAGE_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("onepage").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".onepage.toml"));
    }

    locations
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub language: Language,
    /// Interval in milliseconds at which the current date is refreshed.
    pub tick_rate: u64,
    pub today_char: Option<char>,
    pub long_month_char: Option<char>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            language: Language::default(),
            tick_rate: 1000,
            today_char: Some('*'),
            long_month_char: Some('\''),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        Config::from_toml(&content).map_err(|e| {
            let msg = format!(
                "{}: {}",
                path.display(),
                e.message.as_deref().unwrap_or_default()
            );
            e.with_msg(&msg)
        })
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate.max(1))
    }
}

/// Loads `path` if given, otherwise the first existing file of the default
/// locations. Falls back to the built-in defaults when there is none.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        log::info!("Loading config from '{}'", path.display());
        return Config::from_file(path);
    }

    match find_configfile_locations().into_iter().find(|p| p.is_file()) {
        Some(found) => {
            log::info!("Loading config from '{}'", found.display());
            Config::from_file(&found)
        }
        None => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn fields_are_read() {
        let config = Config::from_toml(
            r#"
            language = "vi"
            tick_rate = 250
            today_char = "@"
            "#,
        )
        .unwrap();
        assert_eq!(config.language, Language::Vi);
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert_eq!(config.today_char, Some('@'));
        assert_eq!(config.long_month_char, Some('\''));
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = Config::from_toml("language = \"klingon\"").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(Config::from_toml("colour = \"blue\"").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = load_suitable_config(Some(Path::new("/nonexistent/onepage.toml"))).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::IOError(_)));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let path = env::temp_dir().join(format!("onepage-test-{}.toml", std::process::id()));
        fs::write(&path, "language = \"zh\"\n").unwrap();
        let config = load_suitable_config(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.language, Language::Zh);
    }
}
