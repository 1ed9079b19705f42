use std::path::PathBuf;
use std::time::Duration;

use url::Url;

pub const ASSETS_DIR_VAR: &str = "ROOM_QUIZ_ASSETS_DIR";
pub const ANALYZING_DELAY_VAR: &str = "ROOM_QUIZ_ANALYZING_DELAY_MS";
pub const PLACEHOLDER_URL_VAR: &str = "ROOM_QUIZ_PLACEHOLDER_URL";

const DEFAULT_ASSETS_DIR: &str = "assets";
const DEFAULT_ANALYZING_DELAY_MS: u64 = 1000;
const DEFAULT_PLACEHOLDER_URL: &str = "https://placehold.co";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a number of milliseconds, got '{value}'")]
    InvalidDelay { var: &'static str, value: String },

    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Bot settings. The Telegram token itself is read by teloxide from `TELOXIDE_TOKEN`.
#[derive(Debug, Clone)]
pub struct Config {
    pub assets_dir: PathBuf,
    pub analyzing_delay: Duration,
    pub placeholder_base: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let assets_dir = lookup(ASSETS_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));

        let analyzing_delay = match lookup(ANALYZING_DELAY_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidDelay {
                    var: ANALYZING_DELAY_VAR,
                    value,
                })?,
            None => Duration::from_millis(DEFAULT_ANALYZING_DELAY_MS),
        };

        let placeholder = lookup(PLACEHOLDER_URL_VAR).unwrap_or_else(|| DEFAULT_PLACEHOLDER_URL.to_string());
        let placeholder_base = Url::parse(&placeholder).map_err(|source| ConfigError::InvalidUrl {
            var: PLACEHOLDER_URL_VAR,
            source,
        })?;

        Ok(Self {
            assets_dir,
            analyzing_delay,
            placeholder_base,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.analyzing_delay, Duration::from_secs(1));
        assert_eq!(config.placeholder_base.as_str(), "https://placehold.co/");
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = config_from(&[
            (ASSETS_DIR_VAR, "/srv/rooms"),
            (ANALYZING_DELAY_VAR, "250"),
            (PLACEHOLDER_URL_VAR, "http://localhost:8080"),
        ])
        .unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("/srv/rooms"));
        assert_eq!(config.analyzing_delay, Duration::from_millis(250));
        assert_eq!(config.placeholder_base.port(), Some(8080));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            config_from(&[(ANALYZING_DELAY_VAR, "soon")]),
            Err(ConfigError::InvalidDelay { .. })
        ));
        assert!(matches!(
            config_from(&[(PLACEHOLDER_URL_VAR, "not a url")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }
}
