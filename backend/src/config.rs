//! Runtime settings, read from `APPBUNNY_*` environment variables.
//!
//! | variable             | default             |
//! |----------------------|---------------------|
//! | `APPBUNNY_HOST`      | `127.0.0.1`         |
//! | `APPBUNNY_PORT`      | `8080`              |
//! | `APPBUNNY_DATABASE`  | `appbunny.sqlite`   |
//! | `APPBUNNY_COPY_URL`  | `/templates/copy/`  |

use std::path::PathBuf;

const PREFIX: &str = "APPBUNNY_";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a port number, got '{value}'")]
    InvalidPort { key: String, value: String },

    #[error("{key} must not be empty")]
    Empty { key: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    /// Where the "copy templates" action sends the operator.
    pub copy_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from any key lookup, so tests need not touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str, default: &str| -> Result<String, ConfigError> {
            let key = format!("{PREFIX}{name}");
            match lookup(&key) {
                Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { key }),
                Some(value) => Ok(value.trim().to_string()),
                None => Ok(default.to_string()),
            }
        };

        let port_raw = read("PORT", "8080")?;
        let port = port_raw.parse().map_err(|_| ConfigError::InvalidPort {
            key: format!("{PREFIX}PORT"),
            value: port_raw.clone(),
        })?;

        Ok(Self {
            host: read("HOST", "127.0.0.1")?,
            port,
            database_path: PathBuf::from(read("DATABASE", "appbunny.sqlite")?),
            copy_url: read("COPY_URL", "/templates/copy/")?,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 8080));
        assert_eq!(config.database_path, PathBuf::from("appbunny.sqlite"));
        assert_eq!(config.copy_url, "/templates/copy/");
    }

    #[test]
    fn values_are_read_with_prefix() {
        let config = Config::from_lookup(lookup(&[
            ("APPBUNNY_PORT", "9000"),
            ("APPBUNNY_DATABASE", "/var/lib/appbunny/db.sqlite"),
            ("APPBUNNY_COPY_URL", "https://admin.example.com/copy/"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_path, PathBuf::from("/var/lib/appbunny/db.sqlite"));
        assert_eq!(config.copy_url, "https://admin.example.com/copy/");
    }

    #[test]
    fn bad_port_is_reported() {
        let err = Config::from_lookup(lookup(&[("APPBUNNY_PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidPort {
                key: "APPBUNNY_PORT".to_string(),
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn blank_value_is_reported() {
        let err = Config::from_lookup(lookup(&[("APPBUNNY_HOST", " ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty { key: "APPBUNNY_HOST".to_string() });
    }
}
