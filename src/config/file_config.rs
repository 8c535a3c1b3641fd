use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Settings as they may appear in a YAML file; every key is optional
///
/// Unknown keys are ignored so one file can be shared with other services.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    pub postgres_host: Option<String>,
    pub postgres_port: Option<u16>,
    pub postgres_user: Option<String>,
    pub postgres_db: Option<String>,
    pub postgres_password: Option<String>,
    pub bot_token: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file() {
        let config = FileConfig::from_yaml("postgres_host: db.internal\npostgres_port: 6432\n").unwrap();
        assert_eq!(config.postgres_host.as_deref(), Some("db.internal"));
        assert_eq!(config.postgres_port, Some(6432));
        assert_eq!(config.postgres_user, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = FileConfig::from_yaml("postgres_db: videos\nredis_url: redis://x\n").unwrap();
        assert_eq!(config.postgres_db.as_deref(), Some("videos"));
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(FileConfig::from_yaml("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_bad_port_is_an_error() {
        assert!(FileConfig::from_yaml("postgres_port: not-a-port\n").is_err());
    }
}
