//! Position seeding from config.toml
//!
//! This module provides functionality to load initial position definitions
//! from a TOML configuration file. The positions defined in config.toml are
//! used to seed the database on first run or when positions are missing.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of position definitions to seed
    pub positions: Vec<PositionConfig>,
}

/// Configuration for a single position
#[derive(Debug, Deserialize, Clone)]
pub struct PositionConfig {
    /// Name of the position
    pub name: String,
    /// Description shown on the job board
    pub description: String,
    /// Pay a trainer receives per training session
    pub trainer_pay: i64,
    /// Requirement lines attached to the position
    #[serde(default)]
    pub requirements: Vec<String>,
}

/// Loads position configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads position configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_position_config() {
        let toml_str = r#"
            [[positions]]
            name = "Bartender"
            description = "Runs the bar and keeps drinks flowing."
            trainer_pay = 50000
            requirements = ["Knows the drink menu", "Two trial shifts"]

            [[positions]]
            name = "Greeter"
            description = "First face guests see at the door."
            trainer_pay = 30000
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.positions.len(), 2);
        assert_eq!(config.positions[0].name, "Bartender");
        assert_eq!(config.positions[0].trainer_pay, 50_000);
        assert_eq!(config.positions[0].requirements.len(), 2);

        assert_eq!(config.positions[1].name, "Greeter");
        assert!(config.positions[1].requirements.is_empty());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = load_config("definitely/not/here.toml");
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }
}
