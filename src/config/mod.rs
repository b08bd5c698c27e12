//! Configuration loading and management

use crate::core::item::MenuItem;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Validation rules for candidate menu items
///
/// The defaults describe the loose deployment: only the required-field
/// checks apply and any price that binds is accepted. [`ValidationRules::strict`]
/// matches the stricter deployment with length and price bounds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Maximum name length in characters, unbounded when absent
    pub max_name_length: Option<usize>,

    /// Maximum order-code length in characters, unbounded when absent
    pub max_code_length: Option<usize>,

    /// Maximum price, unbounded when absent
    pub max_price: Option<i64>,

    /// Reject prices at or below zero
    pub require_positive_price: bool,
}

impl ValidationRules {
    /// The strict rule set: bounded lengths and prices, positive prices only
    pub fn strict() -> Self {
        Self {
            max_name_length: Some(100),
            max_code_length: Some(50),
            max_price: Some(1_000_000),
            require_positive_price: true,
        }
    }
}

/// Complete configuration for the menu service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// TCP port the HTTP server binds to
    pub port: u16,

    /// Result-size bound used when the `limit` query parameter is absent
    pub default_limit: usize,

    /// Validation rules applied to created and updated items
    pub validation: ValidationRules,

    /// Items the collection starts with at process start
    pub seed: Vec<MenuItem>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            default_limit: 100,
            validation: ValidationRules::default(),
            seed: vec![
                MenuItem::new("bakmie", "bakmie", 12000),
                MenuItem::new("bakso", "bakso", 8000),
            ],
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Address string for the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();

        assert_eq!(config.port, 8080);
        assert_eq!(config.default_limit, 100);
        assert_eq!(config.seed.len(), 2);
        assert!(config.validation.max_price.is_none());
        assert!(!config.validation.require_positive_price);
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config = ServiceConfig::from_yaml_str("port: 2000\n").unwrap();

        assert_eq!(config.port, 2000);
        assert_eq!(config.default_limit, 100);
        assert_eq!(config.seed.len(), 2);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = ServiceConfig {
            validation: ValidationRules::strict(),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = ServiceConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.port, config.port);
        assert_eq!(parsed.validation.max_price, Some(1_000_000));
        assert!(parsed.validation.require_positive_price);
    }
}
