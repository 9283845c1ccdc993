// SPDX-License-Identifier: MIT

//! Poll configuration loading
//!
//! Reads the product catalog and sampling options from a YAML file. Every
//! field is optional; an absent product list falls back to the default AWS
//! catalog.

use crate::catalog::{ProductCatalog, ProductSpec};
use crate::error::NimbusError;
use crate::plan::ReadOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk poll configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PollConfig {
    #[serde(default)]
    pub products: Option<Vec<ProductSpec>>,
    #[serde(default)]
    pub period: Option<u32>,
    #[serde(default)]
    pub statistics: Option<Vec<String>>,
}

impl PollConfig {
    /// Load a poll configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, NimbusError> {
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse a poll configuration from a YAML string.
    pub fn parse_yaml(content: &str) -> Result<Self, NimbusError> {
        let config: PollConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn catalog(&self) -> ProductCatalog {
        match &self.products {
            Some(products) => ProductCatalog::new(products.clone()),
            None => ProductCatalog::aws_default(),
        }
    }

    pub fn read_options(&self) -> ReadOptions {
        let defaults = ReadOptions::default();
        ReadOptions {
            period: self.period.unwrap_or(defaults.period),
            statistics: self.statistics.clone().unwrap_or(defaults.statistics),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
products:
  - name: EC2
    dimension: InstanceId
  - name: EBS
    dimension: VolumeId
period: 300
statistics:
  - Average
  - Maximum
"#;
        let config = PollConfig::parse_yaml(yaml).unwrap();
        let catalog = config.catalog();
        assert_eq!(catalog.names(), vec!["EC2", "EBS"]);

        let options = config.read_options();
        assert_eq!(options.period, 300);
        assert_eq!(options.statistics, vec!["Average", "Maximum"]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PollConfig::parse_yaml("{}").unwrap();
        assert_eq!(config.catalog(), ProductCatalog::aws_default());
        assert_eq!(config.read_options(), ReadOptions::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = PollConfig::parse_yaml("frequency: 5");
        assert!(result.is_err());
    }
}
