// SPDX-License-Identifier: MIT

//! Fetch-plan construction
//!
//! Turns compiled conditions plus the product catalog into concrete fetch
//! targets for a poller: one target per condition, with the provider
//! dimension name attached and the sampling options carried along.

use crate::catalog::ProductCatalog;
use crate::condition::Condition;
use crate::error::NimbusError;
use serde::{Deserialize, Serialize};

fn default_period() -> u32 {
    60
}

fn default_statistics() -> Vec<String> {
    vec!["Average".to_string()]
}

/// Sampling options for a read. Unknown options are rejected at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadOptions {
    /// Sampling period in seconds
    #[serde(default = "default_period")]
    pub period: u32,
    /// Statistics to fetch per metric
    #[serde(default = "default_statistics")]
    pub statistics: Vec<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            period: default_period(),
            statistics: default_statistics(),
        }
    }
}

/// One unit of polling work: a product, its dimension name, and the item
/// and metric restrictions (empty = all).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchTarget {
    pub product: String,
    pub dimension: String,
    pub items: Vec<String>,
    pub metrics: Vec<String>,
    pub period: u32,
    pub statistics: Vec<String>,
}

/// Map conditions onto fetch targets, in condition order.
///
/// The compiler only emits products it was constructed with, so a missing
/// dimension means the caller compiled against a different catalog.
pub fn build_plan(
    conditions: &[Condition],
    catalog: &ProductCatalog,
    options: &ReadOptions,
) -> Result<Vec<FetchTarget>, NimbusError> {
    conditions
        .iter()
        .map(|cond| {
            let dimension = catalog.dimension(&cond.product).ok_or_else(|| {
                NimbusError::config(format!("product {} not in catalog", cond.product))
            })?;

            Ok(FetchTarget {
                product: cond.product.clone(),
                dimension: dimension.to_string(),
                items: cond.item.clone(),
                metrics: cond.metric.clone(),
                period: options.period,
                statistics: options.statistics.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cond(product: &str, item: &[&str], metric: &[&str]) -> Condition {
        Condition {
            product: product.to_string(),
            item: item.iter().map(|s| s.to_string()).collect(),
            metric: metric.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_plan_carries_dimension_and_options() {
        let catalog = ProductCatalog::aws_default();
        let options = ReadOptions::default();
        let plan = build_plan(
            &[cond("EC2", &["i-1"], &["CPUUtilization"]), cond("EBS", &[], &[])],
            &catalog,
            &options,
        )
        .unwrap();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].dimension, "InstanceId");
        assert_eq!(plan[0].items, vec!["i-1"]);
        assert_eq!(plan[0].metrics, vec!["CPUUtilization"]);
        assert_eq!(plan[0].period, 60);
        assert_eq!(plan[0].statistics, vec!["Average"]);
        assert_eq!(plan[1].dimension, "VolumeId");
        assert!(plan[1].items.is_empty());
    }

    #[test]
    fn test_plan_rejects_unknown_product() {
        let catalog = ProductCatalog::new(vec![]);
        let err = build_plan(&[cond("EC2", &[], &[])], &catalog, &ReadOptions::default())
            .unwrap_err();
        assert!(matches!(err, NimbusError::Config(_)));
    }

    #[test]
    fn test_read_options_defaults() {
        let options: ReadOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.period, 60);
        assert_eq!(options.statistics, vec!["Average"]);
    }

    #[test]
    fn test_read_options_unknown_field_rejected() {
        let result: Result<ReadOptions, _> =
            serde_json::from_str(r#"{"period": 30, "frequency": 5}"#);
        assert!(result.is_err());
    }
}
