// SPDX-License-Identifier: MIT

//! Supported-product catalog
//!
//! Maps each product to the dimension name the provider keys its metrics by
//! (e.g. EC2 instances are dimensioned by `InstanceId`). The catalog order
//! is the order products appear in compiled output and plans.

use serde::{Deserialize, Serialize};

/// One supported product and its metric dimension name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub name: String,
    pub dimension: String,
}

impl ProductSpec {
    pub fn new(name: &str, dimension: &str) -> Self {
        Self {
            name: name.to_string(),
            dimension: dimension.to_string(),
        }
    }
}

/// Ordered set of supported products.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCatalog {
    products: Vec<ProductSpec>,
}

impl ProductCatalog {
    pub fn new(products: Vec<ProductSpec>) -> Self {
        Self { products }
    }

    /// The default AWS product set.
    pub fn aws_default() -> Self {
        Self::new(vec![
            ProductSpec::new("EC2", "InstanceId"),
            ProductSpec::new("EBS", "VolumeId"),
            ProductSpec::new("ELB", "LoadBalancerName"),
            ProductSpec::new("RDS", "DBInstanceIdentifier"),
            ProductSpec::new("CloudFront", "DistributionId"),
            ProductSpec::new("AutoScaling", "AutoScalingGroupName"),
            ProductSpec::new("ElastiCache", "CacheClusterId"),
            ProductSpec::new("Lambda", "FunctionName"),
        ])
    }

    /// Product names in catalog order, the compiler's supported set.
    pub fn names(&self) -> Vec<String> {
        self.products.iter().map(|p| p.name.clone()).collect()
    }

    pub fn dimension(&self, product: &str) -> Option<&str> {
        self.products
            .iter()
            .find(|p| p.name == product)
            .map(|p| p.dimension.as_str())
    }

    pub fn contains(&self, product: &str) -> bool {
        self.products.iter().any(|p| p.name == product)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::aws_default()
    }
}
