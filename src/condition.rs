// SPDX-License-Identifier: MIT

//! Condition records produced by the filter compiler
//!
//! A [`Condition`] tells the poller, for one product, which items and which
//! metrics to fetch. Empty lists are wildcards ("all items" / "all metrics").

use serde::{Deserialize, Serialize};

/// A finished fetch condition. Always names a supported product; `item` and
/// `metric` are ordered sets (no duplicates, first-insertion order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub product: String,
    pub item: Vec<String>,
    pub metric: Vec<String>,
}

/// An in-flight condition built up during AST traversal. The product may
/// still be unresolved (`None`) until the merge pass checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialCondition {
    pub product: Option<String>,
    pub item: Vec<String>,
    pub metric: Vec<String>,
}

impl PartialCondition {
    /// An empty condition with no product and no restrictions.
    pub fn empty() -> Self {
        Self {
            product: None,
            item: Vec::new(),
            metric: Vec::new(),
        }
    }
}

impl From<Condition> for PartialCondition {
    fn from(cond: Condition) -> Self {
        Self {
            product: Some(cond.product),
            item: cond.item,
            metric: cond.metric,
        }
    }
}

/// Append each value of `src` to `dst` unless already present, keeping
/// first-seen order.
pub fn union_into(dst: &mut Vec<String>, src: &[String]) {
    for value in src {
        if !dst.iter().any(|v| v == value) {
            dst.push(value.clone());
        }
    }
}
