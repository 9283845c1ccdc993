// SPDX-License-Identifier: MIT

//! Condition merger
//!
//! A pure post-pass over the condition sequence a traversal produces.
//! Conditions for the same product are folded together where that cannot
//! change meaning: item restrictions union with item restrictions, metric
//! restrictions with metric restrictions. A wildcard ("all items" / "all
//! metrics") never absorbs a restricted condition, and an item-restricted
//! condition never folds into a metric-restricted one; only an explicit AND
//! during traversal combines the two dimensions in a single entry.

use super::error::FilterError;
use crate::condition::{union_into, Condition, PartialCondition};

/// Normalize a traversal result into the final condition list.
///
/// First-fit: each input entry, in order, is unioned into the first
/// compatible entry already in the output, otherwise appended. This keeps
/// the merge deterministic and order-preserving rather than optimal.
/// Running the pass on its own output is a no-op.
pub fn merge(conds: Vec<PartialCondition>) -> Result<Vec<Condition>, FilterError> {
    let mut merged: Vec<PartialCondition> = Vec::new();

    for cond in conds {
        match merged.iter_mut().find(|entry| can_merge(entry, &cond)) {
            Some(entry) => {
                union_into(&mut entry.item, &cond.item);
                union_into(&mut entry.metric, &cond.metric);
            }
            None => merged.push(cond),
        }
    }

    // Every condition must have resolved a product by now; a filter naming
    // only an item or metric with no product in its OR-branch is rejected.
    merged
        .into_iter()
        .map(|cond| match cond.product {
            Some(product) => Ok(Condition {
                product,
                item: cond.item,
                metric: cond.metric,
            }),
            None => Err(FilterError::IncompleteCondition),
        })
        .collect()
}

/// Whether two conditions can be folded into one. Commutative.
fn can_merge(a: &PartialCondition, b: &PartialCondition) -> bool {
    if a.product != b.product {
        return false;
    }

    // A wildcard list on one side only means the two conditions ask for
    // different things; neither may absorb the other.
    if a.item.is_empty() != b.item.is_empty() || a.metric.is_empty() != b.metric.is_empty() {
        return false;
    }

    // Item restrictions fold with item restrictions and metric restrictions
    // with metric restrictions, but never a mix.
    if a.item.len() + b.item.len() > 0 && a.metric.len() + b.metric.len() > 0 {
        return false;
    }

    true
}
