// SPDX-License-Identifier: MIT

//! Filter compile errors
//!
//! Closed taxonomy: every way a filter expression can fall outside the
//! supported grammar maps to exactly one variant. All are fatal to the
//! compile; there is no partial result.

use thiserror::Error;

/// Reasons a filter expression fails to compile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// An operator outside `==`, `AND`, `OR`, `*`
    #[error("filters do not support operator {0}")]
    UnsupportedOperator(String),

    /// A condition on something other than product/item/metric, or a term
    /// that is not an equality
    #[error("filters do not support condition {0}")]
    UnsupportedCondition(String),

    /// A product name (explicit or from shorthand) outside the supported set
    #[error("filters do not support product {0}")]
    UnsupportedProduct(String),

    /// A shorthand value with an empty product or item/metric part
    #[error("filters do not support malformed shorthand value {0}")]
    MalformedShorthand(String),

    /// An AND that does not reduce to a single product/item/metric triple
    #[error("filters do not support {0}")]
    UnsupportedCombination(&'static str),

    /// A merged condition that never resolved a product
    #[error("filters do not support item/metric condition without product")]
    IncompleteCondition,
}
