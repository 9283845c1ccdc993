// SPDX-License-Identifier: MIT

//! Filter condition compiler
//!
//! Transforms a filter expression AST into the list of conditions that
//! control what the poller fetches.
//!
//! The supported filtering expression:
//!  - The expression is a variable length list of conditions joined by OR.
//!    A condition is a product, a product + metric, a product + item, or a
//!    product + metric + item.
//!  - A product, metric, or item is expressed using `key == value`. No
//!    comparisons other than `==` between keys and values are allowed.
//!  - The possible keys are:
//!    - `product`: a specific product such as `EC2` or `ELB`.
//!    - `item`: a specific item (e.g. "i-cc696a17" for EC2, "vol-56130db1"
//!      for EBS). If any item field is given, only those items are fetched.
//!    - `metric`: a specific metric. If any metric field is given, only
//!      those metrics are fetched.
//!  - A product + metric can be expressed using AND
//!    (`product == 'EC2' AND metric == 'CPUUtilization'`) or using the
//!    shorthand format (`metric == 'EC2:CPUUtilization'`).
//!  - AND can only combine one product, one metric, and/or one item.
//!  - Other boolean logic is not supported.

use super::ast::Node;
use super::error::FilterError;
use super::merge::merge;
use super::visitor::{Compiled, NodeVisitor};
use crate::condition::{union_into, Condition, PartialCondition};

const CONDITION_KEYS: [&str; 3] = ["product", "item", "metric"];

/// Compiles filter ASTs against a fixed set of supported products.
///
/// Stateless across calls: `compile` is a pure function of the tree and the
/// product set, so one compiler can serve concurrent compiles.
pub struct FilterCompiler {
    supported_products: Vec<String>,
}

impl FilterCompiler {
    pub fn new(supported_products: Vec<String>) -> Self {
        Self { supported_products }
    }

    /// Compile a filter AST into the final condition list.
    pub fn compile(&self, node: &Node) -> Result<Vec<Condition>, FilterError> {
        let conds = self.expect_conditions(self.visit(node)?)?;
        let merged = merge(conds)?;

        log::debug!("compiled filter into {} condition(s)", merged.len());

        Ok(merged)
    }

    fn supported(&self, product: &str) -> bool {
        self.supported_products.iter().any(|p| p == product)
    }

    /// A scalar where a condition list was required means the expression
    /// bottomed out in a bare literal or field reference.
    fn expect_conditions(&self, compiled: Compiled) -> Result<Vec<PartialCondition>, FilterError> {
        match compiled {
            Compiled::Conditions(conds) => Ok(conds),
            Compiled::Value(_) => Err(FilterError::UnsupportedCondition(
                "simple filter term".to_string(),
            )),
        }
    }

    fn expect_value(&self, compiled: Compiled) -> Result<String, FilterError> {
        match compiled {
            Compiled::Value(value) => Ok(value),
            Compiled::Conditions(_) => Err(FilterError::UnsupportedCondition(
                "expression".to_string(),
            )),
        }
    }

    /// Split a `<product>:<value>` shorthand on the first separator. The
    /// product part must name a supported product; bare values pass through
    /// and leave the missing-product check to the merge pass.
    fn split_shorthand(&self, value: &str) -> Result<(Option<String>, String), FilterError> {
        match value.split_once(':') {
            None => Ok((None, value.to_string())),
            Some((product, rest)) => {
                if product.is_empty() || rest.is_empty() {
                    return Err(FilterError::MalformedShorthand(value.to_string()));
                }
                if !self.supported(product) {
                    return Err(FilterError::UnsupportedProduct(product.to_string()));
                }
                Ok((Some(product.to_string()), rest.to_string()))
            }
        }
    }

    /// `field == value`: the only leaf that produces a condition.
    fn compile_equality(&self, left: &Node, right: &Node) -> Result<Compiled, FilterError> {
        let field = self.expect_value(self.visit(left)?)?;

        if !CONDITION_KEYS.contains(&field.as_str()) {
            return Err(FilterError::UnsupportedCondition(format!(
                "condition {field}"
            )));
        }

        let raw = self.expect_value(self.visit(right)?)?;
        let (shorthand_product, value) = self.split_shorthand(&raw)?;

        let mut cond = PartialCondition::empty();
        cond.product = shorthand_product;

        match field.as_str() {
            "product" => {
                if !self.supported(&value) {
                    return Err(FilterError::UnsupportedProduct(value));
                }
                cond.product = Some(value);
            }
            "item" => cond.item.push(value),
            _ => cond.metric.push(value),
        }

        Ok(Compiled::Conditions(vec![cond]))
    }

    /// AND combines exactly two simple conditions into one; it never
    /// distributes over an OR-group.
    fn compile_and(&self, left: &Node, right: &Node) -> Result<Compiled, FilterError> {
        let mut left = self.expect_conditions(self.visit(left)?)?;
        let mut right = self.expect_conditions(self.visit(right)?)?;

        if left.len() != 1 || right.len() != 1 {
            return Err(FilterError::UnsupportedCombination(
                "AND between anything other than simple conditions",
            ));
        }
        let left = left.remove(0);
        let mut right = right.remove(0);

        // Each of product/item/metric may be claimed by at most one side.
        if left.product.is_some() && right.product.is_some() {
            return Err(FilterError::UnsupportedCombination("AND between products"));
        }
        if !left.item.is_empty() && !right.item.is_empty() {
            return Err(FilterError::UnsupportedCombination("AND between items"));
        }
        if !left.metric.is_empty() && !right.metric.is_empty() {
            return Err(FilterError::UnsupportedCombination("AND between metrics"));
        }

        let mut combined = PartialCondition {
            product: left.product.or(right.product.take()),
            item: left.item,
            metric: left.metric,
        };
        union_into(&mut combined.item, &right.item);
        union_into(&mut combined.metric, &right.metric);

        Ok(Compiled::Conditions(vec![combined]))
    }

    /// OR only concatenates; cross-entry validation happens in the merge.
    fn compile_or(&self, left: &Node, right: &Node) -> Result<Compiled, FilterError> {
        let mut conds = self.expect_conditions(self.visit(left)?)?;
        conds.extend(self.expect_conditions(self.visit(right)?)?);
        Ok(Compiled::Conditions(conds))
    }
}

impl NodeVisitor for FilterCompiler {
    fn visit_string_literal(&self, value: &str) -> Result<Compiled, FilterError> {
        Ok(Compiled::Value(value.to_string()))
    }

    fn visit_field(&self, name: &str) -> Result<Compiled, FilterError> {
        Ok(Compiled::Value(name.to_string()))
    }

    fn visit_unary_expression(
        &self,
        operator: &str,
        expression: &Node,
    ) -> Result<Compiled, FilterError> {
        match operator {
            // '*' is the field dereferencing operator: given
            // `product == 'EC2'`, the `*` on product means "the field
            // called product".
            "*" => self.visit(expression),
            other => Err(FilterError::UnsupportedOperator(other.to_string())),
        }
    }

    fn visit_binary_expression(
        &self,
        operator: &str,
        left: &Node,
        right: &Node,
    ) -> Result<Compiled, FilterError> {
        match operator {
            "==" => self.compile_equality(left, right),
            "AND" => self.compile_and(left, right),
            "OR" => self.compile_or(left, right),
            other => Err(FilterError::UnsupportedOperator(other.to_string())),
        }
    }

    fn visit_filter_term(&self, expression: &Node) -> Result<Compiled, FilterError> {
        // A filter is built from equalities; a term wrapping a bare value
        // or field reference has nothing to select on.
        match self.visit(expression)? {
            Compiled::Conditions(conds) => Ok(Compiled::Conditions(conds)),
            Compiled::Value(_) => Err(FilterError::UnsupportedCondition(
                "simple filter term".to_string(),
            )),
        }
    }
}
