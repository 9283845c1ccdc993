// SPDX-License-Identifier: MIT

//! Node visitor contract
//!
//! The host engine historically provided a visitor base class for filter
//! ASTs; here it is an explicit trait with one method per node kind. The
//! provided [`NodeVisitor::visit`] dispatcher pattern-matches the closed
//! [`Node`] union exhaustively, so an implementer must decide every kind —
//! there is no default pass-through.

use super::ast::Node;
use super::error::FilterError;
use crate::condition::PartialCondition;

/// The result of visiting a node: leaves evaluate to a scalar string,
/// expression nodes to a sequence of in-flight conditions.
#[derive(Debug, Clone, PartialEq)]
pub enum Compiled {
    Value(String),
    Conditions(Vec<PartialCondition>),
}

/// One visit method per AST node kind.
pub trait NodeVisitor {
    fn visit_string_literal(&self, value: &str) -> Result<Compiled, FilterError>;

    fn visit_field(&self, name: &str) -> Result<Compiled, FilterError>;

    fn visit_unary_expression(
        &self,
        operator: &str,
        expression: &Node,
    ) -> Result<Compiled, FilterError>;

    fn visit_binary_expression(
        &self,
        operator: &str,
        left: &Node,
        right: &Node,
    ) -> Result<Compiled, FilterError>;

    fn visit_filter_term(&self, expression: &Node) -> Result<Compiled, FilterError>;

    /// Dispatch on the node kind.
    fn visit(&self, node: &Node) -> Result<Compiled, FilterError> {
        match node {
            Node::StringLiteral { value } => self.visit_string_literal(value),
            Node::Field { name } => self.visit_field(name),
            Node::UnaryExpression {
                operator,
                expression,
            } => self.visit_unary_expression(operator, expression),
            Node::BinaryExpression {
                operator,
                left,
                right,
            } => self.visit_binary_expression(operator, left, right),
            Node::FilterTerm { expression } => self.visit_filter_term(expression),
        }
    }
}
