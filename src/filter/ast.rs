// SPDX-License-Identifier: MIT

//! Abstract Syntax Tree for filter expressions
//!
//! The tree is produced and semantically pre-validated by the host query
//! engine's parser; this crate only reads it. Operators are kept as plain
//! strings because the host grammar allows far more than the compiler
//! accepts, and rejecting out-of-grammar operators is the compiler's job.

use serde::{Deserialize, Serialize};

/// A filter expression node. Closed set of kinds; anything the host parser
/// emits deserializes into exactly one of these via the `"type"` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// A quoted string value
    StringLiteral { value: String },
    /// A field reference by name
    Field { name: String },
    /// A unary operator applied to a sub-expression, e.g. the field
    /// dereference `*` or a negation
    UnaryExpression {
        operator: String,
        expression: Box<Node>,
    },
    /// A binary operator joining two sub-expressions
    BinaryExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// A filter term wrapping a single expression
    FilterTerm { expression: Box<Node> },
}

impl Node {
    pub fn literal(value: &str) -> Node {
        Node::StringLiteral {
            value: value.to_string(),
        }
    }

    pub fn field(name: &str) -> Node {
        Node::Field {
            name: name.to_string(),
        }
    }

    /// Field dereference, the host parser's `*` wrapper around a field.
    pub fn deref(node: Node) -> Node {
        Node::UnaryExpression {
            operator: "*".to_string(),
            expression: Box::new(node),
        }
    }

    pub fn unary(operator: &str, expression: Node) -> Node {
        Node::UnaryExpression {
            operator: operator.to_string(),
            expression: Box::new(expression),
        }
    }

    pub fn binary(operator: &str, left: Node, right: Node) -> Node {
        Node::BinaryExpression {
            operator: operator.to_string(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// `field == "value"`, with the left side routed through the `*`
    /// dereference the way the host parser emits it.
    pub fn equals(field: &str, value: &str) -> Node {
        Node::binary("==", Node::deref(Node::field(field)), Node::literal(value))
    }

    pub fn and(left: Node, right: Node) -> Node {
        Node::binary("AND", left, right)
    }

    pub fn or(left: Node, right: Node) -> Node {
        Node::binary("OR", left, right)
    }

    pub fn term(expression: Node) -> Node {
        Node::FilterTerm {
            expression: Box::new(expression),
        }
    }
}
