// SPDX-License-Identifier: MIT

//! Filter expression compilation
//!
//! This module turns the host engine's filter AST into fetch conditions:
//! - `product == 'EC2'`
//! - `item == 'EC2:i-cc696a17'`
//! - `product == 'EBS' AND metric == 'VolumeReadBytes'`
//!
//! The compiler visits the tree bottom-up, then a merge pass folds
//! compatible conditions into a minimal list.

pub mod ast;
pub mod compiler;
pub mod error;
pub mod merge;
pub mod visitor;

pub use ast::Node;
pub use compiler::FilterCompiler;
pub use error::FilterError;
pub use merge::merge;
pub use visitor::{Compiled, NodeVisitor};
