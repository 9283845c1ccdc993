// SPDX-License-Identifier: MIT

//! nimbus-rs: filter compilation and poll planning for cloud metrics
//!
//! The crate compiles a restricted boolean filter expression — which
//! products, items, and metrics to read — from a host-parsed AST into a
//! minimal list of fetch conditions, then maps those conditions onto
//! concrete fetch targets for a resource poller. The poller itself (SDK
//! calls, pagination, rate limiting) lives outside this crate behind the
//! [`poll::Poller`] trait.

pub mod catalog;
pub mod condition;
pub mod config;
pub mod error;
pub mod filter;
pub mod plan;
pub mod poll;

pub use catalog::{ProductCatalog, ProductSpec};
pub use condition::{Condition, PartialCondition};
pub use config::PollConfig;
pub use error::NimbusError;
pub use filter::{FilterCompiler, FilterError, Node};
pub use plan::{build_plan, FetchTarget, ReadOptions};
pub use poll::{collate, Poller, Sample};
