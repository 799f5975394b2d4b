//! Utility Core - collection helpers and a condition evaluator
//!
//! This crate provides an ordered deduplicating `Set`, map helpers, a
//! fail-closed evaluator for `${env.NAME==value}` style conditions, and small
//! serialization and filesystem wrappers. Python bindings are available
//! behind the `python` feature.

pub mod collections;
pub mod converters;
pub mod error;
pub mod expr;
pub mod fs;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use crate::collections::Set;
pub use crate::error::{Result, UtilError};
pub use crate::expr::{solve_env_expression, solve_expression_with, EnvSource, ProcessEnv};
