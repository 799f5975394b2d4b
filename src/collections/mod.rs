//! Collection utilities
//!
//! This module provides the ordered deduplicating `Set` and a handful of
//! map helpers, including recursive key normalization of YAML trees.

mod maps;
mod set;


pub use maps::*;
pub use set::*;
