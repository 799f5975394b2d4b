//! Serde-friendly wrapper types

mod pattern;

pub use pattern::*;
