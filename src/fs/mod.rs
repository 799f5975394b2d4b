//! Filesystem helpers
//!
//! Directory management, recursive file listing and small readers.

mod dir;
mod file_ops;

pub use dir::*;
pub use file_ops::*;
