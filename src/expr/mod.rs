//! Condition expression parsing and evaluation
//!
//! This module handles condition strings like `${env.GOOS==darwin}` and
//! evaluates them against an environment source. Evaluation fails closed:
//! anything that does not parse is simply `false`.

mod ast;
mod env;
mod evaluator;
pub mod parser;


pub use ast::*;
pub use env::*;
pub use evaluator::*;
pub use parser::*;
