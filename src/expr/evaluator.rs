//! Condition evaluator

use crate::expr::ast::{Condition, Operand, Operator};
use crate::expr::env::{EnvSource, ProcessEnv};
use crate::expr::parser;
use tracing::trace;

/// Evaluate a parsed condition. Missing variables resolve to `""`.
pub fn evaluate<E: EnvSource + ?Sized>(cond: &Condition, env: &E) -> bool {
    let resolved;
    let left = match &cond.left {
        Operand::Literal(text) => text.as_str(),
        Operand::Env(name) => {
            resolved = env.get(name).unwrap_or_default();
            resolved.as_str()
        }
    };

    match cond.operator {
        Operator::Equal => left == cond.right,
        Operator::NotEqual => left != cond.right,
    }
}

/// Evaluate a `${...}` expression against the process environment.
///
/// Never fails: a malformed expression evaluates to `false`.
pub fn solve_env_expression(expr: &str) -> bool {
    solve_expression_with(expr, &ProcessEnv)
}

/// Evaluate a `${...}` expression against `env`, failing closed
pub fn solve_expression_with<E: EnvSource + ?Sized>(expr: &str, env: &E) -> bool {
    match parser::parse(expr) {
        Ok(cond) => evaluate(&cond, env),
        Err(err) => {
            trace!(expression = expr, error = %err, "expression does not parse, treating as false");
            false
        }
    }
}
