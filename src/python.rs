//! Python bindings (feature `python`)

use crate::collections::Set;
use crate::expr;
use pyo3::prelude::*;
use std::collections::HashMap;

/// Evaluate a `${...}` condition against the process environment
///
/// Returns False for anything that does not parse.
#[pyfunction]
fn solve_env_expression(condition: &str) -> bool {
    expr::solve_env_expression(condition)
}

/// Evaluate a `${...}` condition against the given variables
///
/// # Example (Python)
/// ```python
/// solve_expression("${env.MODE==prod}", {"MODE": "prod"})  # True
/// ```
#[pyfunction]
fn solve_expression(condition: &str, env: HashMap<String, String>) -> bool {
    expr::solve_expression_with(condition, &env)
}

/// Drop repeated strings, keeping the first occurrence of each
#[pyfunction]
fn dedup(items: Vec<String>) -> Vec<String> {
    Set::new(items).into_list()
}

/// List files under `root` with extension `ext` (e.g. ".yaml")
#[pyfunction]
fn list_files(root: &str, ext: &str) -> Vec<String> {
    crate::fs::list_files(root, ext)
        .into_iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect()
}

/// Read a password literal or a `file:` reference
#[pyfunction]
fn parse_password_entry(source: &str) -> PyResult<String> {
    Ok(crate::fs::parse_password_entry(source)?)
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn utilkit_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(solve_env_expression, m)?)?;
    m.add_function(wrap_pyfunction!(solve_expression, m)?)?;
    m.add_function(wrap_pyfunction!(dedup, m)?)?;
    m.add_function(wrap_pyfunction!(list_files, m)?)?;
    m.add_function(wrap_pyfunction!(parse_password_entry, m)?)?;
    Ok(())
}
