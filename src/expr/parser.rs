//! Condition expression parser
//!
//! Parsing is two independent pattern checks: the `${...}` wrapper, then the
//! condition grammar inside it.

use crate::error::{Result, UtilError};
use crate::expr::ast::{Condition, Operand, Operator};
use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix marking the left operand as an environment variable
pub const ENV_PREFIX: &str = "env.";

/// Whole-input `${...}` wrapper
static WRAPPER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$\{(.+)\}$").expect("wrapper pattern compiles"));

/// `[env.]identifier <op> value`, with optional whitespace around the operator
static CONDITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(env\.)?([A-Za-z_][A-Za-z0-9_]*)\s*(==|!=)\s*(\S*)\s*$")
        .expect("condition pattern compiles")
});

/// Extract the condition body from a `${...}` wrapper
#[inline]
pub fn match_wrapper(expr: &str) -> Option<&str> {
    WRAPPER_RE
        .captures(expr)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str())
}

/// Parse a condition body (the text inside the wrapper)
pub fn parse_condition(body: &str) -> Option<Condition> {
    let caps = CONDITION_RE.captures(body)?;

    let name = caps.get(2)?.as_str().to_string();
    let left = if caps.get(1).is_some() {
        Operand::Env(name)
    } else {
        Operand::Literal(name)
    };

    let operator = match caps.get(3)?.as_str() {
        "==" => Operator::Equal,
        _ => Operator::NotEqual,
    };

    // The value group may match empty, which still counts as a match
    let right = caps.get(4).map_or("", |m| m.as_str()).to_string();

    Some(Condition {
        left,
        operator,
        right,
    })
}

/// Parse a full `${...}` expression, reporting which stage failed
pub fn parse(expr: &str) -> Result<Condition> {
    let body = match_wrapper(expr).ok_or_else(|| {
        UtilError::InvalidExpression(format!("Missing ${{...}} wrapper: {}", expr))
    })?;

    parse_condition(body).ok_or_else(|| {
        UtilError::InvalidCondition(format!("Expected [env.]NAME==VALUE or !=, got: {}", body))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_wrapper() {
        assert_eq!(match_wrapper("${on==on}"), Some("on==on"));
        assert_eq!(match_wrapper("${x}"), Some("x"));
        assert_eq!(match_wrapper("invalid"), None);
        assert_eq!(match_wrapper("${}"), None);
        assert_eq!(match_wrapper("prefix ${a==b}"), None);
        assert_eq!(match_wrapper("${a==b} suffix"), None);
    }

    #[test]
    fn test_parse_literal_condition() {
        let cond = parse_condition("on==on").unwrap();
        assert_eq!(cond.left, Operand::Literal("on".to_string()));
        assert_eq!(cond.operator, Operator::Equal);
        assert_eq!(cond.right, "on");
    }

    #[test]
    fn test_parse_env_condition() {
        let cond = parse_condition("env.GOOS!=darwin").unwrap();
        assert_eq!(cond.left, Operand::Env("GOOS".to_string()));
        assert_eq!(cond.operator, Operator::NotEqual);
        assert_eq!(cond.right, "darwin");
    }

    #[test]
    fn test_parse_whitespace_around_operator() {
        let cond = parse_condition("env.MODE  ==  prod ").unwrap();
        assert_eq!(cond.left, Operand::Env("MODE".to_string()));
        assert_eq!(cond.right, "prod");
    }

    #[test]
    fn test_parse_empty_value() {
        let cond = parse_condition("env.EMPTY_VAR==").unwrap();
        assert_eq!(cond.right, "");
    }

    #[test]
    fn test_parse_value_with_symbols() {
        let cond = parse_condition("VERSION==1.2.3-rc{1}").unwrap();
        assert_eq!(cond.right, "1.2.3-rc{1}");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for body in [
            "malformed",
            "a=b",
            "a<>b",
            "9lives==cat",
            "env.==x",
            "a b==c",
            "a==b c",
            "==x",
        ] {
            assert!(parse_condition(body).is_none(), "should reject: {}", body);
        }
    }

    #[test]
    fn test_parse_reports_stage() {
        assert!(matches!(
            parse("invalid"),
            Err(UtilError::InvalidExpression(_))
        ));
        assert!(matches!(
            parse("${malformed}"),
            Err(UtilError::InvalidCondition(_))
        ));
        assert_eq!(parse("${a!=b}").unwrap().to_string(), "a!=b");
        assert_eq!(parse("${env.X == y}").unwrap().to_string(), "env.X==y");
    }
}
