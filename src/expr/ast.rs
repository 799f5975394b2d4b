//! Parsed form of a condition expression

use crate::expr::parser::ENV_PREFIX;

/// A single two-operand comparison like `env.GOOS==darwin`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub left: Operand,
    pub operator: Operator,
    /// Right side is always literal text and may be empty
    pub right: String,
}

/// Left operand of a condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Plain text compared as-is
    Literal(String),
    /// Name of an environment variable (`env.` prefix)
    Env(String),
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Equal (==)
    Equal,
    /// Not equal (!=)
    NotEqual,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.left {
            Operand::Literal(text) => write!(f, "{}", text)?,
            Operand::Env(name) => write!(f, "{}{}", ENV_PREFIX, name)?,
        }
        write!(f, "{}{}", self.operator.as_str(), self.right)
    }
}
