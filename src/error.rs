// src/error.rs

use std::fmt;

/// Errors produced while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A `Var` named a binding that no enclosing `Let` introduced.
    UndefinedVariable(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable(name) => write!(f, "undefined variable `{name}`"),
        }
    }
}

impl std::error::Error for EvalError {}
