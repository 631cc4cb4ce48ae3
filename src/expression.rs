// src/expression.rs

use std::fmt;

use crate::environment::Environment;
use crate::error::EvalError;
use crate::geometry::GeometryValue;

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Literal(GeometryValue),
    Intersect(Box<Expression>, Box<Expression>),
    Let {
        name: String,
        bound: Box<Expression>,
        body: Box<Expression>,
    },
    Var(String),
    Shift {
        dx: f64,
        dy: f64,
        target: Box<Expression>,
    },
}

impl From<GeometryValue> for Expression {
    fn from(value: GeometryValue) -> Self {
        Self::Literal(value)
    }
}

impl Expression {
    pub fn literal(value: GeometryValue) -> Self {
        Self::Literal(value)
    }

    pub fn intersect(left: Expression, right: Expression) -> Self {
        Self::Intersect(Box::new(left), Box::new(right))
    }

    pub fn let_in(name: impl Into<String>, bound: Expression, body: Expression) -> Self {
        Self::Let {
            name: name.into(),
            bound: Box::new(bound),
            body: Box::new(body),
        }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn shift(dx: f64, dy: f64, target: Expression) -> Self {
        Self::Shift {
            dx,
            dy,
            target: Box::new(target),
        }
    }

    /// Rebuilds the tree with every literal in canonical form. Must run once
    /// before `eval`.
    pub fn preprocess(&self) -> Expression {
        match self {
            Self::Literal(value) => Self::Literal(value.preprocess()),
            Self::Intersect(left, right) => Self::intersect(left.preprocess(), right.preprocess()),
            Self::Let { name, bound, body } => Self::let_in(name.clone(), bound.preprocess(), body.preprocess()),
            Self::Var(name) => Self::Var(name.clone()),
            Self::Shift { dx, dy, target } => Self::shift(*dx, *dy, target.preprocess()),
        }
    }

    pub fn eval(&self, env: &Environment) -> Result<GeometryValue, EvalError> {
        log::trace!("eval {self}");
        match self {
            Self::Literal(value) => Ok(value.eval(env)),
            Self::Intersect(left, right) => {
                let left = left.eval(env)?;
                let right = right.eval(env)?;
                Ok(left.intersect(&right))
            }
            Self::Let { name, bound, body } => {
                let value = bound.eval(env)?;
                log::debug!("bind {name} = {value}");
                body.eval(&env.extend(name.clone(), value))
            }
            Self::Var(name) => match env.lookup(name) {
                Some(value) => Ok(*value),
                None => {
                    log::debug!("lookup of `{name}` failed in environment of {} bindings", env.len());
                    Err(EvalError::UndefinedVariable(name.clone()))
                }
            },
            Self::Shift { dx, dy, target } => Ok(target.eval(env)?.shift(*dx, *dy)),
        }
    }

    /// Preprocesses the program, then evaluates it in the empty environment.
    pub fn run(&self) -> Result<GeometryValue, EvalError> {
        self.preprocess().eval(&Environment::new())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Intersect(left, right) => write!(f, "Intersect({left}, {right})"),
            Self::Let { name, bound, body } => write!(f, "Let({name}, {bound}, {body})"),
            Self::Var(name) => write!(f, "Var({name})"),
            Self::Shift { dx, dy, target } => write!(f, "Shift({dx}, {dy}, {target})"),
        }
    }
}
