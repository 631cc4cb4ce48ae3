// src/lib.rs

pub mod demo_programs;
pub mod environment;
pub mod error;
pub mod expression;
pub mod generator;
pub mod geometry;
pub mod intersection;
pub mod tolerance;

pub use environment::Environment;
pub use error::EvalError;
pub use expression::Expression;
pub use geometry::{GeometryValue, ValueKind};
