// src/geometry.rs

use std::fmt;

use glam::DVec2;

use crate::environment::Environment;
use crate::tolerance::{real_close, real_close_point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Empty,
    Point,
    Line,
    VerticalLine,
    LineSegment,
}

/// A fully evaluated geometric value. Values are never mutated; every
/// operation builds a new one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryValue {
    /// The intersection of shapes with no points in common.
    Empty,
    Point(DVec2),
    /// Non-vertical line `y = slope * x + intercept`.
    Line { slope: f64, intercept: f64 },
    /// Line `x = constant`.
    VerticalLine(f64),
    /// Finite segment between two endpoints. May be degenerate until
    /// preprocessed.
    LineSegment(DVec2, DVec2),
}

impl GeometryValue {
    pub fn empty() -> Self {
        Self::Empty
    }

    pub fn point(x: f64, y: f64) -> Self {
        Self::Point(DVec2::new(x, y))
    }

    pub fn line(slope: f64, intercept: f64) -> Self {
        Self::Line { slope, intercept }
    }

    pub fn vertical_line(x: f64) -> Self {
        Self::VerticalLine(x)
    }

    pub fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::LineSegment(DVec2::new(x1, y1), DVec2::new(x2, y2))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Empty => ValueKind::Empty,
            Self::Point(_) => ValueKind::Point,
            Self::Line { .. } => ValueKind::Line,
            Self::VerticalLine(_) => ValueKind::VerticalLine,
            Self::LineSegment(..) => ValueKind::LineSegment,
        }
    }

    /// The infinite line through two points: vertical when their
    /// x-coordinates are close, otherwise slope/intercept form.
    pub fn line_through(p: DVec2, q: DVec2) -> Self {
        if real_close(p.x, q.x) {
            Self::VerticalLine(p.x)
        } else {
            let slope = (q.y - p.y) / (q.x - p.x);
            Self::Line {
                slope,
                intercept: p.y - slope * p.x,
            }
        }
    }

    pub fn shift(&self, dx: f64, dy: f64) -> Self {
        let offset = DVec2::new(dx, dy);
        match *self {
            Self::Empty => Self::Empty,
            Self::Point(p) => Self::Point(p + offset),
            Self::Line { slope, intercept } => Self::Line {
                slope,
                intercept: intercept + dy - slope * dx,
            },
            Self::VerticalLine(x) => Self::VerticalLine(x + dx),
            Self::LineSegment(start, end) => {
                let (start, end) = (start + offset, end + offset);
                if real_close_point(start, end) {
                    Self::Point(start)
                } else {
                    Self::LineSegment(start, end)
                }
            }
        }
    }

    /// Canonical form. Segments are ordered left to right (bottom to top
    /// when vertical) and degenerate segments collapse to their point;
    /// every other variant is already canonical.
    pub fn preprocess(&self) -> Self {
        match *self {
            Self::LineSegment(start, end) => {
                if real_close_point(start, end) {
                    Self::Point(start)
                } else if start.x > end.x && !real_close(start.x, end.x) {
                    Self::LineSegment(end, start)
                } else if real_close(start.x, end.x) && start.y > end.y {
                    Self::LineSegment(end, start)
                } else {
                    *self
                }
            }
            other => other,
        }
    }

    /// A value is already fully evaluated.
    pub fn eval(&self, _env: &Environment) -> Self {
        *self
    }

    /// Structural equality with every coordinate compared under the
    /// fixed tolerance.
    pub fn approx_eq(&self, other: &GeometryValue) -> bool {
        match (*self, *other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Point(p), Self::Point(q)) => real_close_point(p, q),
            (
                Self::Line { slope: m1, intercept: b1 },
                Self::Line { slope: m2, intercept: b2 },
            ) => real_close(m1, m2) && real_close(b1, b2),
            (Self::VerticalLine(x1), Self::VerticalLine(x2)) => real_close(x1, x2),
            (Self::LineSegment(a1, a2), Self::LineSegment(b1, b2)) => {
                real_close_point(a1, b1) && real_close_point(a2, b2)
            }
            _ => false,
        }
    }
}

impl fmt::Display for GeometryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Point(p) => write!(f, "Point({}, {})", p.x, p.y),
            Self::Line { slope, intercept } => write!(f, "Line({slope}, {intercept})"),
            Self::VerticalLine(x) => write!(f, "VerticalLine({x})"),
            Self::LineSegment(a, b) => {
                write!(f, "LineSegment({}, {}, {}, {})", a.x, a.y, b.x, b.y)
            }
        }
    }
}
