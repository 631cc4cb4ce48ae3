// src/demo_programs.rs

use crate::expression::Expression;
use crate::geometry::GeometryValue;

pub struct DemoProgram {
    pub name: &'static str,
    pub program: Expression,
}

fn crossing_lines() -> Expression {
    Expression::intersect(GeometryValue::line(1.0, 0.0).into(), GeometryValue::line(-1.0, 0.0).into())
}

fn parallel_lines() -> Expression {
    Expression::intersect(GeometryValue::line(1.0, 0.0).into(), GeometryValue::line(1.0, 1.0).into())
}

fn overlapping_segments() -> Expression {
    Expression::intersect(
        GeometryValue::segment(0.0, 0.0, 4.0, 0.0).into(),
        GeometryValue::segment(6.0, 0.0, 2.0, 0.0).into(),
    )
}

fn shifted_crossing() -> Expression {
    Expression::shift(
        1.0,
        1.0,
        Expression::intersect(GeometryValue::line(1.0, 0.0).into(), GeometryValue::vertical_line(2.0).into()),
    )
}

fn shadowed_binding() -> Expression {
    Expression::let_in(
        "p",
        GeometryValue::point(0.0, 0.0).into(),
        Expression::let_in("p", GeometryValue::point(1.0, 1.0).into(), Expression::var("p")),
    )
}

// a diagonal segment clipped by a vertical line, then tested against a point
fn nested_scopes() -> Expression {
    Expression::let_in(
        "diag",
        GeometryValue::segment(4.0, 4.0, 0.0, 0.0).into(),
        Expression::let_in(
            "hit",
            Expression::intersect(Expression::var("diag"), GeometryValue::vertical_line(3.0).into()),
            Expression::intersect(Expression::var("hit"), GeometryValue::point(3.0, 3.0).into()),
        ),
    )
}

fn degenerate_segment() -> Expression {
    Expression::intersect(
        GeometryValue::segment(1.0, 1.0, 1.0, 1.0).into(),
        GeometryValue::line(1.0, 0.0).into(),
    )
}

fn unbound_variable() -> Expression {
    Expression::shift(2.0, 0.0, Expression::var("q"))
}

pub fn create_demo_programs() -> Vec<DemoProgram> {
    vec![
        DemoProgram { name: "crossing lines", program: crossing_lines() },
        DemoProgram { name: "parallel lines", program: parallel_lines() },
        DemoProgram { name: "overlapping segments", program: overlapping_segments() },
        DemoProgram { name: "shifted crossing", program: shifted_crossing() },
        DemoProgram { name: "shadowed binding", program: shadowed_binding() },
        DemoProgram { name: "nested scopes", program: nested_scopes() },
        DemoProgram { name: "degenerate segment", program: degenerate_segment() },
        DemoProgram { name: "unbound variable", program: unbound_variable() },
    ]
}
