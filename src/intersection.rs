// src/intersection.rs
//
// Pairwise intersection by double dispatch. `intersect` dispatches on the
// other operand's kind to one handler per kind; each handler then matches on
// `self`. Every unordered pair is computed in exactly one arm, and the arms
// for the reversed order route back into it:
//
//   Point x {Point, Line, VerticalLine}    -> intersect_point / intersect_line / intersect_vertical_line
//   Line x {Line, VerticalLine}            -> intersect_line / intersect_vertical_line
//   VerticalLine x VerticalLine            -> intersect_vertical_line
//   anything x LineSegment                 -> intersect_segment (line, then clip)
//   anything x Empty                       -> Empty

use glam::DVec2;

use crate::geometry::GeometryValue;
use crate::tolerance::{real_close, real_close_point, within};

impl GeometryValue {
    pub fn intersect(&self, other: &GeometryValue) -> GeometryValue {
        log::trace!("intersect {self} with {other}");
        match *other {
            GeometryValue::Empty => self.intersect_empty(),
            GeometryValue::Point(p) => self.intersect_point(p),
            GeometryValue::Line { slope, intercept } => self.intersect_line(slope, intercept),
            GeometryValue::VerticalLine(x) => self.intersect_vertical_line(x),
            GeometryValue::LineSegment(start, end) => self.intersect_segment(start, end),
        }
    }

    pub fn intersect_empty(&self) -> GeometryValue {
        GeometryValue::Empty
    }

    pub fn intersect_point(&self, p: DVec2) -> GeometryValue {
        match *self {
            GeometryValue::Empty => GeometryValue::Empty,
            GeometryValue::Point(q) => {
                if real_close_point(p, q) {
                    GeometryValue::Point(q)
                } else {
                    GeometryValue::Empty
                }
            }
            GeometryValue::Line { slope, intercept } => {
                GeometryValue::Point(p).intersect_line(slope, intercept)
            }
            GeometryValue::VerticalLine(x) => GeometryValue::Point(p).intersect_vertical_line(x),
            GeometryValue::LineSegment(start, end) => GeometryValue::Point(p).intersect_segment(start, end),
        }
    }

    pub fn intersect_line(&self, slope: f64, intercept: f64) -> GeometryValue {
        match *self {
            GeometryValue::Empty => GeometryValue::Empty,
            GeometryValue::Point(p) => {
                if real_close(p.y, slope * p.x + intercept) {
                    GeometryValue::Point(p)
                } else {
                    GeometryValue::Empty
                }
            }
            GeometryValue::Line { slope: m, intercept: b } => {
                if real_close(m, slope) {
                    if real_close(b, intercept) {
                        *self
                    } else {
                        GeometryValue::Empty
                    }
                } else {
                    let x = (intercept - b) / (m - slope);
                    GeometryValue::Point(DVec2::new(x, m * x + b))
                }
            }
            GeometryValue::VerticalLine(x) => GeometryValue::Line { slope, intercept }.intersect_vertical_line(x),
            GeometryValue::LineSegment(start, end) => {
                GeometryValue::Line { slope, intercept }.intersect_segment(start, end)
            }
        }
    }

    pub fn intersect_vertical_line(&self, x: f64) -> GeometryValue {
        match *self {
            GeometryValue::Empty => GeometryValue::Empty,
            GeometryValue::Point(p) => {
                if real_close(p.x, x) {
                    GeometryValue::Point(p)
                } else {
                    GeometryValue::Empty
                }
            }
            GeometryValue::Line { slope, intercept } => GeometryValue::Point(DVec2::new(x, slope * x + intercept)),
            GeometryValue::VerticalLine(own_x) => {
                if real_close(own_x, x) {
                    *self
                } else {
                    GeometryValue::Empty
                }
            }
            GeometryValue::LineSegment(start, end) => GeometryValue::VerticalLine(x).intersect_segment(start, end),
        }
    }

    /// Intersects `self` with the segment by first intersecting with the
    /// segment's infinite line and then clipping that result to the segment.
    pub fn intersect_segment(&self, start: DVec2, end: DVec2) -> GeometryValue {
        match GeometryValue::LineSegment(start, end).preprocess() {
            GeometryValue::LineSegment(start, end) => self
                .intersect(&GeometryValue::line_through(start, end))
                .intersect_with_segment_as_line_result(start, end),
            collapsed => self.intersect(&collapsed),
        }
    }

    /// `self` is the intersection of some shape with the line containing
    /// the segment `start..end`; returns the intersection of that shape
    /// with the segment itself.
    pub fn intersect_with_segment_as_line_result(&self, start: DVec2, end: DVec2) -> GeometryValue {
        match *self {
            GeometryValue::Empty => GeometryValue::Empty,
            GeometryValue::Point(p) => {
                if within(p.x, start.x, end.x) && within(p.y, start.y, end.y) {
                    GeometryValue::Point(p)
                } else {
                    GeometryValue::Empty
                }
            }
            GeometryValue::Line { .. } | GeometryValue::VerticalLine(_) => GeometryValue::LineSegment(start, end),
            GeometryValue::LineSegment(own_start, own_end) => {
                collinear_overlap((own_start, own_end), (start, end))
            }
        }
    }
}

/// Position of a point along the shared line of two collinear segments.
fn axis_coordinate(p: DVec2, vertical: bool) -> f64 {
    if vertical {
        p.y
    } else {
        p.x
    }
}

/// Orders a segment's endpoints along the axis.
fn ordered(segment: (DVec2, DVec2), vertical: bool) -> (DVec2, DVec2) {
    let (start, end) = segment;
    if axis_coordinate(start, vertical) <= axis_coordinate(end, vertical) {
        (start, end)
    } else {
        (end, start)
    }
}

/// Interval intersection of two segments already known to lie on the same
/// line. Endpoints are projected onto x, or onto y when the line is
/// vertical, and the segment whose interval starts first is `earlier`.
/// Ties on the start fall back to the end so the choice does not depend on
/// argument order.
fn collinear_overlap(a: (DVec2, DVec2), b: (DVec2, DVec2)) -> GeometryValue {
    let vertical = real_close(a.0.x, a.1.x);
    let a = ordered(a, vertical);
    let b = ordered(b, vertical);
    let key = |s: (DVec2, DVec2)| (axis_coordinate(s.0, vertical), axis_coordinate(s.1, vertical));

    let (earlier, later) = if key(a) <= key(b) { (a, b) } else { (b, a) };
    let earlier_end = axis_coordinate(earlier.1, vertical);
    let later_start = axis_coordinate(later.0, vertical);
    let later_end = axis_coordinate(later.1, vertical);

    if real_close(earlier_end, later_start) {
        GeometryValue::Point(earlier.1)
    } else if earlier_end < later_start {
        GeometryValue::Empty
    } else if earlier_end > later_end {
        GeometryValue::LineSegment(later.0, later.1)
    } else {
        GeometryValue::LineSegment(later.0, earlier.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_both_ways(a: GeometryValue, b: GeometryValue, expected: GeometryValue) {
        let ab = a.intersect(&b);
        let ba = b.intersect(&a);
        assert!(ab.approx_eq(&expected), "{a} ∩ {b} = {ab}, expected {expected}");
        assert!(ba.approx_eq(&expected), "{b} ∩ {a} = {ba}, expected {expected}");
    }

    #[test]
    fn empty_absorbs_every_kind() {
        let values = [
            GeometryValue::empty(),
            GeometryValue::point(1.0, 1.0),
            GeometryValue::line(1.0, 0.0),
            GeometryValue::vertical_line(2.0),
            GeometryValue::segment(0.0, 0.0, 1.0, 1.0),
        ];
        for value in values {
            assert_both_ways(value, GeometryValue::empty(), GeometryValue::empty());
        }
    }

    #[test]
    fn point_with_point() {
        let p = GeometryValue::point(1.0, 2.0);
        assert_both_ways(p, GeometryValue::point(1.000001, 2.0), p);
        assert_both_ways(p, GeometryValue::point(1.0, 2.1), GeometryValue::empty());
    }

    #[test]
    fn point_with_lines() {
        let p = GeometryValue::point(2.0, 5.0);
        assert_both_ways(p, GeometryValue::line(2.0, 1.0), p);
        assert_both_ways(p, GeometryValue::line(2.0, 0.0), GeometryValue::empty());
        assert_both_ways(p, GeometryValue::vertical_line(2.0), p);
        assert_both_ways(p, GeometryValue::vertical_line(3.0), GeometryValue::empty());
    }

    #[test]
    fn crossing_lines_meet_at_a_point() {
        assert_both_ways(
            GeometryValue::line(1.0, 0.0),
            GeometryValue::line(-1.0, 0.0),
            GeometryValue::point(0.0, 0.0),
        );
        assert_both_ways(
            GeometryValue::line(2.0, 1.0),
            GeometryValue::line(-1.0, 4.0),
            GeometryValue::point(1.0, 3.0),
        );
    }

    #[test]
    fn parallel_and_identical_lines() {
        assert_both_ways(GeometryValue::line(1.0, 0.0), GeometryValue::line(1.0, 1.0), GeometryValue::empty());
        let line = GeometryValue::line(0.5, 3.0);
        assert_both_ways(line, line, line);
    }

    #[test]
    fn line_with_vertical_line() {
        assert_both_ways(
            GeometryValue::line(1.0, 0.0),
            GeometryValue::vertical_line(2.0),
            GeometryValue::point(2.0, 2.0),
        );
    }

    #[test]
    fn vertical_lines() {
        let v = GeometryValue::vertical_line(1.0);
        assert_both_ways(v, GeometryValue::vertical_line(1.000001), v);
        assert_both_ways(v, GeometryValue::vertical_line(1.5), GeometryValue::empty());
    }

    #[test]
    fn point_with_segment_is_clipped_to_extent() {
        let segment = GeometryValue::segment(0.0, 0.0, 4.0, 4.0);
        assert_both_ways(GeometryValue::point(2.0, 2.0), segment, GeometryValue::point(2.0, 2.0));
        assert_both_ways(GeometryValue::point(4.0, 4.0), segment, GeometryValue::point(4.0, 4.0));
        assert_both_ways(GeometryValue::point(5.0, 5.0), segment, GeometryValue::empty());
        assert_both_ways(GeometryValue::point(2.0, 3.0), segment, GeometryValue::empty());
    }

    #[test]
    fn line_crossing_segment() {
        let segment = GeometryValue::segment(0.0, 0.0, 4.0, 0.0);
        assert_both_ways(GeometryValue::line(1.0, -2.0), segment, GeometryValue::point(2.0, 0.0));
        assert_both_ways(GeometryValue::line(1.0, -6.0), segment, GeometryValue::empty());
        assert_both_ways(GeometryValue::vertical_line(3.0), segment, GeometryValue::point(3.0, 0.0));
        assert_both_ways(GeometryValue::vertical_line(-1.0), segment, GeometryValue::empty());
    }

    #[test]
    fn line_containing_segment_yields_segment() {
        let segment = GeometryValue::segment(0.0, 1.0, 2.0, 5.0);
        assert_both_ways(GeometryValue::line(2.0, 1.0), segment, segment);

        let vertical = GeometryValue::segment(3.0, -1.0, 3.0, 2.0);
        assert_both_ways(GeometryValue::vertical_line(3.0), vertical, vertical);
    }

    #[test]
    fn unpreprocessed_segment_is_canonicalized() {
        let reversed = GeometryValue::segment(2.0, 5.0, 0.0, 1.0);
        assert_both_ways(
            GeometryValue::line(2.0, 1.0),
            reversed,
            GeometryValue::segment(0.0, 1.0, 2.0, 5.0),
        );
        assert_both_ways(
            GeometryValue::segment(1.0, 1.0, 1.0, 1.0),
            GeometryValue::line(1.0, 0.0),
            GeometryValue::point(1.0, 1.0),
        );
    }

    #[test]
    fn overlapping_horizontal_segments() {
        assert_both_ways(
            GeometryValue::segment(0.0, 0.0, 4.0, 0.0),
            GeometryValue::segment(2.0, 0.0, 6.0, 0.0),
            GeometryValue::segment(2.0, 0.0, 4.0, 0.0),
        );
    }

    #[test]
    fn contained_segment() {
        let inner = GeometryValue::segment(1.0, 1.0, 2.0, 2.0);
        assert_both_ways(GeometryValue::segment(0.0, 0.0, 5.0, 5.0), inner, inner);
        assert_both_ways(inner, inner, inner);
    }

    #[test]
    fn touching_and_disjoint_collinear_segments() {
        assert_both_ways(
            GeometryValue::segment(0.0, 0.0, 2.0, 2.0),
            GeometryValue::segment(2.0, 2.0, 3.0, 3.0),
            GeometryValue::point(2.0, 2.0),
        );
        assert_both_ways(
            GeometryValue::segment(0.0, 0.0, 1.0, 1.0),
            GeometryValue::segment(2.0, 2.0, 3.0, 3.0),
            GeometryValue::empty(),
        );
    }

    #[test]
    fn shared_start_keeps_the_shorter_segment() {
        assert_both_ways(
            GeometryValue::segment(0.0, 0.0, 3.0, 0.0),
            GeometryValue::segment(0.0, 0.0, 1.0, 0.0),
            GeometryValue::segment(0.0, 0.0, 1.0, 0.0),
        );
    }

    #[test]
    fn vertical_segments_compare_along_y() {
        assert_both_ways(
            GeometryValue::segment(1.0, 0.0, 1.0, 4.0),
            GeometryValue::segment(1.0, 3.0, 1.0, 8.0),
            GeometryValue::segment(1.0, 3.0, 1.0, 4.0),
        );
        assert_both_ways(
            GeometryValue::segment(1.0, 0.0, 1.0, 4.0),
            GeometryValue::segment(1.0, 4.0, 1.0, 8.0),
            GeometryValue::point(1.0, 4.0),
        );
        assert_both_ways(
            GeometryValue::segment(1.0, 0.0, 1.0, 4.0),
            GeometryValue::segment(1.0, 5.0, 1.0, 8.0),
            GeometryValue::empty(),
        );
    }

    #[test]
    fn crossing_segments() {
        assert_both_ways(
            GeometryValue::segment(0.0, 0.0, 4.0, 4.0),
            GeometryValue::segment(0.0, 4.0, 4.0, 0.0),
            GeometryValue::point(2.0, 2.0),
        );
        assert_both_ways(
            GeometryValue::segment(0.0, 0.0, 1.0, 1.0),
            GeometryValue::segment(0.0, 4.0, 4.0, 0.0),
            GeometryValue::empty(),
        );
        assert_both_ways(
            GeometryValue::segment(2.0, -1.0, 2.0, 1.0),
            GeometryValue::segment(0.0, 0.0, 4.0, 0.0),
            GeometryValue::point(2.0, 0.0),
        );
    }

    #[test]
    fn parallel_segments_on_distinct_lines() {
        assert_both_ways(
            GeometryValue::segment(0.0, 0.0, 4.0, 0.0),
            GeometryValue::segment(0.0, 1.0, 4.0, 1.0),
            GeometryValue::empty(),
        );
    }
}
