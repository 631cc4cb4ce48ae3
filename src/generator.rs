// src/generator.rs

use rand::Rng;

use crate::geometry::{GeometryValue, ValueKind};

const KINDS: [ValueKind; 5] = [
    ValueKind::Empty,
    ValueKind::Point,
    ValueKind::Line,
    ValueKind::VerticalLine,
    ValueKind::LineSegment,
];

/// Produces random geometric values with coordinates in `[-extent, extent)`.
pub struct ValueGenerator {
    extent: f64,
}

impl ValueGenerator {
    pub fn new(extent: f64) -> Self {
        Self { extent: extent.abs().max(1.0) }
    }

    fn coordinate(&self, rng: &mut impl Rng) -> f64 {
        rng.gen_range(-self.extent..self.extent)
    }

    pub fn generate_of_kind(&self, kind: ValueKind, rng: &mut impl Rng) -> GeometryValue {
        match kind {
            ValueKind::Empty => GeometryValue::empty(),
            ValueKind::Point => GeometryValue::point(self.coordinate(rng), self.coordinate(rng)),
            // slopes stay moderate so intercepts remain comparable to the extent
            ValueKind::Line => GeometryValue::line(rng.gen_range(-4.0..4.0), self.coordinate(rng)),
            ValueKind::VerticalLine => GeometryValue::vertical_line(self.coordinate(rng)),
            ValueKind::LineSegment => GeometryValue::segment(
                self.coordinate(rng),
                self.coordinate(rng),
                self.coordinate(rng),
                self.coordinate(rng),
            ),
        }
    }

    pub fn generate(&self, rng: &mut impl Rng) -> GeometryValue {
        let kind = KINDS[rng.gen_range(0..KINDS.len())];
        self.generate_of_kind(kind, rng)
    }

    /// A random point that lies on `value`, or `None` for `Empty`. Used to
    /// build pairs that actually touch.
    pub fn point_on(&self, value: &GeometryValue, rng: &mut impl Rng) -> Option<GeometryValue> {
        match *value {
            GeometryValue::Empty => None,
            GeometryValue::Point(p) => Some(GeometryValue::Point(p)),
            GeometryValue::Line { slope, intercept } => {
                let x = self.coordinate(rng);
                Some(GeometryValue::point(x, slope * x + intercept))
            }
            GeometryValue::VerticalLine(x) => Some(GeometryValue::point(x, self.coordinate(rng))),
            GeometryValue::LineSegment(start, end) => {
                let t: f64 = rng.gen_range(0.0..=1.0);
                Some(GeometryValue::Point(start.lerp(end, t)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_values_respect_kind_and_extent() {
        let generator = ValueGenerator::new(5.0);
        let mut rng = StdRng::seed_from_u64(7);
        for kind in KINDS {
            let value = generator.generate_of_kind(kind, &mut rng);
            assert_eq!(value.kind(), kind);
            if let GeometryValue::Point(p) = value {
                assert!(p.x.abs() <= 5.0 && p.y.abs() <= 5.0);
            }
        }
    }

    #[test]
    fn point_on_lies_on_the_value() {
        let generator = ValueGenerator::new(10.0);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let value = generator.generate(&mut rng);
            match generator.point_on(&value, &mut rng) {
                Some(point) => assert!(point.intersect(&value).approx_eq(&point), "{point} not on {value}"),
                None => assert_eq!(value, GeometryValue::empty()),
            }
        }
    }
}
