//! Analytic signed distance to a single primitive.

use umbra_core::Vec2;

/// A primitive whose signed distance can be evaluated at any point.
///
/// Negative inside, non-negative outside. Degenerate parameters
/// (zero-length segment, zero radius, empty rectangle) are accepted and
/// give well-defined values: a zero-length segment behaves as a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Line segment from `a` to `b`. Has no interior.
    Line {
        /// First endpoint.
        a: Vec2,
        /// Second endpoint.
        b: Vec2,
    },
    /// Disc of `radius` around `centre`.
    Circle {
        /// Centre point.
        centre: Vec2,
        /// Radius in cell units.
        radius: f32,
    },
    /// Axis-aligned rectangle spanning `min..max`.
    Rect {
        /// Minimum corner.
        min: Vec2,
        /// Maximum corner.
        max: Vec2,
    },
}

impl Shape {
    /// Line segment from `a` to `b`.
    pub fn line(a: Vec2, b: Vec2) -> Self {
        Shape::Line { a, b }
    }

    /// Circle of `radius` around `centre`.
    pub fn circle(centre: Vec2, radius: f32) -> Self {
        Shape::Circle { centre, radius }
    }

    /// Axis-aligned rectangle from `min` to `max`.
    pub fn rect(min: Vec2, max: Vec2) -> Self {
        Shape::Rect { min, max }
    }

    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Line { .. } => "line",
            Shape::Circle { .. } => "circle",
            Shape::Rect { .. } => "rect",
        }
    }

    /// Whether every parameter is finite.
    pub fn is_finite(&self) -> bool {
        match *self {
            Shape::Line { a, b } => a.is_finite() && b.is_finite(),
            Shape::Circle { centre, radius } => centre.is_finite() && radius.is_finite(),
            Shape::Rect { min, max } => min.is_finite() && max.is_finite(),
        }
    }

    /// Axis-aligned bounding box `(min, max)` of the primitive.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        match *self {
            Shape::Line { a, b } => (a.min(b), a.max(b)),
            Shape::Circle { centre, radius } => {
                let r = Vec2::new(radius, radius);
                (centre - r, centre + r)
            }
            Shape::Rect { min, max } => (min, max),
        }
    }

    /// Signed distance from `p` to the primitive's boundary.
    pub fn signed_distance(&self, p: Vec2) -> f32 {
        match *self {
            Shape::Line { a, b } => segment_distance(p, a, b),
            Shape::Circle { centre, radius } => (p - centre).length() - radius,
            Shape::Rect { min, max } => rect_distance(p, min, max),
        }
    }
}

fn segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let len = (b - a).length();
    let dir = (b - a).normalize();
    let t = (p - a).dot(dir).clamp(0.0, len);
    (p - (a + dir * t)).length()
}

/// Inside, the nearest edge is picked by comparing the two axis gaps and
/// the distance is that gap. Outside, it is the distance to the clamped
/// closest point.
fn rect_distance(p: Vec2, min: Vec2, max: Vec2) -> f32 {
    let centre = (min + max) * 0.5;
    let half = (max - min) * 0.5;
    let offset = p - centre;
    let abs = offset.abs();

    if abs.x < half.x && abs.y < half.y {
        let gap = half - abs;
        -gap.x.min(gap.y)
    } else {
        let closest = offset.clamp(-half, half);
        (offset - closest).length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn circle_sign_convention() {
        let c = Shape::circle(Vec2::new(8.0, 8.0), 4.0);
        assert_relative_eq!(c.signed_distance(Vec2::new(8.0, 8.0)), -4.0);
        assert_relative_eq!(c.signed_distance(Vec2::new(12.0, 8.0)), 0.0);
        assert_relative_eq!(c.signed_distance(Vec2::new(14.0, 8.0)), 2.0);
    }

    #[test]
    fn segment_clamps_to_endpoints() {
        let l = Shape::line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_relative_eq!(l.signed_distance(Vec2::new(5.0, 3.0)), 3.0);
        assert_relative_eq!(l.signed_distance(Vec2::new(-3.0, 4.0)), 5.0);
        assert_relative_eq!(l.signed_distance(Vec2::new(13.0, 0.0)), 3.0);
    }

    #[test]
    fn zero_length_segment_is_a_point() {
        let l = Shape::line(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0));
        assert_relative_eq!(l.signed_distance(Vec2::new(5.0, 6.0)), 5.0);
    }

    #[test]
    fn rect_inside_uses_nearer_axis_gap() {
        let r = Shape::rect(Vec2::new(0.0, 0.0), Vec2::new(10.0, 4.0));
        // gaps: x = 3, y = 1
        assert_relative_eq!(r.signed_distance(Vec2::new(3.0, 1.0)), -1.0);
        // gaps: x = 0.5, y = 2
        assert_relative_eq!(r.signed_distance(Vec2::new(9.5, 2.0)), -0.5);
    }

    #[test]
    fn rect_outside_is_euclidean() {
        let r = Shape::rect(Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0));
        assert_relative_eq!(r.signed_distance(Vec2::new(7.0, 8.0)), 5.0);
        assert_relative_eq!(r.signed_distance(Vec2::new(2.0, -1.5)), 1.5);
    }

    #[test]
    fn rect_boundary_counts_as_outside() {
        let r = Shape::rect(Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0));
        assert_relative_eq!(r.signed_distance(Vec2::new(4.0, 2.0)), 0.0);
    }

    #[test]
    fn bounds_cover_primitive() {
        let c = Shape::circle(Vec2::new(5.0, 6.0), 2.0);
        assert_eq!(c.bounds(), (Vec2::new(3.0, 4.0), Vec2::new(7.0, 8.0)));
        let l = Shape::line(Vec2::new(9.0, 1.0), Vec2::new(2.0, 5.0));
        assert_eq!(l.bounds(), (Vec2::new(2.0, 1.0), Vec2::new(9.0, 5.0)));
    }

    #[test]
    fn non_finite_parameters_are_detected() {
        assert!(Shape::circle(Vec2::new(1.0, 1.0), 2.0).is_finite());
        assert!(!Shape::circle(Vec2::new(f32::NAN, 1.0), 2.0).is_finite());
        assert!(!Shape::line(Vec2::ZERO, Vec2::new(f32::INFINITY, 0.0)).is_finite());
    }
}
