//! Points and the ellipse maths used to approximate arcs with bezier curves.

/// The distance under which two points are considered the same while walking an arc.
pub const EPSILON: f64 = 0.005;

/// The distance of a cubic's control points from a quarter ellipse's end points, relative
/// to the radius, such that the curve approximates the ellipse.
pub const KAPPA: f64 = 0.552_284_749_830_793_5;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A coordinate in user space, as `[x, y]`
pub struct Point(pub [f64; 2]);

impl Point {
    /// The origin, `(0, 0)`
    pub const ORIGIN: Self = Self([0.0, 0.0]);

    /// Creates a point from it's coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self([x, y])
    }

    /// The horizontal coordinate
    pub const fn x(self) -> f64 {
        self.0[0]
    }

    /// The vertical coordinate
    pub const fn y(self) -> f64 {
        self.0[1]
    }

    #[must_use]
    /// Returns the point offset by the given amount
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self([self.0[0] + dx, self.0[1] + dy])
    }

    #[must_use]
    /// Mirrors `self` through `base`, i.e. `2 * base - self`
    pub fn reflect(self, base: Self) -> Self {
        Self([2.0 * base.0[0] - self.0[0], 2.0 * base.0[1] - self.0[1]])
    }

    /// The straight-line distance between two points
    pub fn distance(self, other: Self) -> f64 {
        f64::hypot(self.0[0] - other.0[0], self.0[1] - other.0[1])
    }

    /// Whether the points are within [`EPSILON`] of each other
    pub fn is_near(self, other: Self) -> bool {
        self.distance(other) <= EPSILON
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1]])
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self([self.0[0] - rhs.0[0], self.0[1] - rhs.0[1]])
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self([self.0[0] * rhs, self.0[1] * rhs])
    }
}

impl From<Point> for [f64; 2] {
    fn from(value: Point) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// An axis-aligned ellipse
pub struct Ellipse {
    /// The center of the ellipse
    pub center: Point,
    /// The horizontal and vertical radius
    pub radii: [f64; 2],
}

impl Ellipse {
    /// Recovers the ellipse passing through `from` and `to` given the endpoint
    /// parameterization of an arc.
    ///
    /// Of the two candidate centers, the one matching the flags is picked: when
    /// `large_arc` and `sweep` differ, the center lies to the left of the chord (in the
    /// direction of increasing angle).
    ///
    /// Radii too small to span the chord are scaled up uniformly until exactly one
    /// solution exists.
    ///
    /// Returns `None` when the end points coincide or a radius is zero.
    pub fn through(from: Point, to: Point, radii: [f64; 2], large_arc: bool, sweep: bool) -> Option<Self> {
        let [mut rx, mut ry] = radii.map(f64::abs);
        if rx == 0.0 || ry == 0.0 {
            return None;
        }

        let half_x = (from.x() - to.x()) / 2.0;
        let half_y = (from.y() - to.y()) / 2.0;

        let lambda = (half_x / rx).powi(2) + (half_y / ry).powi(2);
        if lambda > 1.0 {
            let scale = lambda.sqrt();
            rx *= scale;
            ry *= scale;
        }

        let denominator = (rx * half_y).powi(2) + (ry * half_x).powi(2);
        if denominator == 0.0 {
            return None;
        }
        let mut k = ((rx * ry).powi(2) / denominator - 1.0).max(0.0).sqrt();
        if large_arc == sweep {
            k = -k;
        }

        let center = Point([
            k * rx * half_y / ry + (from.x() + to.x()) / 2.0,
            -k * ry * half_x / rx + (from.y() + to.y()) / 2.0,
        ]);
        if !center.x().is_finite() || !center.y().is_finite() {
            return None;
        }
        Some(Self {
            center,
            radii: [rx, ry],
        })
    }

    /// The parametric angle of a point on (or near) the ellipse
    pub fn angle_of(&self, point: Point) -> f64 {
        let [rx, ry] = self.radii;
        f64::atan2(
            (point.y() - self.center.y()) / ry,
            (point.x() - self.center.x()) / rx,
        )
    }

    /// Samples the point of the ellipse at the given parametric angle
    pub fn point_at(&self, angle: f64) -> Point {
        let [rx, ry] = self.radii;
        let (sin, cos) = angle.sin_cos();
        self.center.offset(rx * cos, ry * sin)
    }

    /// The point of the ellipse at a multiple of 90°, where `0` is the right-most point
    /// and each increment moves in the direction of increasing angle.
    pub fn cardinal_point(&self, quadrant: i64) -> Point {
        let [rx, ry] = self.radii;
        match quadrant.rem_euclid(4) {
            0 => self.center.offset(rx, 0.0),
            1 => self.center.offset(0.0, ry),
            2 => self.center.offset(-rx, 0.0),
            _ => self.center.offset(0.0, -ry),
        }
    }
}

/// Finds the two control points of a cubic bezier from `start` to `end` which passes
/// through `first` at `t = 0.25` and `second` at `t = 0.75`.
///
/// The bezier basis at those parameters gives the system
///
/// ```text
/// 64 * first  - 27 * start - end      = 27 * c1 + 9 * c2
/// 64 * second - start      - 27 * end = 9 * c1 + 27 * c2
/// ```
///
/// which always has exactly one solution.
pub fn fit_cubic(start: Point, first: Point, second: Point, end: Point) -> [Point; 2] {
    let near_start = first * 64.0 - start * 27.0 - end;
    let near_end = second * 64.0 - start - end * 27.0;
    [
        (near_start * 3.0 - near_end) * (1.0 / 72.0),
        (near_end * 3.0 - near_start) * (1.0 / 72.0),
    ]
}

/// Finds the control point of a quadratic bezier from `start` to `end` which passes through
/// `middle` at `t = 0.5`
pub fn fit_quadratic(start: Point, middle: Point, end: Point) -> Point {
    middle * 2.0 - (start + end) * 0.5
}

/// Evaluates a cubic bezier at `t`
pub fn cubic_at(start: Point, c1: Point, c2: Point, end: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    start * (mt * mt * mt) + c1 * (3.0 * mt * mt * t) + c2 * (3.0 * mt * t * t) + end * (t * t * t)
}

/// Evaluates a quadratic bezier at `t`
pub fn quadratic_at(start: Point, control: Point, end: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    start * (mt * mt) + control * (2.0 * mt * t) + end * (t * t)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_8};

    use super::*;

    #[test]
    fn center_of_semicircle() {
        let ellipse = Ellipse::through(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            [5.0, 5.0],
            false,
            true,
        )
        .unwrap();
        assert_eq!(ellipse.center, Point::new(5.0, 0.0));
        assert_eq!(ellipse.radii, [5.0, 5.0]);
    }

    #[test]
    fn center_follows_flags() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(10.0, 10.0);
        let small_sweep = Ellipse::through(from, to, [10.0, 10.0], false, true).unwrap();
        let large_sweep = Ellipse::through(from, to, [10.0, 10.0], true, true).unwrap();
        let small_no_sweep = Ellipse::through(from, to, [10.0, 10.0], false, false).unwrap();

        assert!(small_sweep.center.distance(Point::new(0.0, 10.0)) < 1e-9);
        assert!(large_sweep.center.distance(Point::new(10.0, 0.0)) < 1e-9);
        assert_eq!(small_no_sweep.center, large_sweep.center);
    }

    #[test]
    fn scales_small_radii() {
        let ellipse = Ellipse::through(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            [1.0, 1.0],
            false,
            true,
        )
        .unwrap();
        assert!((ellipse.radii[0] - 5.0).abs() < 1e-9);
        assert!(ellipse.center.distance(Point::new(5.0, 0.0)) < 1e-9);
    }

    #[test]
    fn degenerate_ellipse() {
        let point = Point::new(3.0, 4.0);
        assert!(Ellipse::through(point, point, [1.0, 1.0], false, false).is_none());
        assert!(Ellipse::through(point, Point::ORIGIN, [0.0, 1.0], false, false).is_none());
    }

    #[test]
    fn fitted_cubic_passes_through_samples() {
        let ellipse = Ellipse {
            center: Point::new(3.0, -2.0),
            radii: [8.0, 3.0],
        };
        let (from, to) = (0.4, 1.6);
        let span = to - from;
        let start = ellipse.point_at(from);
        let first = ellipse.point_at(from + span * 0.25);
        let second = ellipse.point_at(from + span * 0.75);
        let end = ellipse.point_at(to);
        let [c1, c2] = fit_cubic(start, first, second, end);

        assert!(cubic_at(start, c1, c2, end, 0.25).distance(first) < 1e-9);
        assert!(cubic_at(start, c1, c2, end, 0.75).distance(second) < 1e-9);
    }

    #[test]
    fn fitted_quarter_circle() {
        let circle = Ellipse {
            center: Point::ORIGIN,
            radii: [1.0, 1.0],
        };
        let [c1, c2] = fit_cubic(
            circle.point_at(0.0),
            circle.point_at(FRAC_PI_8),
            circle.point_at(FRAC_PI_2 - FRAC_PI_8),
            circle.point_at(FRAC_PI_2),
        );
        // symmetric about the diagonal
        assert!((c1.x() - c2.y()).abs() < 1e-12);
        assert!((c1.y() - c2.x()).abs() < 1e-12);
        assert!((c1.y() - 0.532_596).abs() < 1e-6);

        let middle = cubic_at(circle.point_at(0.0), c1, c2, circle.point_at(FRAC_PI_2), 0.5);
        assert!((middle.distance(Point::ORIGIN) - 1.0).abs() < 0.004);
    }

    #[test]
    fn straight_samples_fit_a_line() {
        let [c1, c2] = fit_cubic(
            Point::ORIGIN,
            Point::new(1.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(4.0, 0.0),
        );
        assert!(c1.distance(Point::new(4.0 / 3.0, 0.0)) < 1e-12);
        assert!(c2.distance(Point::new(8.0 / 3.0, 0.0)) < 1e-12);
    }

    #[test]
    fn fitted_quadratic_passes_through_middle() {
        let start = Point::new(0.0, 0.0);
        let middle = Point::new(5.0, 5.0);
        let end = Point::new(10.0, 0.0);
        let control = fit_quadratic(start, middle, end);

        assert_eq!(control, Point::new(5.0, 10.0));
        assert_eq!(quadratic_at(start, control, end, 0.5), middle);
    }
}
