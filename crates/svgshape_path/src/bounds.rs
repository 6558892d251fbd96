//! Tight bounding boxes of paths.
use crate::{command::Command, geometry::Point, Path};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// An axis-aligned rectangle
pub struct Rect {
    /// The top-left corner
    pub min: Point,
    /// The bottom-right corner
    pub max: Point,
}

impl Rect {
    /// A rectangle containing only the given point
    pub fn from_point(point: Point) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// The horizontal size of the rectangle
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    /// The vertical size of the rectangle
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    #[must_use]
    /// Grows the rectangle to include the point
    pub fn include(self, point: Point) -> Self {
        Self {
            min: Point::new(self.min.x().min(point.x()), self.min.y().min(point.y())),
            max: Point::new(self.max.x().max(point.x()), self.max.y().max(point.y())),
        }
    }

    #[must_use]
    /// The smallest rectangle containing both rectangles
    pub fn union(self, other: Self) -> Self {
        self.include(other.min).include(other.max)
    }
}

impl Path {
    /// Returns the smallest rectangle containing every point drawn by the path, using the
    /// extrema of curves rather than their control points.
    ///
    /// Returns `None` for a path without commands.
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        let mut include = |point: Point| {
            bounds = Some(bounds.map_or(Rect::from_point(point), |rect| rect.include(point)));
        };

        let mut current = Point::ORIGIN;
        let mut subpath_start = Point::ORIGIN;
        for command in &self.0 {
            match *command {
                Command::MoveTo(point) => {
                    subpath_start = point;
                    include(point);
                }
                Command::LineTo(point) => include(point),
                Command::CubicBezierTo([c1, c2, end]) => {
                    for t in cubic_extrema(current, c1, c2, end) {
                        include(crate::geometry::cubic_at(current, c1, c2, end, t));
                    }
                    include(end);
                }
                Command::QuadraticBezierTo([control, end]) => {
                    for t in quadratic_extrema(current, control, end) {
                        include(crate::geometry::quadratic_at(current, control, end, t));
                    }
                    include(end);
                }
                Command::ClosePath => {}
            }
            current = command.end_point().unwrap_or(subpath_start);
        }
        bounds
    }
}

/// The parameters in `(0, 1)` where either coordinate of the cubic reaches an extreme
fn cubic_extrema(p0: Point, p1: Point, p2: Point, p3: Point) -> Vec<f64> {
    let mut result = Vec::with_capacity(4);
    for axis in 0..2 {
        let [p0, p1, p2, p3] = [p0.0[axis], p1.0[axis], p2.0[axis], p3.0[axis]];
        // derivative as `a t^2 + b t + c`, divided through by 3
        let a = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
        let b = 2.0 * (p0 - 2.0 * p1 + p2);
        let c = p1 - p0;
        if a.abs() < f64::EPSILON {
            if b.abs() > f64::EPSILON {
                result.push(-c / b);
            }
            continue;
        }
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            continue;
        }
        let root = discriminant.sqrt();
        result.push((-b + root) / (2.0 * a));
        result.push((-b - root) / (2.0 * a));
    }
    result.retain(|t| *t > 0.0 && *t < 1.0);
    result
}

/// The parameters in `(0, 1)` where either coordinate of the quadratic reaches an extreme
fn quadratic_extrema(p0: Point, p1: Point, p2: Point) -> Vec<f64> {
    (0..2)
        .filter_map(|axis| {
            let [p0, p1, p2] = [p0.0[axis], p1.0[axis], p2.0[axis]];
            let denominator = p0 - 2.0 * p1 + p2;
            if denominator.abs() < f64::EPSILON {
                return None;
            }
            Some((p0 - p1) / denominator)
        })
        .filter(|t| *t > 0.0 && *t < 1.0)
        .collect()
}
