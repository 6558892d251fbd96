//! Approximation of elliptical arcs with bezier curves.
//!
//! The arc is walked from it's start angle to it's end angle, stopping at every cardinal
//! point of the ellipse along the way, so that each step covers at most 90°. Each step is
//! then fitted with a cubic passing through the ellipse a quarter and three quarters of the
//! way along the step.
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::{
    command::Command,
    geometry::{fit_cubic, fit_quadratic, Ellipse, Point},
};

/// Steps spanning less than this many radians are fitted with a quadratic instead.
const QUADRATIC_SPAN: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
/// An axis-aligned arc in endpoint parameterization
pub struct Arc {
    /// The current point the arc starts at
    pub from: Point,
    /// The point the arc ends at
    pub to: Point,
    /// The radii of the ellipse, as `[rx, ry]`
    pub radii: [f64; 2],
    /// Whether the arc should span more than 180°
    pub large_arc: bool,
    /// Whether the arc is drawn in the direction of increasing angle
    pub sweep: bool,
}

impl Arc {
    /// Converts the arc into curves ending exactly at [`Arc::to`].
    ///
    /// An arc that starts and ends at the same point produces no commands.
    pub fn to_curves(&self) -> Vec<Command> {
        let Some(ellipse) = Ellipse::through(
            self.from,
            self.to,
            self.radii,
            self.large_arc,
            self.sweep,
        ) else {
            log::debug!("omitting arc with no center: {self:?}");
            return vec![];
        };

        let start = ellipse.angle_of(self.from);
        let mut delta = ellipse.angle_of(self.to) - start;
        if self.sweep && delta < 0.0 {
            delta += TAU;
        } else if !self.sweep && delta > 0.0 {
            delta -= TAU;
        }
        if !delta.is_finite() {
            return vec![];
        }
        // a small arc sweeping most of the ellipse has wrapped around from rounding
        if delta == 0.0 || (!self.large_arc && delta.abs() > 1.5 * PI) {
            log::debug!("arc is too small to measure, drawing a line: {self:?}");
            return vec![Command::LineTo(self.to)];
        }

        let end = start + delta;
        let mut curves = Vec::with_capacity(5);
        let mut angle = start;
        let mut point = self.from;
        loop {
            let (cardinal_angle, cardinal_point) =
                Self::next_cardinal(&ellipse, angle, point, self.sweep);
            let reaches_end = if self.sweep {
                cardinal_angle >= end
            } else {
                cardinal_angle <= end
            };
            if reaches_end || cardinal_point.is_near(self.to) {
                curves.push(Self::step(&ellipse, angle, end, point, self.to));
                break;
            }
            curves.push(Self::step(&ellipse, angle, cardinal_angle, point, cardinal_point));
            angle = cardinal_angle;
            point = cardinal_point;
        }
        curves
    }

    /// Finds the next cardinal point of the ellipse in the sweep direction, skipping any
    /// cardinal point that `point` is already on.
    fn next_cardinal(ellipse: &Ellipse, angle: f64, point: Point, sweep: bool) -> (f64, Point) {
        let direction = if sweep { 1 } else { -1 };
        let mut quadrant = if sweep {
            (angle / FRAC_PI_2).floor() as i64 + 1
        } else {
            (angle / FRAC_PI_2).ceil() as i64 - 1
        };
        let mut cardinal_point = ellipse.cardinal_point(quadrant);
        if cardinal_point.is_near(point) {
            quadrant += direction;
            cardinal_point = ellipse.cardinal_point(quadrant);
        }
        (quadrant as f64 * FRAC_PI_2, cardinal_point)
    }

    /// Fits a single step of at most 90° of the ellipse
    fn step(ellipse: &Ellipse, from_angle: f64, to_angle: f64, from: Point, to: Point) -> Command {
        let span = to_angle - from_angle;
        if span.abs() < QUADRATIC_SPAN {
            let middle = ellipse.point_at(from_angle + span * 0.5);
            return Command::QuadraticBezierTo([fit_quadratic(from, middle, to), to]);
        }
        let [c1, c2] = fit_cubic(
            from,
            ellipse.point_at(from_angle + span * 0.25),
            ellipse.point_at(from_angle + span * 0.75),
            to,
        );
        Command::CubicBezierTo([c1, c2, to])
    }
}
