//! SVGShape Path is a library for reading SVG path data into absolute drawing commands and
//! writing them back out.
//!
//! Use the [Path](Path) struct for parsing and serializing. Every command of the path data
//! is resolved into one of the five [commands](command::Command): relative operands are
//! made absolute, shorthand curves get their reflected control points, and elliptical arcs
//! are approximated with bezier curves.
//!
//! Serializing is a one-way canonicalization: arcs, once approximated, are written as curves.
//!
//! ```
//! use svgshape_path::Path;
//!
//! let path = Path::parse("m10 10 h10 v10 z");
//! assert_eq!(path.to_string(), "M 10,10 L 20,10 L 20,20 Z");
//! ```
use itertools::Itertools;

pub mod arc;
pub mod bounds;
pub mod command;
pub mod cursor;
pub mod geometry;
pub mod parser;

use crate::{
    command::Command,
    geometry::{Point, KAPPA},
    parser::PathParser,
};

#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A path is a set of commands
pub struct Path(pub Vec<Command>);

/// A destination for the commands of a path, such as a platform's drawing API.
pub trait PathBuilder {
    /// Starts a new subpath
    fn move_to(&mut self, to: Point);
    /// Draws a straight line
    fn line_to(&mut self, to: Point);
    /// Draws a cubic bezier
    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point);
    /// Draws a quadratic bezier
    fn quad_to(&mut self, ctrl: Point, to: Point);
    /// Closes the current subpath
    fn close(&mut self);
}

impl Path {
    /// Parses path data, keeping every command up to the first unrecognized character.
    ///
    /// Any problems found are logged as warnings; use [`Path::parse_with_errors`] to
    /// handle them instead.
    pub fn parse(definition: &str) -> Self {
        let (path, errors) = Self::parse_with_errors(definition);
        for error in errors {
            log::warn!("{error}");
        }
        path
    }

    /// Parses path data, returning the path that could be built along with any problems
    /// found along the way.
    pub fn parse_with_errors(definition: &str) -> (Self, Vec<parser::Error>) {
        PathParser::default().parse(definition)
    }

    /// Builds an axis-aligned ellipse from four quarter curves, starting at the right-most
    /// point and drawn in the direction of increasing angle.
    pub fn ellipse(center: Point, radii: [f64; 2]) -> Self {
        let [rx, ry] = radii;
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);
        let right = center.offset(rx, 0.0);
        let bottom = center.offset(0.0, ry);
        let left = center.offset(-rx, 0.0);
        let top = center.offset(0.0, -ry);
        Self(vec![
            Command::MoveTo(right),
            Command::CubicBezierTo([right.offset(0.0, ky), bottom.offset(kx, 0.0), bottom]),
            Command::CubicBezierTo([bottom.offset(-kx, 0.0), left.offset(0.0, ky), left]),
            Command::CubicBezierTo([left.offset(0.0, -ky), top.offset(-kx, 0.0), top]),
            Command::CubicBezierTo([top.offset(kx, 0.0), right.offset(0.0, -ky), right]),
            Command::ClosePath,
        ])
    }

    /// Returns the point a following command would start from.
    ///
    /// After a [`Command::ClosePath`] this is where the subpath started.
    pub fn current_point(&self) -> Option<Point> {
        let last = self.0.last()?;
        if let Some(point) = last.end_point() {
            return Some(point);
        }
        self.0.iter().rev().find_map(|command| match command {
            Command::MoveTo(point) => Some(*point),
            _ => None,
        })
    }

    /// Replays each command into the builder
    pub fn build(&self, builder: &mut impl PathBuilder) {
        for command in &self.0 {
            match *command {
                Command::MoveTo(to) => builder.move_to(to),
                Command::LineTo(to) => builder.line_to(to),
                Command::CubicBezierTo([ctrl1, ctrl2, to]) => builder.cubic_to(ctrl1, ctrl2, to),
                Command::QuadraticBezierTo([ctrl, to]) => builder.quad_to(ctrl, to),
                Command::ClosePath => builder.close(),
            }
        }
    }
}

impl std::str::FromStr for Path {
    type Err = parser::Error;

    /// Parses path data, failing on the first problem found
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, errors) = Self::parse_with_errors(s);
        match errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(path),
        }
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().format(" "))
    }
}

impl From<&Path> for String {
    fn from(value: &Path) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[ctor::ctor]
fn init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}
