//! The position state threaded through each command while parsing path data.
use crate::{command::ID, geometry::Point};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
/// Where a path is up to after applying a command.
///
/// Command handlers take a cursor by value and return the cursor for the next command,
/// so the state of a parse is never shared between commands.
pub struct Cursor {
    /// The end point of the last command
    pub current: Point,
    /// Where the current subpath started, i.e. the last move
    pub subpath_start: Point,
    /// The trailing control point of the last curve
    pub last_control: Option<Point>,
    /// The command letter being applied
    pub command: Option<ID>,
    /// The command letter applied before the current one
    pub previous: Option<ID>,
}

impl Cursor {
    /// Resolves an operand pair into an absolute point for the active command
    pub fn resolve(&self, x: f64, y: f64) -> Point {
        if self.command.is_some_and(ID::is_relative) {
            self.current.offset(x, y)
        } else {
            Point::new(x, y)
        }
    }

    /// Resolves a single horizontal operand, holding `y` fixed
    pub fn resolve_x(&self, x: f64) -> Point {
        if self.command.is_some_and(ID::is_relative) {
            self.current.offset(x, 0.0)
        } else {
            Point::new(x, self.current.y())
        }
    }

    /// Resolves a single vertical operand, holding `x` fixed
    pub fn resolve_y(&self, y: f64) -> Point {
        if self.command.is_some_and(ID::is_relative) {
            self.current.offset(0.0, y)
        } else {
            Point::new(self.current.x(), y)
        }
    }

    /// The first control point of a shorthand curve.
    ///
    /// The last control point is mirrored through the current point when the previous
    /// command was of the same curve family, otherwise it's the current point.
    pub fn reflected_control(&self) -> Point {
        let same_family = match (self.command, self.previous) {
            (Some(command), Some(previous)) if command.is_cubic() => previous.is_cubic(),
            (Some(command), Some(previous)) if command.is_quadratic() => previous.is_quadratic(),
            _ => false,
        };
        match self.last_control {
            Some(control) if same_family => control.reflect(self.current),
            _ => self.current,
        }
    }

    #[must_use]
    /// Starts applying a command letter, remembering the last one
    pub fn begin(self, command: ID) -> Self {
        Self {
            previous: self.command,
            command: Some(command),
            ..self
        }
    }

    #[must_use]
    /// Returns the cursor after moving to a new subpath
    pub fn moved(self, to: Point) -> Self {
        Self {
            current: to,
            subpath_start: to,
            last_control: None,
            ..self
        }
    }

    #[must_use]
    /// Returns the cursor after drawing to a point, with an optional trailing control point
    pub fn drawn(self, to: Point, control: Option<Point>) -> Self {
        Self {
            current: to,
            last_control: control,
            ..self
        }
    }

    #[must_use]
    /// Returns the cursor after closing the subpath
    pub fn closed(self) -> Self {
        Self {
            current: self.subpath_start,
            last_control: None,
            ..self
        }
    }
}

#[test]
fn relative_resolution() {
    let cursor = Cursor::default()
        .moved(Point::new(10.0, 10.0))
        .begin(ID::LineBy);
    assert_eq!(cursor.resolve(1.0, 2.0), Point::new(11.0, 12.0));
    assert_eq!(cursor.resolve_x(-5.0), Point::new(5.0, 10.0));

    let cursor = cursor.begin(ID::VerticalLineTo);
    assert_eq!(cursor.resolve_y(3.0), Point::new(10.0, 3.0));
    assert_eq!(cursor.previous, Some(ID::LineBy));
}

#[test]
fn reflection_requires_same_family() {
    let cursor = Cursor::default()
        .begin(ID::CubicBezierTo)
        .drawn(Point::new(20.0, 10.0), Some(Point::new(10.0, 10.0)));
    assert_eq!(
        cursor.begin(ID::SmoothBezierTo).reflected_control(),
        Point::new(30.0, 10.0)
    );
    assert_eq!(
        cursor.begin(ID::SmoothQuadraticBezierTo).reflected_control(),
        Point::new(20.0, 10.0)
    );
}

#[test]
fn close_returns_to_start() {
    let cursor = Cursor::default()
        .moved(Point::new(1.0, 1.0))
        .drawn(Point::new(5.0, 5.0), None)
        .closed();
    assert_eq!(cursor.current, Point::new(1.0, 1.0));
}
