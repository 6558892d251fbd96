//! Definitions for the commands of path data.
use std::fmt::Write;

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A resolved drawing command of a [`Path`](crate::Path).
///
/// All points are absolute; relative, shorthand and arc commands of the path data are
/// expanded into one of these while parsing.
pub enum Command {
    /// Starts a new subpath at the point
    MoveTo(Point),
    /// A straight line from the current point
    LineTo(Point),
    /// A cubic bezier, as `[ctrl1, ctrl2, end]`
    CubicBezierTo([Point; 3]),
    /// A quadratic bezier, as `[ctrl, end]`
    QuadraticBezierTo([Point; 2]),
    /// Closes the current subpath
    ClosePath,
}

impl Command {
    /// Returns the point the command ends at, or `None` for [`Command::ClosePath`], which
    /// ends wherever the subpath started.
    pub fn end_point(&self) -> Option<Point> {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => Some(*point),
            Self::CubicBezierTo([.., end]) | Self::QuadraticBezierTo([_, end]) => Some(*end),
            Self::ClosePath => None,
        }
    }

    /// Returns the id for the serialized form of the command
    pub fn id(&self) -> ID {
        match self {
            Self::MoveTo(..) => ID::MoveTo,
            Self::LineTo(..) => ID::LineTo,
            Self::CubicBezierTo(..) => ID::CubicBezierTo,
            Self::QuadraticBezierTo(..) => ID::QuadraticBezierTo,
            Self::ClosePath => ID::ClosePath,
        }
    }

    /// Returns the points of the command, in the order they're serialized
    pub fn points(&self) -> &[Point] {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => std::slice::from_ref(point),
            Self::CubicBezierTo(points) => points,
            Self::QuadraticBezierTo(points) => points,
            Self::ClosePath => &[],
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.id().fmt(f)?;
        for (i, point) in self.points().iter().enumerate() {
            f.write_char(if i == 0 { ' ' } else { ',' })?;
            f.write_str(&format_number(point.x()))?;
            f.write_char(',')?;
            f.write_str(&format_number(point.y()))?;
        }
        Ok(())
    }
}

/// Formats a number with at most 3 fraction digits, trimming trailing zeros.
///
/// Non-finite values aren't representable in path data and are written as `0`.
pub fn format_number(n: f64) -> String {
    let rounded = (n * 1000.0).round() / 1000.0;
    if !rounded.is_finite() || rounded == 0.0 {
        return String::from("0");
    }
    if rounded.abs() >= 1e15 {
        // ryu switches to exponents at this size
        return format!("{rounded:.0}");
    }
    let mut s = ryu::Buffer::new().format_finite(rounded).to_owned();
    if let Some(integer) = s.strip_suffix(".0") {
        s.truncate(integer.len());
    }
    s
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A command letter of the path data mini-language
pub enum ID {
    /// M
    /// Move the current point to coordinate `x`, `y`. Any subsequent coordinate pair(s) are
    /// interpreted as parameter(s) for implicit absolute `LineTo` (L) command(s)
    MoveTo,
    /// m
    MoveBy,
    /// Z or z
    ClosePath,
    /// L
    LineTo,
    /// l
    LineBy,
    /// H
    HorizontalLineTo,
    /// h
    HorizontalLineBy,
    /// V
    VerticalLineTo,
    /// v
    VerticalLineBy,
    /// C
    CubicBezierTo,
    /// c
    CubicBezierBy,
    /// S
    SmoothBezierTo,
    /// s
    SmoothBezierBy,
    /// Q
    QuadraticBezierTo,
    /// q
    QuadraticBezierBy,
    /// T
    SmoothQuadraticBezierTo,
    /// t
    SmoothQuadraticBezierBy,
    /// A
    ArcTo,
    /// a
    ArcBy,
}

impl ID {
    /// Returns the number of operands a single instance of the command takes
    pub fn args(self) -> usize {
        match self {
            Self::ClosePath => 0,
            Self::HorizontalLineTo
            | Self::HorizontalLineBy
            | Self::VerticalLineTo
            | Self::VerticalLineBy => 1,
            Self::LineTo
            | Self::LineBy
            | Self::MoveTo
            | Self::MoveBy
            | Self::SmoothQuadraticBezierTo
            | Self::SmoothQuadraticBezierBy => 2,
            Self::SmoothBezierTo
            | Self::SmoothBezierBy
            | Self::QuadraticBezierTo
            | Self::QuadraticBezierBy => 4,
            Self::CubicBezierTo | Self::CubicBezierBy => 6,
            Self::ArcTo | Self::ArcBy => 7,
        }
    }

    /// Returns whether the operands are offsets from the current point
    pub fn is_relative(self) -> bool {
        matches!(
            self,
            Self::MoveBy
                | Self::LineBy
                | Self::HorizontalLineBy
                | Self::VerticalLineBy
                | Self::CubicBezierBy
                | Self::SmoothBezierBy
                | Self::QuadraticBezierBy
                | Self::SmoothQuadraticBezierBy
                | Self::ArcBy
        )
    }

    /// Returns whether the command is `C`, `c`, `S`, or `s`
    pub fn is_cubic(self) -> bool {
        matches!(
            self,
            Self::CubicBezierTo | Self::CubicBezierBy | Self::SmoothBezierTo | Self::SmoothBezierBy
        )
    }

    /// Returns whether the command is `Q`, `q`, `T`, or `t`
    pub fn is_quadratic(self) -> bool {
        matches!(
            self,
            Self::QuadraticBezierTo
                | Self::QuadraticBezierBy
                | Self::SmoothQuadraticBezierTo
                | Self::SmoothQuadraticBezierBy
        )
    }

    /// Returns whether the command is `A` or `a`
    pub fn is_arc(self) -> bool {
        matches!(self, Self::ArcTo | Self::ArcBy)
    }
}

impl TryFrom<char> for ID {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'M' => Ok(Self::MoveTo),
            'm' => Ok(Self::MoveBy),
            'L' => Ok(Self::LineTo),
            'l' => Ok(Self::LineBy),
            'H' => Ok(Self::HorizontalLineTo),
            'h' => Ok(Self::HorizontalLineBy),
            'V' => Ok(Self::VerticalLineTo),
            'v' => Ok(Self::VerticalLineBy),
            'C' => Ok(Self::CubicBezierTo),
            'c' => Ok(Self::CubicBezierBy),
            'S' => Ok(Self::SmoothBezierTo),
            's' => Ok(Self::SmoothBezierBy),
            'Q' => Ok(Self::QuadraticBezierTo),
            'q' => Ok(Self::QuadraticBezierBy),
            'T' => Ok(Self::SmoothQuadraticBezierTo),
            't' => Ok(Self::SmoothQuadraticBezierBy),
            'A' => Ok(Self::ArcTo),
            'a' => Ok(Self::ArcBy),
            'Z' | 'z' => Ok(Self::ClosePath),
            _ => Err(()),
        }
    }
}

impl From<ID> for char {
    fn from(value: ID) -> Self {
        match value {
            ID::MoveTo => 'M',
            ID::MoveBy => 'm',
            ID::ClosePath => 'Z',
            ID::LineTo => 'L',
            ID::LineBy => 'l',
            ID::HorizontalLineTo => 'H',
            ID::HorizontalLineBy => 'h',
            ID::VerticalLineTo => 'V',
            ID::VerticalLineBy => 'v',
            ID::CubicBezierTo => 'C',
            ID::CubicBezierBy => 'c',
            ID::SmoothBezierTo => 'S',
            ID::SmoothBezierBy => 's',
            ID::QuadraticBezierTo => 'Q',
            ID::QuadraticBezierBy => 'q',
            ID::SmoothQuadraticBezierTo => 'T',
            ID::SmoothQuadraticBezierBy => 't',
            ID::ArcTo => 'A',
            ID::ArcBy => 'a',
        }
    }
}

impl std::fmt::Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char((*self).into())
    }
}

#[test]
fn number_formatting() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(-0.0001), "0");
    assert_eq!(format_number(10.0), "10");
    assert_eq!(format_number(-2.5), "-2.5");
    assert_eq!(format_number(0.1 + 0.2), "0.3");
    assert_eq!(format_number(1.234_56), "1.235");
    assert_eq!(format_number(1e16), "10000000000000000");
    assert_eq!(format_number(f64::NAN), "0");
}

#[test]
fn command_display() {
    insta::assert_snapshot!(Command::MoveTo(Point::new(1.0, -2.5)), @"M 1,-2.5");
    insta::assert_snapshot!(
        Command::CubicBezierTo([Point::new(1.0, 2.0), Point::new(3.0, 4.0), Point::new(5.0, 6.0)]),
        @"C 1,2,3,4,5,6"
    );
    insta::assert_snapshot!(
        Command::QuadraticBezierTo([Point::new(0.5, 0.25), Point::new(1.0, 0.0)]),
        @"Q 0.5,0.25,1,0"
    );
    insta::assert_snapshot!(Command::ClosePath, @"Z");
}

#[test]
fn id_letters() {
    for letter in "MmLlHhVvCcSsQqTtAaZ".chars() {
        let id = ID::try_from(letter).unwrap();
        assert_eq!(char::from(id), letter);
    }
    assert_eq!(ID::try_from('z'), Ok(ID::ClosePath));
    assert!(ID::try_from('x').is_err());
    assert!(ID::ArcBy.is_relative());
    assert!(!ID::ArcTo.is_relative());
    assert!(ID::SmoothBezierBy.is_cubic());
    assert!(!ID::SmoothBezierBy.is_quadratic());
}
