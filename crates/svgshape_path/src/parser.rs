//! Parsing of path data into absolute commands.
//!
//! Parsing is best-effort. A command letter with the wrong number of operands is skipped,
//! an arc with a zero radius drops the rest of it's operands, and an unknown letter ends
//! the path; in each case the error is collected and the commands built so far are kept.
use svgshape_parse::{Parse, Parser};

use crate::{
    arc::Arc,
    command::{Command, ID},
    cursor::Cursor,
    geometry::Point,
    Path,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A problem found while parsing path data
pub enum Error {
    /// The operands following a command letter aren't a multiple of it's arity
    MalformedOperandCount {
        /// The command letter
        command: char,
        /// The number of operands each instance of the command takes
        expected: usize,
        /// The number of operands found
        found: usize,
        /// The byte offset of the command letter
        offset: usize,
    },
    /// A valid feature which can't be represented, and is ignored
    UnsupportedFeature {
        /// A description of the feature
        feature: &'static str,
        /// The byte offset of the command letter
        offset: usize,
    },
    /// An arc with a zero radius
    DegenerateArc {
        /// The byte offset of the command letter
        offset: usize,
    },
    /// A character found where a command letter was expected
    UnrecognizedCommand {
        /// The character found
        found: char,
        /// The byte offset of the character
        offset: usize,
    },
}

impl Error {
    /// The byte offset in the path data where the error was found
    pub fn offset(&self) -> usize {
        match self {
            Self::MalformedOperandCount { offset, .. }
            | Self::UnsupportedFeature { offset, .. }
            | Self::DegenerateArc { offset }
            | Self::UnrecognizedCommand { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedOperandCount {
                command,
                expected,
                found,
                offset,
            } => {
                if *expected == 0 {
                    write!(f, "`{command}` at {offset} takes no arguments, found {found}")
                } else {
                    write!(
                        f,
                        "`{command}` at {offset} expects a multiple of {expected} arguments, found {found}"
                    )
                }
            }
            Self::UnsupportedFeature { feature, offset } => {
                write!(f, "Unsupported {feature} at {offset} was ignored")
            }
            Self::DegenerateArc { offset } => {
                write!(f, "Arc at {offset} has a zero radius")
            }
            Self::UnrecognizedCommand { found, offset } => {
                write!(f, "Expected a path command at {offset}, found `{found}`")
            }
        }
    }
}

impl std::error::Error for Error {}

#[derive(Default)]
pub(crate) struct PathParser {
    commands: Vec<Command>,
    errors: Vec<Error>,
}

impl PathParser {
    /// Parses the definition, returning every command that could be built
    pub fn parse(mut self, definition: &str) -> (Path, Vec<Error>) {
        let mut input = Parser::new(definition);
        let mut cursor = Cursor::default();
        loop {
            input.skip_whitespace();
            let offset = input.cursor();
            let Ok(letter) = input.read() else {
                break;
            };
            let Ok(id) = ID::try_from(letter) else {
                self.errors.push(Error::UnrecognizedCommand {
                    found: letter,
                    offset,
                });
                break;
            };

            let operands = Self::read_operands(&mut input, id);
            let arity = id.args();
            let is_malformed = if arity == 0 {
                !operands.is_empty()
            } else {
                operands.is_empty() || operands.len() % arity != 0
            };
            if is_malformed {
                self.errors.push(Error::MalformedOperandCount {
                    command: letter,
                    expected: arity,
                    found: operands.len(),
                    offset,
                });
                continue;
            }

            if arity == 0 {
                cursor = self.apply(cursor.begin(id), &[], offset).unwrap_or(cursor);
                continue;
            }
            for (i, args) in operands.chunks_exact(arity).enumerate() {
                let id = match id {
                    ID::MoveTo if i > 0 => ID::LineTo,
                    ID::MoveBy if i > 0 => ID::LineBy,
                    id => id,
                };
                match self.apply(cursor.begin(id), args, offset) {
                    Some(next) => cursor = next,
                    None => break,
                }
            }
        }
        (Path(self.commands), self.errors)
    }

    /// Collects the operands following a command letter, stopping at anything that isn't
    /// a number.
    fn read_operands(input: &mut Parser<'_>, id: ID) -> Vec<f64> {
        let mut operands = Vec::with_capacity(id.args());
        loop {
            let checkpoint = input.cursor();
            if operands.is_empty() {
                input.skip_whitespace();
            } else {
                input.skip_separator();
            }
            let operand = if id.is_arc() && matches!(operands.len() % 7, 3 | 4) {
                input
                    .try_parse(|input| match input.read() {
                        Ok('0') => Ok(0.0),
                        Ok('1') => Ok(1.0),
                        _ => Err(()),
                    })
                    .ok()
            } else {
                f64::parse(input).ok()
            };
            match operand {
                Some(operand) => operands.push(operand),
                None => {
                    input.rewind_to(checkpoint);
                    return operands;
                }
            }
        }
    }

    /// Applies a single instance of a command, returning `None` when the remaining
    /// instances of the command letter should be dropped.
    fn apply(&mut self, cursor: Cursor, args: &[f64], offset: usize) -> Option<Cursor> {
        let id = cursor.command?;
        if self.commands.is_empty() && !matches!(id, ID::MoveTo | ID::MoveBy) {
            self.commands.push(Command::MoveTo(Point::ORIGIN));
        }
        let next = match id {
            ID::MoveTo | ID::MoveBy => {
                let to = cursor.resolve(args[0], args[1]);
                self.commands.push(Command::MoveTo(to));
                cursor.moved(to)
            }
            ID::LineTo | ID::LineBy => self.line_to(cursor, cursor.resolve(args[0], args[1])),
            ID::HorizontalLineTo | ID::HorizontalLineBy => {
                self.line_to(cursor, cursor.resolve_x(args[0]))
            }
            ID::VerticalLineTo | ID::VerticalLineBy => {
                self.line_to(cursor, cursor.resolve_y(args[0]))
            }
            ID::CubicBezierTo | ID::CubicBezierBy => {
                let ctrl1 = cursor.resolve(args[0], args[1]);
                self.cubic_to(cursor, ctrl1, &args[2..])
            }
            ID::SmoothBezierTo | ID::SmoothBezierBy => {
                self.cubic_to(cursor, cursor.reflected_control(), args)
            }
            ID::QuadraticBezierTo | ID::QuadraticBezierBy => {
                let ctrl = cursor.resolve(args[0], args[1]);
                self.quadratic_to(cursor, ctrl, &args[2..])
            }
            ID::SmoothQuadraticBezierTo | ID::SmoothQuadraticBezierBy => {
                self.quadratic_to(cursor, cursor.reflected_control(), args)
            }
            ID::ArcTo | ID::ArcBy => self.arc_to(cursor, args, offset)?,
            ID::ClosePath => {
                self.commands.push(Command::ClosePath);
                cursor.closed()
            }
        };
        Some(next)
    }

    fn line_to(&mut self, cursor: Cursor, to: Point) -> Cursor {
        self.commands.push(Command::LineTo(to));
        cursor.drawn(to, None)
    }

    fn cubic_to(&mut self, cursor: Cursor, ctrl1: Point, args: &[f64]) -> Cursor {
        let ctrl2 = cursor.resolve(args[0], args[1]);
        let to = cursor.resolve(args[2], args[3]);
        self.commands.push(Command::CubicBezierTo([ctrl1, ctrl2, to]));
        cursor.drawn(to, Some(ctrl2))
    }

    fn quadratic_to(&mut self, cursor: Cursor, ctrl: Point, args: &[f64]) -> Cursor {
        let to = cursor.resolve(args[0], args[1]);
        self.commands.push(Command::QuadraticBezierTo([ctrl, to]));
        cursor.drawn(to, Some(ctrl))
    }

    fn arc_to(&mut self, cursor: Cursor, args: &[f64], offset: usize) -> Option<Cursor> {
        let &[rx, ry, rotation, large_arc, sweep, x, y] = args else {
            return None;
        };
        if rx == 0.0 || ry == 0.0 {
            self.errors.push(Error::DegenerateArc { offset });
            return None;
        }
        if rotation != 0.0 {
            self.errors.push(Error::UnsupportedFeature {
                feature: "arc rotation",
                offset,
            });
        }
        let to = cursor.resolve(x, y);
        let arc = Arc {
            from: cursor.current,
            to,
            radii: [rx, ry],
            large_arc: large_arc != 0.0,
            sweep: sweep != 0.0,
        };
        self.commands.extend(arc.to_curves());
        Some(cursor.drawn(to, None))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(definition: &str) -> (Path, Vec<Error>) {
        PathParser::default().parse(definition)
    }

    #[test]
    fn implicit_repeats() {
        let (path, errors) = parse("M 0 0 10 0 10,10 l-5-5");
        assert!(errors.is_empty());
        assert_eq!(
            path.0,
            vec![
                Command::MoveTo(Point::new(0.0, 0.0)),
                Command::LineTo(Point::new(10.0, 0.0)),
                Command::LineTo(Point::new(10.0, 10.0)),
                Command::LineTo(Point::new(5.0, 5.0)),
            ]
        );
    }

    #[test]
    fn smooth_cubic_reflects_previous_cubic() {
        let (path, errors) = parse("M0,0 C10,0,10,10,20,10 S30,20,40,20");
        assert!(errors.is_empty());
        assert_eq!(
            path.0[2],
            Command::CubicBezierTo([
                Point::new(30.0, 10.0),
                Point::new(30.0, 20.0),
                Point::new(40.0, 20.0)
            ])
        );
    }

    #[test]
    fn smooth_cubic_falls_back_to_current_point() {
        let (path, _) = parse("M0,0 L5,5 S10,0,15,5");
        let Command::CubicBezierTo([ctrl1, ..]) = path.0[2] else {
            panic!("expected cubic, found {:?}", path.0[2]);
        };
        assert_eq!(ctrl1, Point::new(5.0, 5.0));

        // an arc isn't a cubic, even though it's drawn as one
        let (path, _) = parse("M0,0 A5,5,0,0,1,10,0 s1,1,2,2");
        let Some(Command::CubicBezierTo([ctrl1, ..])) = path.0.last() else {
            panic!("expected cubic, found {:?}", path.0.last());
        };
        assert_eq!(*ctrl1, Point::new(10.0, 0.0));
    }

    #[test]
    fn smooth_quadratic_chain() {
        let (path, errors) = parse("M0,0 Q5,5,10,0 T20,0 T30,0");
        assert!(errors.is_empty());
        assert_eq!(
            path.0[2..],
            [
                Command::QuadraticBezierTo([Point::new(15.0, -5.0), Point::new(20.0, 0.0)]),
                Command::QuadraticBezierTo([Point::new(25.0, 5.0), Point::new(30.0, 0.0)]),
            ]
        );
    }

    #[test]
    fn close_path_resets_current_point() {
        let (path, _) = parse("m10,10 h5 v5 z l1,1");
        assert_eq!(path.0.last(), Some(&Command::LineTo(Point::new(11.0, 11.0))));
    }

    #[test]
    fn implicit_move_to() {
        let (path, errors) = parse("L10,10");
        assert!(errors.is_empty());
        assert_eq!(
            path.0,
            vec![
                Command::MoveTo(Point::ORIGIN),
                Command::LineTo(Point::new(10.0, 10.0)),
            ]
        );
    }

    #[test]
    fn malformed_operand_count_skips_command() {
        let (path, errors) = parse("M0,0 L10 H5 V5");
        assert_eq!(
            errors,
            vec![Error::MalformedOperandCount {
                command: 'L',
                expected: 2,
                found: 1,
                offset: 5,
            }]
        );
        assert_eq!(
            path.0,
            vec![
                Command::MoveTo(Point::ORIGIN),
                Command::LineTo(Point::new(5.0, 0.0)),
                Command::LineTo(Point::new(5.0, 5.0)),
            ]
        );

        let (_, errors) = parse("M0,0 Z 1");
        assert!(matches!(
            errors[..],
            [Error::MalformedOperandCount { expected: 0, .. }]
        ));
    }

    #[test]
    fn unrecognized_command_stops() {
        let (path, errors) = parse("M0,0 L1,1 X 2,2 L3,3");
        assert_eq!(
            errors,
            vec![Error::UnrecognizedCommand {
                found: 'X',
                offset: 10
            }]
        );
        assert_eq!(path.0.len(), 2);

        let (path, errors) = parse("0,0");
        assert!(path.0.is_empty());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn degenerate_arc_drops_remaining_groups() {
        let (path, errors) = parse("M0,0 A0,5,0,0,1,10,0 5,5,0,0,1,20,0 L1,1");
        assert_eq!(errors, vec![Error::DegenerateArc { offset: 5 }]);
        assert_eq!(
            path.0,
            vec![
                Command::MoveTo(Point::ORIGIN),
                Command::LineTo(Point::new(1.0, 1.0)),
            ]
        );
    }

    #[test]
    fn rotated_arc_is_reported() {
        let (path, errors) = parse("M0,0 A5,5,30,0,1,10,0");
        assert_eq!(
            errors,
            vec![Error::UnsupportedFeature {
                feature: "arc rotation",
                offset: 5
            }]
        );
        assert_eq!(path.0.len(), 3);
        assert_eq!(
            path.0.last().and_then(Command::end_point),
            Some(Point::new(10.0, 0.0))
        );
    }

    #[test]
    fn compact_arc_flags() {
        let (compact, errors) = parse("M0,0 a5 5 0 0110 0");
        assert!(errors.is_empty());
        let (spaced, _) = parse("M0,0 a5 5 0 0 1 10 0");
        assert_eq!(compact, spaced);
    }

    #[test]
    fn arc_to_current_point_is_omitted() {
        let (path, errors) = parse("M5,5 A5,5,0,0,1,5,5");
        assert!(errors.is_empty());
        assert_eq!(path.0, vec![Command::MoveTo(Point::new(5.0, 5.0))]);
    }
}
