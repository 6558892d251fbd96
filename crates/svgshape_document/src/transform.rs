//! Parsing and composition of `transform` lists.
use svgshape_parse::{error::Error, Parse, Parser};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// An affine transform, as the matrix
///
/// ```text
/// | a c tx |
/// | b d ty |
/// | 0 0 1  |
/// ```
pub struct Transform {
    /// Horizontal scale
    pub a: f64,
    /// Vertical skew
    pub b: f64,
    /// Horizontal skew
    pub c: f64,
    /// Vertical scale
    pub d: f64,
    /// Horizontal translation
    pub tx: f64,
    /// Vertical translation
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The transform that changes nothing
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Creates a transform from it's matrix components
    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// A translation
    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// A scale about the origin
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// A rotation about the origin, in degrees
    pub fn rotate(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// A horizontal skew, in degrees
    pub fn skew_x(degrees: f64) -> Self {
        Self::new(1.0, 0.0, degrees.to_radians().tan(), 1.0, 0.0, 0.0)
    }

    /// A vertical skew, in degrees
    pub fn skew_y(degrees: f64) -> Self {
        Self::new(1.0, degrees.to_radians().tan(), 0.0, 1.0, 0.0, 0.0)
    }

    #[must_use]
    /// Returns `self × other`, i.e. `other` applied first and then `self`
    pub fn then(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            tx: self.a * other.tx + self.c * other.ty + self.tx,
            ty: self.b * other.tx + self.d * other.ty + self.ty,
        }
    }

    /// Applies the transform to a point
    pub fn apply(&self, [x, y]: [f64; 2]) -> [f64; 2] {
        [
            self.a * x + self.c * y + self.tx,
            self.b * x + self.d * y + self.ty,
        ]
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use svgshape_path::command::format_number;

        write!(
            f,
            "matrix({} {} {} {} {} {})",
            format_number(self.a),
            format_number(self.b),
            format_number(self.c),
            format_number(self.d),
            format_number(self.tx),
            format_number(self.ty),
        )
    }
}

impl<'input> Parse<'input> for Transform {
    /// Parses a list of transform functions, composing them from left to right
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        let mut transform = Self::IDENTITY;
        input.skip_whitespace();
        while !input.is_empty() {
            let function = parse_function(input)?;
            transform = transform.then(&function);
            input.skip_separator();
        }
        Ok(transform)
    }
}

fn parse_function<'input>(input: &mut Parser<'input>) -> Result<Transform, Error<'input>> {
    let name = input.expect_ident()?;
    input.skip_whitespace();
    input.expect_char('(')?;
    let mut args = Vec::with_capacity(6);
    input.skip_whitespace();
    while !input.skip_char(')') {
        if !args.is_empty() {
            input.skip_separator();
        }
        args.push(f64::parse(input)?);
        input.skip_whitespace();
    }

    Ok(match (name, args.as_slice()) {
        ("matrix", &[a, b, c, d, tx, ty]) => Transform::new(a, b, c, d, tx, ty),
        ("translate", &[tx]) => Transform::translate(tx, 0.0),
        ("translate", &[tx, ty]) => Transform::translate(tx, ty),
        ("scale", &[s]) => Transform::scale(s, s),
        ("scale", &[sx, sy]) => Transform::scale(sx, sy),
        ("rotate", &[degrees]) => Transform::rotate(degrees),
        ("rotate", &[degrees, cx, cy]) => Transform::translate(cx, cy)
            .then(&Transform::rotate(degrees))
            .then(&Transform::translate(-cx, -cy)),
        ("skewX", &[degrees]) => Transform::skew_x(degrees),
        ("skewY", &[degrees]) => Transform::skew_y(degrees),
        ("matrix" | "translate" | "scale" | "rotate" | "skewX" | "skewY", _) => {
            return Err(Error::InvalidRange)
        }
        (received, _) => {
            return Err(Error::ExpectedIdent {
                expected: "a transform function",
                received,
            })
        }
    })
}
