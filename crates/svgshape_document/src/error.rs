//! Error types.
use std::ops::Range;

use crate::xmlwriter;

#[derive(Debug)]
/// A failure of a whole import or export
pub enum Error {
    /// The document couldn't be parsed by roxmltree
    Xml(roxmltree::Error),
    /// The document parsed had a depth greater than 1024 elements
    NodesLimitReached,
    /// The document couldn't be written
    Write(xmlwriter::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xml(err) => err.fmt(f),
            Self::NodesLimitReached => "The document is nested too deeply".fmt(f),
            Self::Write(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Xml(err) => Some(err),
            Self::NodesLimitReached => None,
            Self::Write(err) => Some(err),
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(value: roxmltree::Error) -> Self {
        Self::Xml(value)
    }
}

impl From<xmlwriter::Error> for Error {
    fn from(value: xmlwriter::Error) -> Self {
        Self::Write(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// The kind of problem an element was imported with
pub enum WarningKind {
    /// An attribute the element needs is absent; the element is skipped
    MissingAttribute,
    /// A path command had the wrong number of operands; the command is skipped
    MalformedOperandCount,
    /// A feature that's ignored, such as a rotated arc
    UnsupportedFeature,
    /// An arc with a zero radius; the rest of the arc command is skipped
    DegenerateArc,
    /// An unknown path command; the rest of the path data is skipped
    UnrecognizedCommand,
    /// A point list with less than two points; the element is skipped
    TooFewPoints,
    /// A `style` attribute that couldn't be parsed; the style is discarded
    StyleSyntaxError,
    /// An attribute value that couldn't be parsed; the attribute is dropped, or the
    /// element skipped when the attribute describes it's geometry
    InvalidAttribute,
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::MissingAttribute => "missing attribute",
            Self::MalformedOperandCount => "malformed operand count",
            Self::UnsupportedFeature => "unsupported feature",
            Self::DegenerateArc => "degenerate arc",
            Self::UnrecognizedCommand => "unrecognized command",
            Self::TooFewPoints => "too few points",
            Self::StyleSyntaxError => "style syntax error",
            Self::InvalidAttribute => "invalid attribute",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A recoverable problem found while importing an element
pub struct Warning {
    /// What went wrong
    pub kind: WarningKind,
    /// The local name of the element being imported
    pub element: String,
    /// A description of the problem
    pub message: String,
    /// The byte range of the source document the problem was found in
    pub span: Range<usize>,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>: {}", self.element, self.message)
    }
}

impl From<&svgshape_path::parser::Error> for WarningKind {
    fn from(value: &svgshape_path::parser::Error) -> Self {
        use svgshape_path::parser::Error;

        match value {
            Error::MalformedOperandCount { .. } => Self::MalformedOperandCount,
            Error::UnsupportedFeature { .. } => Self::UnsupportedFeature,
            Error::DegenerateArc { .. } => Self::DegenerateArc,
            Error::UnrecognizedCommand { .. } => Self::UnrecognizedCommand,
        }
    }
}
