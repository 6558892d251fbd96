//! The ways reading a value can fail.

#[derive(Debug, Clone, PartialEq, Eq)]
/// A failure to read a value, borrowing the input it was found in
pub enum Error<'input> {
    /// Nothing was left to read
    EndOfInput,
    /// The input didn't start with a number, or the number overflowed
    InvalidNumber,
    /// A value had the wrong size or count, such as a function with too many arguments
    InvalidRange,
    /// A value was read, but something followed it
    ExpectedDone,
    /// Nothing matched a pattern requiring at least one character
    ExpectedMatch {
        /// What the pattern describes
        expected: &'static str,
        /// The unread input
        received: &'input str,
    },
    /// A different character was found
    ExpectedChar {
        /// The character needed
        expected: char,
        /// The character found
        received: char,
    },
    /// A name was missing, or wasn't one of those known
    ExpectedIdent {
        /// The names allowed
        expected: &'static str,
        /// The input found
        received: &'input str,
    },
}

impl std::fmt::Display for Error<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndOfInput => f.write_str("The value ended early"),
            Self::InvalidNumber => f.write_str("Expected a number"),
            Self::InvalidRange => f.write_str("Wrong number of values"),
            Self::ExpectedDone => f.write_str("Unexpected content after the value"),
            Self::ExpectedMatch { expected, received } => {
                write!(f, "Expected {expected}, found `{received}`")
            }
            Self::ExpectedChar { expected, received } => {
                write!(f, "Expected `{expected}`, found `{received}`")
            }
            Self::ExpectedIdent { expected, received } => {
                write!(f, "Expected {expected}, found `{received}`")
            }
        }
    }
}

impl std::error::Error for Error<'_> {}
