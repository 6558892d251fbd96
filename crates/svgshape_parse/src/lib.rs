//! Primitives for parsing SVG attribute values.
//!
//! Values such as path data, point lists, inline styles and transform lists are all read
//! with the same [`Parser`], a cursor over a borrowed input string.

use error::Error;
mod types;

pub mod error;

/// A byte cursor over an attribute value
#[derive(Debug, Clone)]
pub struct Parser<'input> {
    input: &'input str,
    cursor: usize,
}

impl<'input> Parser<'input> {
    /// Starts reading from the beginning of the input
    pub fn new(input: &'input str) -> Self {
        Self { input, cursor: 0 }
    }

    /// The byte offset of the next unread character
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Consumes and returns the next character
    ///
    /// # Errors
    ///
    /// When nothing is left to read
    pub fn read(&mut self) -> Result<char, Error<'input>> {
        let next = self.current()?;
        self.cursor += next.len_utf8();
        Ok(next)
    }

    /// Moves back to an offset returned by [`Parser::cursor`]
    pub fn rewind_to(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.input.len());
    }

    /// Runs `f`, restoring the cursor when it fails
    ///
    /// # Errors
    ///
    /// Whatever `f` fails with
    pub fn try_parse<T, E, F: FnOnce(&mut Self) -> Result<T, E>>(&mut self, f: F) -> Result<T, E> {
        let checkpoint = self.cursor;
        f(self).inspect_err(|_| self.cursor = checkpoint)
    }

    /// The unread remainder of the input
    pub fn slice(&self) -> &'input str {
        &self.input[self.cursor..]
    }

    /// The input between `start` and the cursor
    pub fn slice_from(&self, start: usize) -> &'input str {
        let end = self.cursor.min(self.input.len());
        &self.input[start.min(end)..end]
    }

    /// The number of unread bytes
    pub fn len(&self) -> usize {
        self.input.len() - self.cursor
    }

    /// Whether everything has been read
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Peeks at the next character without consuming it
    ///
    /// # Errors
    ///
    /// When nothing is left to read
    pub fn current(&self) -> Result<char, Error<'input>> {
        self.slice().chars().next().ok_or(Error::EndOfInput)
    }

    /// Consumes characters while `f` holds, returning them
    pub fn take_matches<F: FnMut(char) -> bool>(&mut self, f: F) -> &'input str {
        let start = self.cursor;
        self.skip_matches(f);
        self.slice_from(start)
    }

    /// Consumes characters while `f` holds
    pub fn skip_matches<F: FnMut(char) -> bool>(&mut self, f: F) {
        let remaining = self.slice().trim_start_matches(f).len();
        self.cursor = self.input.len() - remaining;
    }

    /// Consumes `char` if it's next, returning whether it was
    pub fn skip_char(&mut self, char: char) -> bool {
        let found = self.slice().starts_with(char);
        if found {
            self.cursor += char.len_utf8();
        }
        found
    }

    /// Consumes any whitespace
    pub fn skip_whitespace(&mut self) {
        self.skip_matches(char::is_whitespace);
    }

    /// Consumes a list separator: whitespace around at most one comma.
    ///
    /// Returns whether there was a comma
    pub fn skip_separator(&mut self) -> bool {
        self.skip_whitespace();
        let comma = self.skip_char(',');
        self.skip_whitespace();
        comma
    }

    /// Checks that everything has been read
    ///
    /// # Errors
    ///
    /// When there's unread input
    pub fn expect_done(&self) -> Result<(), Error<'input>> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::ExpectedDone)
        }
    }

    /// Consumes the next character, checking that it's `expected`
    ///
    /// # Errors
    ///
    /// When nothing is left, or a different character is found
    pub fn expect_char(&mut self, expected: char) -> Result<(), Error<'input>> {
        match self.read()? {
            received if received == expected => Ok(()),
            received => Err(Error::ExpectedChar { expected, received }),
        }
    }

    /// Consumes characters while `f` holds, requiring at least one
    ///
    /// # Errors
    ///
    /// When the next character doesn't hold for `f`
    pub fn expect_matches<F: FnMut(char) -> bool>(
        &mut self,
        expected: &'static str,
        f: F,
    ) -> Result<&'input str, Error<'input>> {
        let matched = self.take_matches(f);
        if matched.is_empty() {
            return Err(Error::ExpectedMatch {
                expected,
                received: self.slice(),
            });
        }
        Ok(matched)
    }

    /// Consumes a name, such as a property or function name
    ///
    /// # Errors
    ///
    /// When the next character can't start a name
    pub fn expect_ident(&mut self) -> Result<&'input str, Error<'input>> {
        if !self.current().is_ok_and(is_ident_start) {
            return Err(Error::ExpectedIdent {
                expected: "a name",
                received: self.slice(),
            });
        }
        Ok(self.take_matches(is_ident))
    }
}

fn is_ident_start(char: char) -> bool {
    char.is_ascii_alphabetic() || char == '_' || char == '-'
}

fn is_ident(char: char) -> bool {
    is_ident_start(char) || char.is_ascii_digit()
}

/// Values that can be read from an attribute
pub trait Parse<'input>: Sized {
    /// Reads the value from the parser's cursor, leaving anything after it unread
    ///
    /// # Errors
    /// If the input doesn't start with a valid value
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>>;

    /// Reads the value from the whole string, allowing surrounding whitespace
    ///
    /// # Errors
    /// If the string isn't exactly one valid value
    fn parse_string(input: &'input str) -> Result<Self, Error<'input>> {
        let parser = &mut Parser::new(input);
        parser.skip_whitespace();
        let value = Self::parse(parser)?;
        parser.skip_whitespace();
        parser.expect_done()?;
        Ok(value)
    }
}

#[test]
fn separators() {
    let mut parser = Parser::new("  ,  1");
    assert!(parser.skip_separator());
    assert_eq!(parser.slice(), "1");

    let mut parser = Parser::new(" 1");
    assert!(!parser.skip_separator());
    assert_eq!(parser.cursor(), 1);

    let mut parser = Parser::new(",,");
    assert!(parser.skip_separator());
    assert_eq!(parser.slice(), ",");
}

#[test]
fn idents() {
    let mut parser = Parser::new("fill-opacity:.5");
    assert_eq!(parser.expect_ident(), Ok("fill-opacity"));
    assert_eq!(parser.current(), Ok(':'));

    let mut parser = Parser::new("9lives");
    assert!(parser.expect_ident().is_err());
    assert_eq!(parser.cursor(), 0);
}

#[test]
fn multibyte() {
    let mut parser = Parser::new("é1");
    assert_eq!(parser.read(), Ok('é'));
    assert_eq!(parser.slice(), "1");
    assert_eq!(parser.expect_char('2'), Err(error::Error::ExpectedChar {
        expected: '2',
        received: '1'
    }));
    assert!(parser.is_empty());
}

#[test]
fn checkpoints() {
    let mut parser = Parser::new("abc");
    let result: Result<char, ()> = parser.try_parse(|parser| {
        parser.read().ok();
        Err(())
    });
    assert!(result.is_err());
    assert_eq!(parser.cursor(), 0);
    assert_eq!(parser.take_matches(|char| char != 'c'), "ab");
    assert_eq!(parser.slice_from(0), "ab");
}
