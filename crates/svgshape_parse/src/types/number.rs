//! Parsing for number values
use crate::{error::Error, Parse, Parser};

impl<'input> Parse<'input> for f64 {
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        input.skip_whitespace();

        let cursor = input.cursor();
        if !input.skip_char('-') {
            input.skip_char('+');
        }
        let integer = input.take_matches(|char| char.is_ascii_digit());
        let fraction = if input.skip_char('.') {
            input.take_matches(|char| char.is_ascii_digit())
        } else {
            ""
        };
        if integer.is_empty() && fraction.is_empty() {
            input.rewind_to(cursor);
            return Err(Error::InvalidNumber);
        }

        let exponent_cursor = input.cursor();
        if input.skip_char('e') || input.skip_char('E') {
            if !input.skip_char('-') {
                input.skip_char('+');
            }
            if input.take_matches(|char| char.is_ascii_digit()).is_empty() {
                // e.g. `1em`; the `e` belongs to whatever follows the number
                input.rewind_to(exponent_cursor);
            }
        }

        let number: f64 = input
            .slice_from(cursor)
            .parse()
            .map_err(|_| Error::InvalidNumber)?;
        if number.is_finite() {
            Ok(number)
        } else {
            Err(Error::InvalidNumber)
        }
    }
}

#[test]
fn numbers() {
    use pretty_assertions::assert_eq;

    let valid = [
        ("7", 7.0),
        ("-2.5", -2.5),
        ("+.25", 0.25),
        ("  3. ", 3.0),
        ("6E1", 60.0),
        ("4e-1", 0.4),
        ("-1.5e+1", -15.0),
    ];
    for (input, expected) in valid {
        assert_eq!(f64::parse_string(input), Ok(expected), "{input}");
    }

    let invalid = [
        ("", Error::InvalidNumber),
        ("+", Error::InvalidNumber),
        ("-.", Error::InvalidNumber),
        ("px", Error::InvalidNumber),
        ("1e400", Error::InvalidNumber),
        ("5px", Error::ExpectedDone),
        ("2ex", Error::ExpectedDone),
        ("1 2", Error::ExpectedDone),
    ];
    for (input, expected) in invalid {
        assert_eq!(f64::parse_string(input), Err(expected), "{input}");
    }
}

#[test]
fn adjacent_numbers() {
    use pretty_assertions::assert_eq;

    let mut parser = Parser::new("0.5.5-1");
    assert_eq!(f64::parse(&mut parser), Ok(0.5));
    assert_eq!(f64::parse(&mut parser), Ok(0.5));
    assert_eq!(f64::parse(&mut parser), Ok(-1.0));
    assert!(parser.is_empty());

    let mut parser = Parser::new("-q");
    assert_eq!(f64::parse(&mut parser), Err(Error::InvalidNumber));
    assert_eq!(parser.cursor(), 0);
}
