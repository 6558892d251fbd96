//! Parsing of inline `style` attributes.
use svgshape_parse::{error::Error, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A single `name: value` pair of an inline style
pub struct Declaration<'input> {
    /// The property name
    pub name: &'input str,
    /// The trimmed value
    pub value: &'input str,
    /// The byte range of the value within the style
    pub range: (usize, usize),
}

/// Parses a style body of the form `name: value; name: value`.
///
/// Empty declarations, such as a trailing `;`, are allowed.
///
/// # Errors
/// If any declaration is missing it's name, colon or value
pub fn parse(style: &str) -> Result<Vec<Declaration<'_>>, Error<'_>> {
    let input = &mut Parser::new(style);
    let mut declarations = vec![];
    loop {
        input.skip_matches(|char| char.is_whitespace() || char == ';');
        if input.is_empty() {
            return Ok(declarations);
        }
        let name = input.expect_ident()?;
        input.skip_whitespace();
        input.expect_char(':')?;
        input.skip_whitespace();

        let start = input.cursor();
        let value = input.take_matches(|char| char != ';').trim_end();
        if value.is_empty() {
            return Err(Error::ExpectedMatch {
                expected: "a declaration value",
                received: input.slice(),
            });
        }
        declarations.push(Declaration {
            name,
            value,
            range: (start, start + value.len()),
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn declarations() {
        let declarations = parse(" fill : red;stroke-width:2 ; ;").unwrap();
        let pairs: Vec<_> = declarations.iter().map(|d| (d.name, d.value)).collect();
        assert_eq!(pairs, [("fill", "red"), ("stroke-width", "2")]);
        assert_eq!(declarations[0].range, (8, 11));

        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn malformed() {
        assert!(parse("fill red").is_err());
        assert!(parse("fill:").is_err());
        assert!(parse(":red").is_err());
        assert!(parse("fill: red; 9: 1").is_err());
    }
}
