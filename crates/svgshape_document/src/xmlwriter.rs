/*!
A small streaming XML writer, covering what's needed to export paths.

- Misuse is an error rather than a panic
- Elements close themselves when they have no children
- Attribute values and text are escaped

```
use svgshape_document::xmlwriter::{Options, XmlWriter};

let mut w = XmlWriter::new(Vec::<u8>::new(), Options::default());
w.start_element("svg")?;
w.write_attribute("width", &10)?;
w.start_element("path")?;
w.write_attribute("d", "M 0,0 L 10,0")?;
let output = w.end_document()?;
assert_eq!(
    String::from_utf8(output).unwrap(),
    "<svg width=\"10\">\n    <path d=\"M 0,0 L 10,0\"/>\n</svg>\n"
);
# Ok::<(), svgshape_document::xmlwriter::Error>(())
```
*/
use std::{
    fmt::Display,
    io::{self, Write},
};

/// A result from writing a document.
pub type Result = std::result::Result<(), Error>;

/// A failure to write a document
#[derive(Debug)]
pub enum Error {
    /// The underlying writer failed
    IO(io::Error),
    /// [`XmlWriter::end_element`] was called with every element already closed
    ClosedUnopenedElement,
    /// An attribute was written outside of a start tag
    AttributeWrittenBeforeElement,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IO(err) => err.fmt(f),
            Self::ClosedUnopenedElement => f.write_str("No element is open to be closed"),
            Self::AttributeWrittenBeforeElement => {
                f.write_str("Attributes can only follow the start of an element")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Self::IO(value)
    }
}

/// How nested elements are indented
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Indent {
    /// Everything on one line
    None,
    /// A number of spaces per level
    Spaces(u8),
    /// A tab per level
    Tabs,
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

/// How the document is laid out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Whether attribute values are quoted as `fill='red'` rather than `fill="red"`
    pub use_single_quote: bool,
    /// The indentation of nested elements, 4 spaces by default
    pub indent: Indent,
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum State {
    Empty,
    Attributes,
    Children,
}

#[derive(Debug)]
struct Open {
    name: String,
    has_children: bool,
}

/// A writer of XML to an underlying `io::Write`
pub struct XmlWriter<W: Write> {
    writer: W,
    options: Options,
    state: State,
    stack: Vec<Open>,
}

impl<W: Write> XmlWriter<W> {
    /// Creates a writer with the options
    pub fn new(writer: W, options: Options) -> Self {
        Self {
            writer,
            options,
            state: State::Empty,
            stack: Vec::with_capacity(4),
        }
    }

    /// Starts writing an element, closing the start tag of the parent if needed
    ///
    /// # Errors
    /// If writing fails
    pub fn start_element(&mut self, name: &str) -> Result {
        if self.state == State::Attributes {
            self.writer.write_all(b">")?;
        }
        if let Some(parent) = self.stack.last_mut() {
            parent.has_children = true;
        }
        if self.state != State::Empty {
            self.write_new_line()?;
        }
        self.write_indent(self.stack.len())?;
        write!(self.writer, "<{name}")?;
        self.stack.push(Open {
            name: name.to_string(),
            has_children: false,
        });
        self.state = State::Attributes;
        Ok(())
    }

    /// Writes an attribute to the started element
    ///
    /// # Errors
    /// If called after the element's children, or writing fails
    pub fn write_attribute<V: Display + ?Sized>(&mut self, name: &str, value: &V) -> Result {
        if self.state != State::Attributes {
            return Err(Error::AttributeWrittenBeforeElement);
        }
        let quote = if self.options.use_single_quote { '\'' } else { '"' };
        write!(self.writer, " {name}={quote}")?;
        self.write_escaped(&value.to_string())?;
        write!(self.writer, "{quote}")?;
        Ok(())
    }

    /// Closes the current element
    ///
    /// # Errors
    /// If no element is open, or writing fails
    pub fn end_element(&mut self) -> Result {
        let Some(open) = self.stack.pop() else {
            return Err(Error::ClosedUnopenedElement);
        };
        if open.has_children {
            self.write_new_line()?;
            self.write_indent(self.stack.len())?;
            write!(self.writer, "</{}>", open.name)?;
        } else {
            self.writer.write_all(b"/>")?;
        }
        self.state = State::Children;
        Ok(())
    }

    /// Closes every open element and returns the underlying writer
    ///
    /// # Errors
    /// If writing fails
    pub fn end_document(mut self) -> std::result::Result<W, Error> {
        while !self.stack.is_empty() {
            self.end_element()?;
        }
        if self.state != State::Empty {
            self.write_new_line()?;
        }
        Ok(self.writer)
    }

    fn write_escaped(&mut self, s: &str) -> io::Result<()> {
        let quote = if self.options.use_single_quote { '\'' } else { '"' };
        let mut start = 0;
        for (index, char) in s.char_indices() {
            let escaped = match char {
                '&' => "&amp;",
                '<' => "&lt;",
                '>' => "&gt;",
                '"' if quote == '"' => "&quot;",
                '\'' if quote == '\'' => "&apos;",
                _ => continue,
            };
            self.writer.write_all(s[start..index].as_bytes())?;
            self.writer.write_all(escaped.as_bytes())?;
            start = index + char.len_utf8();
        }
        self.writer.write_all(s[start..].as_bytes())
    }

    fn write_indent(&mut self, depth: usize) -> io::Result<()> {
        match self.options.indent {
            Indent::None => Ok(()),
            Indent::Spaces(n) => {
                for _ in 0..depth * n as usize {
                    self.writer.write_all(b" ")?;
                }
                Ok(())
            }
            Indent::Tabs => {
                for _ in 0..depth {
                    self.writer.write_all(b"\t")?;
                }
                Ok(())
            }
        }
    }

    fn write_new_line(&mut self) -> io::Result<()> {
        if self.options.indent == Indent::None {
            return Ok(());
        }
        self.writer.write_all(b"\n")
    }
}
