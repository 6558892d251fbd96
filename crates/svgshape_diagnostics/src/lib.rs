//! Reporting of import problems as [`miette`] diagnostics, labelled against the source document.
use miette::{Diagnostic, NamedSource, Report, Result, SourceSpan};
use svgshape_document::{Warning, WarningKind};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("Problems found while importing SVG!")]
#[diagnostic()]
/// A collection of diagnostics for the same document
pub struct SVGErrors {
    #[source_code]
    src: NamedSource<String>,
    #[related]
    errors: Vec<SVGError>,
}

impl SVGErrors {
    /// Creates a new `SVGErrors` object with the given source code and errors
    pub fn from_errors(src: NamedSource<String>, errors: Vec<SVGError>) -> Self {
        Self { src, errors }
    }

    /// Creates a new `SVGErrors` object for the warnings of an import
    pub fn from_warnings(name: &str, source: &str, warnings: &[Warning]) -> Self {
        Self::from_errors(
            NamedSource::new(name, source.to_string()),
            warnings.iter().map(SVGError::from).collect(),
        )
    }

    /// Returns the number of contained errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns whether there are no contained errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns a miette `Result` with an error, if any errors are present
    ///
    /// # Errors
    /// If there are any contained errors
    pub fn emit(self) -> Result<()> {
        match self.errors.as_slice() {
            [] => Ok(()),
            [error] => error.clone().emit(self.src),
            _ => Err(self.into()),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Diagnostic, Error)]
#[error("{label}")]
#[diagnostic()]
/// A single diagnostic, optionally pointing to where it occurred
pub struct SVGError {
    label: String,
    #[label]
    span: Option<SourceSpan>,
    #[help]
    advice: Option<String>,
}

impl SVGError {
    /// Creates a new `SVGError` with an associated label and span
    pub fn new(label: &str, span: Option<SourceSpan>) -> Self {
        SVGError {
            label: label.into(),
            span,
            advice: None,
        }
    }

    /// Creates a new `SVGError` from the existing, with help text
    #[must_use]
    pub fn with_advice(self, advice: &str) -> Self {
        Self {
            advice: Some(advice.into()),
            ..self
        }
    }

    /// Returns the span the error is labelled at
    pub fn span(&self) -> Option<SourceSpan> {
        self.span
    }

    /// Returns a miette `Result` with an error
    ///
    /// # Errors
    /// always returns error
    pub fn emit(self, src: NamedSource<String>) -> Result<()> {
        let report: Report = self.into();
        Err(report.with_source_code(src))
    }
}

impl From<&Warning> for SVGError {
    fn from(warning: &Warning) -> Self {
        let advice = match warning.kind {
            WarningKind::MissingAttribute | WarningKind::TooFewPoints => {
                "The element was skipped"
            }
            WarningKind::MalformedOperandCount => {
                "The command was skipped; check the number of values given to it"
            }
            WarningKind::UnsupportedFeature => "The value was treated as zero",
            WarningKind::DegenerateArc => "The arc was skipped; both radii must be non-zero",
            WarningKind::UnrecognizedCommand => "The rest of the path data was skipped",
            WarningKind::StyleSyntaxError => {
                "The style was discarded; declarations are written as `name: value;`"
            }
            WarningKind::InvalidAttribute => "The attribute was ignored",
        };
        SVGError::new(&warning.to_string(), Some(warning.span.clone().into())).with_advice(advice)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use svgshape_document::import;

    use super::*;

    const SOURCE: &str = r#"<svg><path/><polygon points="1,1"/></svg>"#;

    #[test]
    fn warnings() {
        let imported = import(SOURCE).unwrap();
        let error = SVGError::from(&imported.warnings[1]);
        assert_eq!(error.to_string(), "<polygon>: At least 2 points are needed, found 1");
        assert_eq!(error.span(), Some((29..32).into()));
        assert_eq!(
            error.help().map(|help| help.to_string()),
            Some(String::from("The element was skipped"))
        );
    }

    #[test]
    fn emit() {
        let imported = import(SOURCE).unwrap();
        let errors = SVGErrors::from_warnings("test.svg", SOURCE, &imported.warnings);
        assert_eq!(errors.len(), 2);
        let report = errors.emit().unwrap_err();
        assert_eq!(report.to_string(), "Problems found while importing SVG!");

        let errors = SVGErrors::from_warnings("test.svg", SOURCE, &imported.warnings[..1]);
        let report = errors.emit().unwrap_err();
        assert_eq!(report.to_string(), "<path>: The `d` attribute is required");

        assert!(SVGErrors::from_warnings("test.svg", SOURCE, &[]).emit().is_ok());
    }
}
