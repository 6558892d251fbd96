/*!
SVGShape Document converts the shape elements of an SVG document into paths, and paths back
into a document.

Each `<path>`, `<rect>`, `<circle>`, `<ellipse>`, `<line>`, `<polyline>` and `<polygon>` is
imported as a [`Path`] along with the presentation attributes that apply to it. Attributes
cascade from enclosing `<g>` elements, with the element's own attributes and inline `style`
taking precedence.

Problems with individual elements never fail an import; they're skipped and reported as
[warnings](Warning), so that as many paths as possible are recovered.

# Example

```
use svgshape_document::{export, import};

let imported = import(
    r#"<svg xmlns="http://www.w3.org/2000/svg">
        <g fill="red">
            <rect width="10" height="5"/>
            <polyline points="0,0 10,10"/>
        </g>
    </svg>"#,
)?;
assert_eq!(imported.shapes.len(), 2);
assert_eq!(imported.shapes[0].path.to_string(), "M 0,0 L 10,0 L 10,5 L 0,5 L 0,0 Z");
assert!(imported.warnings.is_empty());

let document = export(&imported.shapes)?;
assert!(document.contains(r##"<path d="M 0,0 L 10,10" fill="#ff0000"/>"##));
# Ok::<(), svgshape_document::Error>(())
```
*/
pub mod attribute;
pub mod color;
mod error;
mod export;
mod import;
pub mod options;
pub mod resolve;
pub mod stack;
pub mod style;
pub mod transform;
pub mod visitor;
pub mod xmlwriter;

use svgshape_path::Path;

pub use crate::{
    attribute::{AttributeMap, Value},
    error::{Error, Warning, WarningKind},
    options::{ExportOptions, ImportOptions, Shapes},
};
use crate::{import::Importer, visitor::Visitor};

/// The namespace of SVG elements
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
/// The namespace of `xlink:` attributes
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
/// A path imported from a shape element, with the attributes that apply to it
pub struct Shape {
    /// The geometry of the shape
    pub path: Path,
    /// The resolved presentation attributes of the shape
    pub attributes: AttributeMap,
}

#[derive(Debug, Clone, Default)]
/// The result of importing a document
pub struct Import {
    /// The imported shapes, in document order
    pub shapes: Vec<Shape>,
    /// Problems found with elements that were skipped or partially imported
    pub warnings: Vec<Warning>,
}

/// Imports every shape of the document, using the default options
///
/// # Errors
/// If the document isn't well-formed XML, or is nested too deeply
pub fn import(source: &str) -> Result<Import, Error> {
    import_with_options(source, &ImportOptions::default())
}

/// Imports the shapes of the document selected by the options
///
/// # Errors
/// If the document isn't well-formed XML, or is nested too deeply
pub fn import_with_options(source: &str, options: &ImportOptions) -> Result<Import, Error> {
    let document = roxmltree::Document::parse_with_options(
        source,
        roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        },
    )?;
    let mut importer = Importer::new(options);
    importer.start(document.root_element())?;
    let (shapes, warnings) = importer.finish();
    log::debug!(
        "imported {} shapes with {} warnings",
        shapes.len(),
        warnings.len()
    );
    Ok(Import { shapes, warnings })
}

/// Exports the shapes as a document, using the default options
///
/// # Errors
/// If the document cannot be written
pub fn export(shapes: &[Shape]) -> Result<String, Error> {
    export_with_options(shapes, &ExportOptions::default())
}

/// Exports the shapes as a `<svg>` document sized to fit every path, with a `<path>` for
/// each shape
///
/// # Errors
/// If the document cannot be written
pub fn export_with_options(shapes: &[Shape], options: &ExportOptions) -> Result<String, Error> {
    export::write(shapes, *options)
}

#[cfg(test)]
#[ctor::ctor]
fn init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}
