//! Various commands that can be executed by svgshape
mod import;
mod normalise;
mod path;

use std::path::Path;

use anyhow::Context as _;
use svgshape_diagnostics::SVGErrors;
use svgshape_document::{import_with_options, Import as Imported};

pub use import::Import;
pub use normalise::Normalise;
pub use path::PathData;

use crate::args::Context;

/// Imports the document, rendering any warnings to stderr
fn import_document(context: &Context, path: &Path, source: &str) -> anyhow::Result<Imported> {
    let options = context.config.import.clone().unwrap_or_default();
    let imported = import_with_options(source, &options)
        .with_context(|| format!("Cannot import {}", path.display()))?;
    if !context.quiet {
        let errors =
            SVGErrors::from_warnings(&path.to_string_lossy(), source, &imported.warnings);
        if let Err(report) = errors.emit() {
            eprintln!("{report:?}");
        }
    }
    Ok(imported)
}
