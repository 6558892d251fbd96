use miette::NamedSource;
use svgshape_diagnostics::SVGError;
use svgshape_path::Path;

use crate::args::{Context, RunCommand};

#[derive(clap::Args, Debug)]
/// Prints path data with every command made absolute, and arcs approximated with curves
pub struct PathData {
    /// The path data to read, such as `"m 0 0 h 10 a 5 5 0 0 1 0 10 z"`
    pub data: String,
}

impl RunCommand for PathData {
    fn run(self, context: &Context) -> anyhow::Result<()> {
        match self.data.parse::<Path>() {
            Ok(path) => {
                println!("{path}");
                Ok(())
            }
            Err(error) => {
                if !context.quiet {
                    let offset = error.offset();
                    let span = offset..(offset + 1).min(self.data.len());
                    let report = SVGError::new(&error.to_string(), Some(span.into()))
                        .emit(NamedSource::new("path data", self.data.clone()));
                    if let Err(report) = report {
                        eprintln!("{report:?}");
                    }
                }
                anyhow::bail!("Invalid path data")
            }
        }
    }
}
