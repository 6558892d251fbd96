use std::path::PathBuf;

use svgshape_document::export_with_options;

use crate::{
    args::{Context, RunCommand},
    fs::{load_files, write_file},
};

#[derive(clap::Args, Debug)]
/// Imports each document and exports it's shapes as paths
pub struct Normalise {
    /// The files, or directories of `.svg` files, to normalise
    #[clap(value_parser, required = true)]
    pub paths: Vec<PathBuf>,
    /// The file or directory to output results to.
    /// Defaults to stdout
    #[clap(long = "output", short = 'o')]
    pub output: Option<PathBuf>,
}

impl RunCommand for Normalise {
    fn run(self, context: &Context) -> anyhow::Result<()> {
        let options = context.config.export.unwrap_or_default();
        for (path, source) in load_files(&self.paths)? {
            let imported = super::import_document(context, &path, &source)?;
            let document = export_with_options(&imported.shapes, &options)?;
            write_file(self.output.as_deref(), &path, &document)?;
        }
        Ok(())
    }
}
