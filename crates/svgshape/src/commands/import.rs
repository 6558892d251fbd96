use std::path::PathBuf;

use crate::{
    args::{Context, RunCommand},
    fs::load_files,
};

#[derive(clap::Args, Debug)]
/// Prints a line of JSON for each shape, with it's path data and resolved attributes
pub struct Import {
    /// The files, or directories of `.svg` files, to import
    #[clap(value_parser, required = true)]
    pub paths: Vec<PathBuf>,
}

impl RunCommand for Import {
    fn run(self, context: &Context) -> anyhow::Result<()> {
        for (path, source) in load_files(&self.paths)? {
            let imported = super::import_document(context, &path, &source)?;
            for shape in &imported.shapes {
                let line = serde_json::json!({
                    "d": shape.path.to_string(),
                    "attributes": shape.attributes,
                });
                println!("{line}");
            }
        }
        Ok(())
    }
}
