use clap::{Parser, Subcommand};

use crate::{
    commands::{Import, Normalise, PathData},
    config::Config,
};

/// The state shared by every command
pub struct Context {
    /// The loaded configuration file, or defaults
    pub config: Config,
    /// Whether diagnostics should be left out
    pub quiet: bool,
}

pub trait RunCommand {
    /// # Errors
    ///
    /// If any part of the lifecycle fails
    /// * Fails to read or parse any files
    /// * Fails to write or serialize to any files
    fn run(self, context: &Context) -> anyhow::Result<()>;
}

#[derive(Parser)]
#[clap(
    bin_name = "svgshape",
    name = "svgshape",
    author,
    version,
    about = "Converts SVG shapes to path data and back",
    long_about = None
)]
pub struct Args {
    /// Only print errors, leaving out warnings about skipped elements
    #[clap(long, short, global = true)]
    pub quiet: bool,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Prints the canonical form of some path data
    Path(PathData),
    /// Prints each shape of SVG documents as a line of JSON
    Import(Import),
    /// Rewrites SVG documents as a path for each of their shapes
    #[clap(alias = "normalize")]
    Normalise(Normalise),
}

#[test]
fn verify_args() {
    use clap::CommandFactory;

    Args::command().debug_assert();
}

#[test]
fn parse_args() {
    let args = Args::parse_from(["svgshape", "normalise", "a.svg", "b", "-o", "out", "-q"]);
    assert!(args.quiet);
    let Command::Normalise(normalise) = args.command else {
        panic!("expected normalise command");
    };
    assert_eq!(normalise.paths.len(), 2);
    assert_eq!(normalise.output, Some(std::path::PathBuf::from("out")));
}
