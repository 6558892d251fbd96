//! Svgshape converts the shapes of SVG documents into path data, and path data back into
//! documents.
mod args;
mod commands;
mod config;
mod fs;

use clap::Parser;

use crate::{
    args::{Args, Command, Context, RunCommand},
    config::Config,
};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    // import warnings are rendered as diagnostics rather than logged
    let filter = if args.quiet {
        "error"
    } else {
        "warn,svgshape_document=error"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let context = Context {
        config: Config::load()?,
        quiet: args.quiet,
    };
    match args.command {
        Command::Path(command) => command.run(&context),
        Command::Import(command) => command.run(&context),
        Command::Normalise(command) => command.run(&context),
    }
}
