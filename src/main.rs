//! Skyhook CLI - Cloud Composer DAG deployment utility
//!
//! Usage: skyhook [OPTIONS] [PATH]
//!
//! Scans `<PATH>/dags`, asks which DAG folder to deploy, checks that its git
//! working copy is deployable and mirrors it to the Composer bucket.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let code = commands::deploy::cmd_deploy(cli.path.as_deref(), cli.verbose, cli.no_git)?;
    std::process::exit(code);
}
