use std::path::PathBuf;

use clap::Parser;

const AFTER_HELP: &str = "\
Environment Variables (Required):
  GCS_BUCKET_NAME    Your Composer GCS bucket name
  COMPOSER_URL_BASE  Your Composer webserver base URL

Optional settings are read from <PATH>/skyhook.toml.
For more information, visit: https://github.com/hraza01/skyhook";

/// Skyhook - Cloud Composer DAG Deployment Utility
#[derive(Parser, Debug)]
#[command(name = "skyhook")]
#[command(author, version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Project root containing the DAG directory (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Write a step-by-step log to <PATH>/skyhook.log
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip git validation of the selected folder
    #[arg(long = "no-git")]
    pub no_git: bool,
}
