// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

/// Replace text inside the shared strings of every xlsx file under a directory.
///
/// Anything not given on the command line is asked for interactively.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan recursively
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Text to search for (plain text, not XML-escaped)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Text to put in place of every match
    #[arg(short, long)]
    pub replace: Option<String>,

    /// Exit without waiting for Enter at the end
    #[arg(long)]
    pub no_pause: bool,
}
