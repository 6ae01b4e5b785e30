// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod prompt;
pub mod telemetry;

pub use cli::Args;
pub use crate::core::escape::escape_xml_text;
pub use crate::core::replacer::{process_file, replace_in_tree};
pub use crate::core::rewriter::{
    ARCHIVE_EXTENSION, RewriteOutcome, SHARED_STRINGS_ENTRY, is_archive_path, rewrite_archive,
};
pub use crate::core::terms::ReplaceTerms;
pub use crate::core::walker::for_each_file;
pub use error::SetupError;
pub use models::RunStats;
pub use prompt::{Console, Setup, read_setup};

use anyhow::Result;
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::info;

/// Runs the interactive dialogue and the batch replacement.
///
/// Rejected input is reported on `output` and ends the run before anything is
/// scanned. Unless `args.no_pause` is set, the run waits for Enter before
/// returning on every path.
///
/// # Arguments
///
/// * `args` - Parsed command-line flags
/// * `input` - Where answers are read from
/// * `output` - Where prompts and the summary are written
///
/// # Returns
///
/// * `Ok(Some(RunStats))` - The counters of a completed scan
/// * `Ok(None)` - The run was aborted because of invalid input
///
/// # Errors
///
/// Returns an error only if reading from or writing to the console fails.
#[inline]
pub fn run<R: BufRead, W: Write>(args: &Args, input: R, output: W) -> Result<Option<RunStats>> {
    let mut console = Console::new(input, output);

    let stats = match read_setup(
        &mut console,
        args.directory.as_deref(),
        args.search.as_deref(),
        args.replace.as_deref(),
    )? {
        Ok(setup) => {
            let (stats, elapsed_ms) = execute(&setup);
            console.say(&stats.summary(elapsed_ms))?;
            Some(stats)
        }
        Err(err) => {
            console.say(&err.to_string())?;
            None
        }
    };

    if !args.no_pause {
        console.pause()?;
    }

    Ok(stats)
}

fn execute(setup: &Setup) -> (RunStats, u128) {
    info!(
        root = %setup.root.display(),
        search = setup.terms.search(),
        replacement = setup.terms.replacement(),
        "scanning for xlsx files"
    );

    let started = Instant::now();
    let stats = replace_in_tree(&setup.root, &setup.terms);
    let elapsed_ms = started.elapsed().as_millis();

    info!(
        archives = stats.archives_found,
        modified = stats.files_modified,
        failures = stats.failures,
        elapsed_ms = %elapsed_ms,
        "scan finished"
    );
    (stats, elapsed_ms)
}
