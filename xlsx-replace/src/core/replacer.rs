// src/core/replacer.rs
use crate::core::rewriter::{RewriteOutcome, rewrite_archive};
use crate::core::terms::ReplaceTerms;
use crate::core::walker::for_each_file;
use crate::models::RunStats;
use std::path::Path;
use tracing::{debug, trace};

/// Rewrites the shared strings of every `.xlsx` file under `root`.
///
/// A file that fails is counted and skipped; nothing stops the scan early.
/// `root` is not validated here: a missing directory simply yields empty
/// counters.
///
/// # Arguments
///
/// * `root` - The directory to scan
/// * `terms` - The search and replacement terms for this run
///
/// # Returns
///
/// The counters accumulated over the whole tree
#[inline]
#[must_use]
pub fn replace_in_tree(root: &Path, terms: &ReplaceTerms) -> RunStats {
    let mut stats = RunStats::new();
    for_each_file(root, &mut |path: &Path| process_file(path, terms, &mut stats));
    stats
}

/// Rewrites one file and folds the result into `stats`.
///
/// Errors never escape: they are logged at debug level and counted as a
/// failure.
#[inline]
pub fn process_file(path: &Path, terms: &ReplaceTerms, stats: &mut RunStats) {
    match rewrite_archive(path, terms) {
        Ok(outcome) => {
            match outcome {
                RewriteOutcome::Modified { replacements } => {
                    debug!(path = %path.display(), replacements, "rewrote shared strings");
                }
                RewriteOutcome::MissingSharedStrings => {
                    trace!(path = %path.display(), "no shared strings entry");
                }
                RewriteOutcome::Unchanged => {
                    trace!(path = %path.display(), "search term not found");
                }
                RewriteOutcome::NotAnArchive => {}
            }
            stats.record(outcome);
        }
        Err(err) => {
            let error = format!("{err:#}");
            debug!(path = %path.display(), %error, "failed to rewrite archive");
            stats.record_failure();
        }
    }
}
