// src/models/run_stats.rs
use crate::core::rewriter::RewriteOutcome;
use std::fmt;

/// Counters accumulated over one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Files whose extension matched, whether or not they were changed.
    pub archives_found: u64,
    pub files_modified: u64,
    pub failures: u64,
}

impl RunStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            archives_found: 0,
            files_modified: 0,
            failures: 0,
        }
    }

    /// Folds the result of rewriting one file into the counters.
    #[inline]
    pub fn record(&mut self, outcome: RewriteOutcome) {
        match outcome {
            RewriteOutcome::NotAnArchive => {}
            RewriteOutcome::Modified { .. } => {
                self.archives_found = self.archives_found.saturating_add(1);
                self.files_modified = self.files_modified.saturating_add(1);
            }
            RewriteOutcome::MissingSharedStrings | RewriteOutcome::Unchanged => {
                self.archives_found = self.archives_found.saturating_add(1);
            }
        }
    }

    /// Counts an archive that could not be processed.
    #[inline]
    pub fn record_failure(&mut self) {
        self.archives_found = self.archives_found.saturating_add(1);
        self.failures = self.failures.saturating_add(1);
    }

    /// The one-line report printed at the end of a run.
    #[inline]
    #[must_use]
    pub fn summary(&self, elapsed_ms: u128) -> String {
        format!("{self}. Elapsed {elapsed_ms}ms")
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Done, found {} XLSX files, replaced text in {}, {} failed",
            self.archives_found, self.files_modified, self.failures
        )
    }
}
