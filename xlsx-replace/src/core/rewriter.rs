// src/core/rewriter.rs
pub mod archive;
#[cfg(test)]
pub mod test_utils;

use crate::core::terms::ReplaceTerms;
use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::result::ZipError;
use zip::{CompressionMethod, ZipArchive};

/// Suffix matched against the whole file name, dot included.
pub const ARCHIVE_EXTENSION: &str = ".xlsx";
pub const SHARED_STRINGS_ENTRY: &str = "xl/sharedStrings.xml";

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// The file name does not end in `.xlsx`; it was never opened.
    NotAnArchive,
    MissingSharedStrings,
    /// The search term does not occur, so nothing was written.
    Unchanged,
    Modified { replacements: usize },
}

/// The decoded shared-strings entry of an archive.
#[derive(Debug)]
pub(crate) struct SharedStrings {
    pub(crate) text: String,
    pub(crate) compression: CompressionMethod,
}

/// Case-insensitive check for the `.xlsx` suffix on the file name.
#[inline]
#[must_use]
pub fn is_archive_path(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let name = name.to_string_lossy();
        name.get(name.len().saturating_sub(ARCHIVE_EXTENSION.len())..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(ARCHIVE_EXTENSION))
    })
}

/// Replaces the escaped search term inside `xl/sharedStrings.xml` of one archive.
///
/// The archive is only rewritten when the entry text actually changes. All
/// other entries are copied over without recompression.
///
/// # Arguments
///
/// * `path` - The file to process
/// * `terms` - The escaped search and replacement terms for this run
///
/// # Returns
///
/// * `Ok(RewriteOutcome)` - What was done to the file
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened or is not a valid ZIP archive
/// * The shared-strings entry cannot be decompressed or is not UTF-8
/// * The rewritten archive cannot be written or moved into place
#[inline]
pub fn rewrite_archive(path: &Path, terms: &ReplaceTerms) -> Result<RewriteOutcome> {
    if !is_archive_path(path) {
        return Ok(RewriteOutcome::NotAnArchive);
    }

    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let mut zip = ZipArchive::new(BufReader::new(file))
        .with_context(|| format!("Failed to read archive: {}", path.display()))?;

    let Some(shared) = read_shared_strings(&mut zip)
        .with_context(|| format!("Failed to read {SHARED_STRINGS_ENTRY} in {}", path.display()))?
    else {
        return Ok(RewriteOutcome::MissingSharedStrings);
    };

    let replacements = shared.text.matches(terms.escaped_search()).count();
    let updated = shared
        .text
        .replace(terms.escaped_search(), terms.escaped_replacement());
    if updated == shared.text {
        return Ok(RewriteOutcome::Unchanged);
    }

    archive::write_replaced(
        path,
        zip,
        SHARED_STRINGS_ENTRY,
        shared.compression,
        updated.as_bytes(),
    )
    .with_context(|| format!("Failed to rewrite archive: {}", path.display()))?;

    Ok(RewriteOutcome::Modified { replacements })
}

/// Reads the shared-strings entry, or `None` if the archive has none.
///
/// # Errors
///
/// Returns an error if the entry cannot be decompressed or is not valid UTF-8.
#[inline]
pub(crate) fn read_shared_strings<R>(zip: &mut ZipArchive<R>) -> Result<Option<SharedStrings>>
where
    R: Read + Seek,
{
    let mut entry = match zip.by_name(SHARED_STRINGS_ENTRY) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let compression = entry.compression();
    let mut text = String::new();
    entry.read_to_string(&mut text)?;

    Ok(Some(SharedStrings { text, compression }))
}
