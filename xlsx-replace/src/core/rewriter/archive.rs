// src/core/rewriter/archive.rs
use anyhow::{Result, bail};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, IntoInnerError, Read, Seek, Write as _};
use std::path::Path;
use tempfile::NamedTempFile;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Writes a copy of `zip` with the entry `entry_name` replaced by `contents`,
/// then moves it over `path`.
///
/// The copy is built in a temporary file next to `path` and only renamed into
/// place once it is complete, so a failure at any point leaves the original
/// file untouched. Entry order is kept and every other entry is copied raw.
///
/// # Arguments
///
/// * `path` - The archive on disk that `zip` was read from
/// * `zip` - The open archive; it is closed before the rename
/// * `entry_name` - The entry to replace
/// * `compression` - Compression method the entry had in the original
/// * `contents` - New uncompressed contents of the entry
///
/// # Errors
///
/// This function may return an error if:
/// * `path` is read-only or cannot be opened for writing
/// * The temporary file cannot be created next to `path`
/// * An entry of the original archive cannot be copied
/// * The temporary file cannot be flushed or renamed over `path`
#[inline]
pub fn write_replaced<R>(
    path: &Path,
    mut zip: ZipArchive<R>,
    entry_name: &str,
    compression: CompressionMethod,
    contents: &[u8],
) -> Result<()>
where
    R: Read + Seek,
{
    let permissions = fs::metadata(path)?.permissions();
    if permissions.readonly() {
        bail!("Archive is read-only: {}", path.display());
    }
    // Renaming only needs a writable directory; the file itself must be writable too.
    drop(OpenOptions::new().write(true).open(path)?);

    let tmp = NamedTempFile::new_in(parent_dir_or_dot(path))?;
    let mut writer = ZipWriter::new(BufWriter::new(tmp));

    for index in 0..zip.len() {
        let entry = zip.by_index_raw(index)?;
        if entry.name() != entry_name {
            writer.raw_copy_file(entry)?;
            continue;
        }

        let mut options = FileOptions::<()>::default()
            .compression_method(rewrite_method(compression))
            .large_file(needs_zip64(contents));
        if let Some(mode) = entry.unix_mode() {
            options = options.unix_permissions(mode);
        }
        drop(entry);

        writer.start_file(entry_name, options)?;
        writer.write_all(contents)?;
    }

    let tmp = writer
        .finish()?
        .into_inner()
        .map_err(IntoInnerError::into_error)?;
    drop(zip);

    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(path).map_err(|err| err.error)?;

    Ok(())
}

/// Stored entries stay stored; every other method is written back as deflate.
fn rewrite_method(original: CompressionMethod) -> CompressionMethod {
    match original {
        CompressionMethod::Stored => CompressionMethod::Stored,
        _ => CompressionMethod::Deflated,
    }
}

fn needs_zip64(contents: &[u8]) -> bool {
    !u64::try_from(contents.len()).is_ok_and(|len| len < u64::from(u32::MAX))
}

fn parent_dir_or_dot(path: &Path) -> &Path {
    // `Path::parent` is `Some("")` for a bare file name.
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}
