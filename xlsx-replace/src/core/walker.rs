// src/core/walker.rs
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Calls `action` for every regular file under `dir`, at any depth.
///
/// Each directory is listed on its own: its files are handled first, then
/// every subdirectory is walked by a separate call. A directory that cannot be
/// listed is abandoned without touching its siblings, and nothing is reported
/// for it. Symbolic links are not followed.
///
/// # Arguments
///
/// * `dir` - The directory to walk
/// * `action` - Called once with the path of each regular file
#[inline]
pub fn for_each_file<F>(dir: &Path, action: &mut F)
where
    F: FnMut(&Path),
{
    let Some((files, subdirs)) = list_directory(dir) else {
        return;
    };

    for file in &files {
        action(file);
    }

    for subdir in &subdirs {
        for_each_file(subdir, action);
    }
}

/// One level of `dir`, split into regular files and subdirectories.
///
/// `None` if the directory or any of its entries could not be read.
fn list_directory(dir: &Path) -> Option<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut files = Vec::new();
    let mut subdirs = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.ok()?;
        let file_type = entry.file_type();
        if file_type.is_file() {
            files.push(entry.into_path());
        } else if file_type.is_dir() {
            subdirs.push(entry.into_path());
        }
    }

    Some((files, subdirs))
}
