//! Input discovery.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Enumerate regular files in the input directory, non-recursive.
///
/// Subdirectories and other non-file entries are skipped. Order is
/// whatever the OS returns; the pipeline does not depend on it.
pub fn collect_post_files(input_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    Ok(files)
}
