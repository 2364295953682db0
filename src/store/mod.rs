//! Record persistence: console diagnostics and binary file output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::content::ContentRecord;
use crate::logger;

/// Serialize a record to MessagePack bytes.
///
/// Array layout: field positions are the tags, see [`ContentRecord`].
pub fn encode_record(record: &ContentRecord) -> Result<Vec<u8>> {
    rmp_serde::to_vec(record).context("failed to encode record")
}

/// Decode a record from its serialized form.
#[allow(dead_code)] // Reader half of the wire contract, exercised by tests
pub fn decode_record(bytes: &[u8]) -> Result<ContentRecord> {
    rmp_serde::from_slice(bytes).context("failed to decode record")
}

/// Print the record's console block and write its output file.
///
/// This is one persistence unit of the fan-out: the block stays
/// contiguous on stdout and the file write either completes or fails
/// the run.
pub fn persist_record(record: &ContentRecord, output_dir: &Path) -> Result<()> {
    logger::print_block(&record.console_block());
    write_record(record, output_dir)
}

/// Write the serialized record to `<output_dir>/<id>`.
///
/// Writes a `.tmp` sibling first and renames it into place, so the
/// final file is either fully written or absent, and any pre-existing
/// file of that name is replaced atomically.
pub fn write_record(record: &ContentRecord, output_dir: &Path) -> Result<()> {
    let bytes = encode_record(record)?;
    let final_path = output_dir.join(record.file_name());
    let tmp_path = tmp_path_for(&final_path);

    fs::write(&tmp_path, &bytes)
        .with_context(|| format!("failed to write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, &final_path)
        .with_context(|| format!("failed to move record into {}", final_path.display()))?;

    Ok(())
}

/// `<dir>/7` -> `<dir>/7.tmp`
fn tmp_path_for(final_path: &Path) -> PathBuf {
    let mut name = final_path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    final_path.with_file_name(name)
}
