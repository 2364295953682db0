//! Per-file transform: one input file to one `ContentRecord`.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::content::{ContentRecord, parse_file_stem};
use crate::error::ConvertError;
use crate::markdown::{self, MarkdownOptions};

/// Convert one input file into a [`ContentRecord`].
///
/// Filename metadata, body renderings and filesystem timestamps are
/// assembled here; the record is immutable afterwards.
pub fn transform_file(
    path: &Path,
    options: &MarkdownOptions,
) -> Result<ContentRecord, ConvertError> {
    // Extension is ignored for parsing purposes
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let parsed = parse_file_stem(stem)?;

    let body = read_normalized(path)?;
    let rendered_content = markdown::to_html(&body, options);
    let plain_text = markdown::to_plain_text(&body, options);
    let summary = markdown::summarize(&body, &plain_text);

    let (created_at, updated_at) = file_timestamps(path)?;

    Ok(ContentRecord {
        id: parsed.id,
        title: parsed.title,
        summary,
        rendered_content,
        tags: parsed.tags,
        created_at,
        updated_at,
    })
}

/// Read the file body with every line ending normalized to `\n`,
/// including a trailing one.
fn read_normalized(path: &Path) -> Result<String, ConvertError> {
    let raw = fs::read_to_string(path).map_err(|e| ConvertError::Io(path.to_path_buf(), e))?;

    let mut body = String::with_capacity(raw.len() + 1);
    for line in raw.lines() {
        body.push_str(line);
        body.push('\n');
    }
    Ok(body)
}

/// Creation and modification times of the input file, normalized to UTC.
///
/// Falls back to the modification time where the filesystem reports no
/// birth time.
fn file_timestamps(path: &Path) -> Result<(DateTime<Utc>, DateTime<Utc>), ConvertError> {
    let meta = fs::metadata(path).map_err(|e| ConvertError::Io(path.to_path_buf(), e))?;
    let modified = meta
        .modified()
        .map_err(|e| ConvertError::Io(path.to_path_buf(), e))?;
    let created = meta.created().unwrap_or(modified);

    Ok((to_utc(created), to_utc(modified)))
}

fn to_utc(time: SystemTime) -> DateTime<Utc> {
    time.into()
}
