//! Post filename parsing.
//!
//! Post files are named `<id>-<title>-<tag1, tag2, ...>[.ext]`. The
//! grammar is anchored and greedy: in a stem with more than two dashes
//! the *last* dash is the title/tag boundary, so a title may contain
//! dashes but a tag list may not.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::ConvertError;

static FILE_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)-(.*)-(.*)$").expect("valid pattern"));

/// Structured metadata parsed from one file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub id: i64,
    pub title: String,
    pub tags: Vec<String>,
}

/// Parse a file stem (name without extension) into id, title and tags.
///
/// Tags keep their source order, are split on `,` and trimmed of
/// *leading* ASCII spaces only; duplicates are kept. An empty tag
/// segment yields a single empty-string tag.
///
/// A stem that does not match the grammar is a fatal [`ConvertError`];
/// the caller aborts the whole run, there is no per-file skip.
pub fn parse_file_stem(stem: &str) -> Result<ParsedName, ConvertError> {
    let caps = FILE_NAME_PATTERN
        .captures(stem)
        .ok_or_else(|| ConvertError::Parse(stem.to_string()))?;

    let id = caps[1]
        .parse::<i64>()
        .map_err(|e| ConvertError::IdOutOfRange(stem.to_string(), e))?;

    let tags = caps[3]
        .split(',')
        .map(|tag| tag.trim_start_matches(' ').to_string())
        .collect();

    Ok(ParsedName {
        id,
        title: caps[2].to_string(),
        tags,
    })
}
