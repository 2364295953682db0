//! The content record produced for each converted post.

mod filename;

pub use filename::parse_file_stem;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One converted blog post.
///
/// Field order is the wire contract: `rmp_serde::to_vec` writes the
/// struct as a MessagePack array, so each field's position (0-6) is its
/// tag. Readers index by position and ignore trailing entries they do
/// not know, so new fields must only ever be appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub rendered_content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord {
    /// Decimal id, used verbatim as the output file name.
    pub fn file_name(&self) -> String {
        self.id.to_string()
    }

    /// The per-record console block: one line per field.
    pub fn console_block(&self) -> String {
        format!(
            "Id: {}\nTitle: {}\nTags: {}\nSummary: {}\nCreatedAt: {}\nUpdatedAt: {}",
            self.id,
            self.title,
            self.tags.join(", "),
            self.summary,
            self.created_at,
            self.updated_at
        )
    }
}
