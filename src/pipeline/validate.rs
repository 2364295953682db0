//! Batch id uniqueness validation.

use rustc_hash::FxHashSet;

use crate::content::ContentRecord;
use crate::error::ConvertError;

/// Fail if any id occurs more than once in the batch.
///
/// Runs strictly after every transform has completed and strictly
/// before any output is written; the error names the duplicated id.
pub fn check_unique_ids(records: &[ContentRecord]) -> Result<(), ConvertError> {
    let mut seen = FxHashSet::default();
    for record in records {
        if !seen.insert(record.id) {
            return Err(ConvertError::DuplicateId(record.id));
        }
    }
    Ok(())
}
