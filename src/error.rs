//! Conversion error types.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conversion errors.
///
/// Every variant aborts the whole run; there is no per-file skip, no
/// retry and no partial-success mode.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("file name does not match `<id>-<title>-<tags>`: `{0}`")]
    Parse(String),

    #[error("post id does not fit a 64-bit integer: `{0}`")]
    IdOutOfRange(String, #[source] std::num::ParseIntError),

    #[error("duplicate post id {0} detected")]
    DuplicateId(i64),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_convert_error_display() {
        let parse_err = ConvertError::Parse("notes.md".to_string());
        assert!(format!("{parse_err}").contains("notes.md"));

        let dup_err = ConvertError::DuplicateId(7);
        assert!(format!("{dup_err}").contains("duplicate post id 7"));

        let io_err = ConvertError::Io(
            PathBuf::from("posts/1-a-b.md"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("1-a-b.md"));
    }
}
