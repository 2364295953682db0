//! The batch conversion pipeline.
//!
//! Four stages, run once per invocation with no persistent state:
//! - **Discover** - enumerate regular files in the input directory
//! - **Transform** - parallel fan-out, one `ContentRecord` per file
//! - **Validate** - id uniqueness across the whole batch
//! - **Persist** - parallel fan-out, console block + record file per record
//!
//! Any failure aborts the whole run. Completed writes are not rolled
//! back; the run is expected to be repeated after the underlying
//! condition is fixed.

mod discover;
mod transform;
mod validate;

pub use discover::collect_post_files;
pub use transform::transform_file;
pub use validate::check_unique_ids;

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;

use crate::content::ContentRecord;
use crate::logger::ProgressLine;
use crate::markdown::MarkdownOptions;
use crate::store;
use crate::{debug, log};

/// Result of one pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    /// Records produced and written.
    pub posts: usize,
}

/// Run the full pipeline: discover -> transform -> validate -> persist.
pub fn run(input_dir: &Path, output_dir: &Path) -> Result<RunStats> {
    let files = collect_post_files(input_dir)
        .with_context(|| format!("failed to read input directory {}", input_dir.display()))?;
    debug!("convert"; "discovered {} files in {}", files.len(), input_dir.display());

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let records = transform_all(&files)?;
    check_unique_ids(&records)?;
    persist_all(&records, output_dir)?;

    Ok(RunStats {
        posts: records.len(),
    })
}

/// Transform every discovered file in parallel and join the results.
///
/// Rayon's pool bounds the fan-out. The first error short-circuits the
/// collection and fails the run.
fn transform_all(files: &[std::path::PathBuf]) -> Result<Vec<ContentRecord>> {
    let options = MarkdownOptions::all();
    let progress = ProgressLine::new("posts", files.len());

    let records = files
        .par_iter()
        .map(|path| {
            let record = transform_file(path, &options)?;
            progress.inc();
            Ok(record)
        })
        .collect::<Result<Vec<_>>>()?;

    progress.finish();
    Ok(records)
}

/// Persist every record in parallel; join before returning.
///
/// The first failure is logged and latched; remaining workers bail out
/// without starting new writes.
fn persist_all(records: &[ContentRecord], output_dir: &Path) -> Result<()> {
    let has_error = AtomicBool::new(false);

    records.par_iter().try_for_each(|record| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("aborted"));
        }
        if let Err(e) = store::persist_record(record, output_dir) {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "post {}: {:#}", record.id, e);
            }
            return Err(anyhow!("conversion failed"));
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use tempfile::TempDir;

    fn output_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_end_to_end_example() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("7-hello-world-intro, notes"), "# Hi\nthere").unwrap();

        let stats = run(input.path(), output.path()).unwrap();
        assert_eq!(stats.posts, 1);
        assert_eq!(output_files(output.path()), vec!["7"]);

        let bytes = fs::read(output.path().join("7")).unwrap();
        let record = store::decode_record(&bytes).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.title, "hello-world");
        assert_eq!(record.tags, vec!["intro", "notes"]);
        assert!(record.rendered_content.contains("<h1>Hi</h1>"));
        assert!(record.summary.ends_with("..."));
    }

    #[test]
    fn test_n_files_produce_n_outputs() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        for id in 1..=5 {
            let name = format!("{id}-post {id}-tag{id}.md");
            fs::write(input.path().join(name), format!("body of {id}")).unwrap();
        }

        let stats = run(input.path(), output.path()).unwrap();
        assert_eq!(stats.posts, 5);
        assert_eq!(output_files(output.path()), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_duplicate_id_writes_nothing() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("3-first-a.md"), "one").unwrap();
        fs::write(input.path().join("3-second-b.md"), "two").unwrap();

        let err = run(input.path(), output.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConvertError>(),
            Some(ConvertError::DuplicateId(3))
        ));
        assert!(output_files(output.path()).is_empty());
    }

    #[test]
    fn test_bad_filename_fails_run() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("1-good-tag.md"), "fine").unwrap();
        fs::write(input.path().join("README.md"), "not a post").unwrap();

        assert!(run(input.path(), output.path()).is_err());
    }

    #[test]
    fn test_empty_input_directory() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        let stats = run(input.path(), output.path()).unwrap();
        assert_eq!(stats.posts, 0);
        assert!(output_files(output.path()).is_empty());
    }
}
