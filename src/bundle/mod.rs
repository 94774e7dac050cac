use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs_err as fs;
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::errors::SiteError;

pub const MARKUP_NAME: &str = "index.html";
pub const SNIPPET_NAME: &str = "index.jsx";
pub const ARCHIVE_NAME: &str = "website.zip";

#[derive(Debug, Clone)]
pub struct Bundle {
    pub markup: String,
    pub markup_path: PathBuf,
    pub snippet_path: PathBuf,
    pub archive_path: PathBuf,
}

/// Persist both artifacts under fixed names in the run directory, then zip
/// exactly those two entries. The one step in the pipeline where a failure
/// propagates instead of degrading.
pub fn write(run_dir: &Path, markup: &str, snippet: &str) -> Result<Bundle> {
    fs::create_dir_all(run_dir)?;

    let markup_path = persist(run_dir, MARKUP_NAME, markup)?;
    let snippet_path = persist(run_dir, SNIPPET_NAME, snippet)?;

    let archive_path = run_dir.join(ARCHIVE_NAME);
    archive(&archive_path, &[(MARKUP_NAME, markup), (SNIPPET_NAME, snippet)])
        .map_err(|e| SiteError::Bundle(format!("{e:#}")))?;

    Ok(Bundle {
        markup: markup.to_string(),
        markup_path,
        snippet_path,
        archive_path,
    })
}

fn persist(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    let tmp = NamedTempFile::new_in(dir)?;
    fs::write(tmp.path(), contents)?;
    tmp.persist(&path)
        .with_context(|| format!("failed to persist {name}"))?;
    Ok(path)
}

fn archive(path: &Path, entries: &[(&str, &str)]) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, contents) in entries {
        zip.start_file(*name, options)?;
        zip.write_all(contents.as_bytes())?;
    }
    zip.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_both_artifacts_and_archive() {
        let dir = tempfile::tempdir().unwrap();
        let run_dir = dir.path().join("run");

        let bundle = write(&run_dir, "<html></html>", "const App = 1;").unwrap();

        assert_eq!(bundle.markup, "<html></html>");
        assert_eq!(
            fs::read_to_string(&bundle.markup_path).unwrap(),
            "<html></html>"
        );
        assert_eq!(
            fs::read_to_string(&bundle.snippet_path).unwrap(),
            "const App = 1;"
        );
        assert!(bundle.archive_path.exists());
    }

    #[test]
    fn archive_holds_exactly_the_two_named_entries() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = write(dir.path(), "<html></html>", "const App = 1;").unwrap();

        let file = fs::File::open(&bundle.archive_path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        assert_eq!(archive.len(), 2);

        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert!(names.contains(&MARKUP_NAME.to_string()));
        assert!(names.contains(&SNIPPET_NAME.to_string()));
    }

    #[test]
    fn rerun_overwrites_previous_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "first", "first").unwrap();
        let bundle = write(dir.path(), "second", "second").unwrap();
        assert_eq!(fs::read_to_string(&bundle.markup_path).unwrap(), "second");
    }

    #[test]
    fn unwritable_directory_propagates_the_error() {
        let dir = tempfile::tempdir().unwrap();
        let clash = dir.path().join("occupied");
        fs::write(&clash, "a plain file, not a directory").unwrap();
        assert!(write(&clash, "<html></html>", "snippet").is_err());
    }
}
