use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

/// Owns the output directory of a run
pub struct OutputStager {
    output_dir: PathBuf,
}

impl OutputStager {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Remove anything left by a previous run and recreate the directory empty
    #[instrument(level = "debug", skip(self), fields(output_dir = %self.output_dir.display()))]
    pub fn reset(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!("Removing existing output directory");
            fs::remove_dir_all(&self.output_dir).with_context(|| {
                format!(
                    "Failed to remove output directory {}",
                    self.output_dir.display()
                )
            })?;
        }

        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                self.output_dir.display()
            )
        })?;
        Ok(())
    }

    /// Copy media files with one of `extensions` from `media_dir` into the
    /// output directory, returning the staged paths in file-name order.
    ///
    /// A missing media directory stages nothing.
    pub fn stage_media(&self, media_dir: impl AsRef<Path>, extensions: &[String]) -> Result<Vec<PathBuf>> {
        let media_dir = media_dir.as_ref();
        if !media_dir.is_dir() {
            warn!(?media_dir, "Media directory not found, no media staged");
            return Ok(Vec::new());
        }

        let mut staged = Vec::new();
        for path in list_files(media_dir, extensions)? {
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("Invalid media path: {:?}", path))?;
            let target = self.output_dir.join(file_name);

            fs::copy(&path, &target).with_context(|| {
                format!(
                    "Failed to copy media file {} to {}",
                    path.display(),
                    target.display()
                )
            })?;
            debug!(source = ?path, ?target, "Staged media file");
            staged.push(target);
        }

        info!(count = staged.len(), "Staged media files");
        Ok(staged)
    }

    pub fn package_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// Regular files directly inside `dir` whose extension is one of
/// `extensions` (case-insensitive), sorted by file name.
pub fn list_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to list directory {}", dir.display()))?;
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(e)))
            .unwrap_or(false);

        if entry.file_type().is_file() && matches {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn png() -> Vec<String> {
        vec!["png".to_string()]
    }

    #[test]
    fn given_stale_output_when_resetting_then_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("output");
        fs::create_dir_all(output.join("nested")).unwrap();
        fs::write(output.join("sentinel.txt"), "stale").unwrap();
        fs::write(output.join("nested/old.png"), "stale").unwrap();

        let stager = OutputStager::new(&output);
        stager.reset().unwrap();

        assert!(output.is_dir());
        assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
    }

    #[test]
    fn given_missing_output_when_resetting_then_creates_it() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("a/b/output");

        OutputStager::new(&output).reset().unwrap();

        assert!(output.is_dir());
    }

    #[test]
    fn given_media_dir_when_staging_then_copies_only_matching_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let media = temp_dir.path().join("res");
        fs::create_dir(&media).unwrap();
        fs::write(media.join("b.png"), b"b").unwrap();
        fs::write(media.join("a.PNG"), b"a").unwrap();
        fs::write(media.join("notes.txt"), b"t").unwrap();
        fs::create_dir(media.join("sub.png")).unwrap();

        let output = temp_dir.path().join("output");
        let stager = OutputStager::new(&output);
        stager.reset().unwrap();
        let staged = stager.stage_media(&media, &png()).unwrap();

        assert_eq!(staged, vec![output.join("a.PNG"), output.join("b.png")]);
        assert_eq!(fs::read(output.join("b.png")).unwrap(), b"b");
        assert!(!output.join("notes.txt").exists());
    }

    #[test]
    fn given_missing_media_dir_when_staging_then_stages_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let stager = OutputStager::new(temp_dir.path().join("output"));
        stager.reset().unwrap();

        let staged = stager
            .stage_media(temp_dir.path().join("does-not-exist"), &png())
            .unwrap();

        assert!(staged.is_empty());
    }

    #[test]
    fn given_file_name_when_building_package_path_then_joins_output_dir() {
        let stager = OutputStager::new("output");

        assert_eq!(stager.package_path("deck.apkg"), PathBuf::from("output/deck.apkg"));
    }
}
