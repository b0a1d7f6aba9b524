use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Minimal valid 1x1 PNG
#[allow(dead_code)]
pub const PNG_BYTES: [u8; 69] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
    0x00, 0x00, 0x00, 0x0D, // IHDR length
    0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, // width: 1
    0x00, 0x00, 0x00, 0x01, // height: 1
    0x08, 0x02, 0x00, 0x00, 0x00, // bit depth, color type, compression, filter, interlace
    0x90, 0x77, 0x53, 0xDE, // CRC
    0x00, 0x00, 0x00, 0x0C, // IDAT length
    0x49, 0x44, 0x41, 0x54, // IDAT
    0x08, 0xD7, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00, 0x03, 0x01, 0x01, 0x00, 0x18, 0xDD, 0x8D,
    0xB4, // CRC
    0x00, 0x00, 0x00, 0x00, // IEND length
    0x49, 0x45, 0x4E, 0x44, // IEND
    0xAE, 0x42, 0x60, 0x82, // CRC
];

/// Temporary working tree with a Markdown source directory and an output directory
#[allow(dead_code)]
pub struct SourceTree {
    _temp_dir: TempDir,
    pub root: PathBuf,
    pub source_dir: PathBuf,
    pub media_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[allow(dead_code)]
impl SourceTree {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let root = temp_dir.path().to_path_buf();
        let source_dir = root.join("designdeck");
        let media_dir = source_dir.join("res");
        fs::create_dir_all(&media_dir).context("Failed to create media directory")?;

        Ok(Self {
            _temp_dir: temp_dir,
            output_dir: root.join("output"),
            root,
            source_dir,
            media_dir,
        })
    }

    pub fn add_markdown(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.source_dir.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn add_image(&self, name: &str) -> Result<PathBuf> {
        let path = self.media_dir.join(name);
        fs::write(&path, PNG_BYTES)?;
        Ok(path)
    }

    pub fn add_json(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn output_entries(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = fs::read_dir(&self.output_dir)?
            .map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<std::io::Result<_>>()?;
        names.sort();
        Ok(names)
    }
}

/// Note fields and tags of a package, ignoring generated IDs
#[allow(dead_code)]
pub fn note_contents(package: &Path) -> Result<Vec<(Vec<String>, Vec<String>)>> {
    let contents = ankideck::infrastructure::apkg::read_package(package)?;
    Ok(contents
        .notes
        .into_iter()
        .map(|n| (n.fields, n.tags))
        .collect())
}
