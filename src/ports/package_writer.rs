// src/ports/package_writer.rs
use crate::domain::Package;
use anyhow::Result;
use std::path::Path;

/// Serializes a finished package into one importable file.
///
/// Archive layout and note identity are owned by the implementation.
pub trait PackageWriter {
    fn write_package(&self, package: &Package, out_path: &Path) -> Result<()>;
}
