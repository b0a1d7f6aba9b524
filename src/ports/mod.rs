// src/ports/mod.rs
pub mod package_writer;

pub use package_writer::PackageWriter;
