// src/infrastructure/mod.rs
pub mod apkg;
pub mod config;
pub mod json_extractor;
pub mod markdown;
pub mod output_stager;

pub use apkg::ApkgWriter;
pub use config::Config;
pub use output_stager::OutputStager;
