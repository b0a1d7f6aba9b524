pub mod converter;
pub mod media;
pub mod section_parser;
