//! Specification loading: Tera rendering + safe YAML parsing.

pub mod tera;
pub mod yaml;

pub use tera::TeraSpecLoader;
pub use yaml::document_from_yaml;
