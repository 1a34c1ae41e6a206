use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating or loading templates.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Unable to list templates in {path}: {source}")]
    DirectoryList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to read template {name}: {source}")]
    TemplateRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No template is tagged '{tag}'")]
    TemplateNotFound { tag: String },

    #[error("More than one template is tagged '{tag}': {}", candidates.join(", "))]
    AmbiguousTemplate { tag: String, candidates: Vec<String> },
}

/// Errors raised while generating component files.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Unable to derive a component name from {0}")]
    InvalidComponentName(PathBuf),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Unable to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
