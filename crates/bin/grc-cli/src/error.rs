use grc_codegen::prelude::{GeneratorError, TemplateError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("The path provided does not exist: {0}")]
    InexistentPath(String),

    #[error("Target must be a directory: {0}")]
    NotDirectory(String),

    #[error("The path provided was invalid: {0}")]
    InvalidPath(String),

    #[error("Unable to create default directory {path}: {source}")]
    DefaultDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Generator(#[from] GeneratorError),

    #[error("{0}")]
    Template(#[from] TemplateError),
}

impl CliError {
    /// Fatal errors are returned from `main` instead of being shown as a notification.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CliError::DefaultDirectory { .. })
    }
}
