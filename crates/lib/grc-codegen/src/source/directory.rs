use crate::error::TemplateError;
use crate::source::{TemplateFile, TemplateSource};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Templates read from a directory on disk.
///
/// Every entry directly inside the directory except subdirectories is a
/// template. Symlinks are followed.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn list_error(&self, source: std::io::Error) -> TemplateError {
        TemplateError::DirectoryList {
            path: self.root.clone(),
            source,
        }
    }
}

#[async_trait]
impl TemplateSource for DirectoryTemplates {
    async fn list(&self) -> Result<Vec<TemplateFile>, TemplateError> {
        let mut read_dir = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|error| self.list_error(error))?;

        let mut templates = vec![];
        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(|error| self.list_error(error))?
        {
            // Follows symlinks. A dangling link is kept and fails on read.
            if let Ok(metadata) = tokio::fs::metadata(entry.path()).await
                && metadata.is_dir()
            {
                debug!(path = ?entry.path(), "Skipping directory in templates");
                continue;
            }

            match entry.file_name().into_string() {
                Ok(file_name) => templates.push(TemplateFile::new(file_name)),
                Err(file_name) => {
                    warn!(?file_name, "Skipping template with a non UTF-8 name");
                }
            }
        }

        templates.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        debug!(root = ?self.root, count = templates.len(), "Listed templates");

        Ok(templates)
    }

    async fn read(&self, template: &TemplateFile) -> Result<String, TemplateError> {
        tokio::fs::read_to_string(self.root.join(&template.file_name))
            .await
            .map_err(|source| TemplateError::TemplateRead {
                name: template.file_name.clone(),
                source,
            })
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}
