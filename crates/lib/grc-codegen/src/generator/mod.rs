use crate::error::GeneratorError;
use crate::generator::config::{GeneratorConfig, STYLESHEET_FILE};
use crate::placeholder;
use crate::source::{self, TemplateSource};
use crate::variant::Variant;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

pub mod config;

#[cfg(test)]
mod tests;

/// Name substituted into templates, taken from the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName(String);

impl ComponentName {
    /// Uses the final segment of `path`.
    ///
    /// Fails when the path has no final segment (`/`, `..`) or when that
    /// segment is not valid UTF-8.
    pub fn try_from_path(path: &Path) -> Result<Self, GeneratorError> {
        path.file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .map(|name| Self(name.to_string()))
            .ok_or_else(|| GeneratorError::InvalidComponentName(path.to_path_buf()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file written by the generator. Existing files are replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
}

/// Outcome of a single generation request, one entry per output file.
#[derive(Debug)]
pub struct GenerationReport {
    pub component_name: ComponentName,
    pub target_directory: PathBuf,
    pub component: Result<OutputFile, GeneratorError>,
    pub stylesheet: Result<OutputFile, GeneratorError>,
}

impl GenerationReport {
    pub fn outputs(&self) -> [&Result<OutputFile, GeneratorError>; 2] {
        [&self.component, &self.stylesheet]
    }

    pub fn is_success(&self) -> bool {
        self.outputs().iter().all(|output| output.is_ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = &GeneratorError> {
        self.outputs()
            .into_iter()
            .filter_map(|output| output.as_ref().err())
    }
}

/// Writes a component file and an empty stylesheet into a target directory.
pub struct ComponentGenerator<'a> {
    target_directory: PathBuf,
    component_name: ComponentName,
    source: &'a dyn TemplateSource,
    config: &'a GeneratorConfig,
}

impl<'a> ComponentGenerator<'a> {
    pub fn try_new(
        target_directory: impl Into<PathBuf>,
        source: &'a dyn TemplateSource,
        config: &'a GeneratorConfig,
    ) -> Result<Self, GeneratorError> {
        let target_directory = target_directory.into();
        let component_name = ComponentName::try_from_path(&target_directory)?;

        Ok(Self {
            target_directory,
            component_name,
            source,
            config,
        })
    }

    /// Renders the template tagged with `variant` and writes both output files.
    ///
    /// The stylesheet is written whatever happens to the component file.
    /// Both writes are awaited before returning.
    pub async fn generate(&self, variant: Variant) -> GenerationReport {
        debug!(
            %variant,
            source = self.source.name(),
            target = ?self.target_directory,
            "Generating component {}",
            self.component_name
        );

        let (component, stylesheet) = tokio::join!(
            self.emit_component(variant),
            self.emit(STYLESHEET_FILE, String::new())
        );

        GenerationReport {
            component_name: self.component_name.clone(),
            target_directory: self.target_directory.clone(),
            component,
            stylesheet,
        }
    }

    async fn render(&self, variant: Variant) -> Result<String, GeneratorError> {
        let templates = self.source.list().await?;
        let template = source::select(&templates, variant)?;
        let text = self.source.read(template).await?;

        Ok(placeholder::substitute(&text, self.component_name.as_str()).into_owned())
    }

    async fn emit_component(&self, variant: Variant) -> Result<OutputFile, GeneratorError> {
        let content = self.render(variant).await?;
        self.emit(&self.config.component_file, content).await
    }

    async fn emit(&self, file_name: &str, content: String) -> Result<OutputFile, GeneratorError> {
        let path = self.target_directory.join(file_name);
        if let Err(source) = tokio::fs::write(&path, content).await {
            error!(?path, %source, "Failed to write file");
            return Err(GeneratorError::Write { path, source });
        }

        info!(?path, "Wrote file");

        Ok(OutputFile { path })
    }
}
