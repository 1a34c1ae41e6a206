use crate::error::CliError;
use crate::notifier::{Notifier, Severity};
use grc_codegen::prelude::{
    ComponentGenerator, GenerationReport, GeneratorConfig, TemplateFile, TemplateSource, Variant,
};
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod config;


use config::DispatcherConfig;

/// Resolves the target of a command and hands it to the generator.
pub struct Dispatcher<'a> {
    config: &'a DispatcherConfig,
    generator_config: &'a GeneratorConfig,
    source: &'a dyn TemplateSource,
    notifier: &'a dyn Notifier,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        config: &'a DispatcherConfig,
        generator_config: &'a GeneratorConfig,
        source: &'a dyn TemplateSource,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            config,
            generator_config,
            source,
            notifier,
        }
    }

    /// Runs a generation command and notifies the user of the outcome.
    ///
    /// Only fatal errors are returned, everything else has already been
    /// reported through the notifier.
    pub async fn run(&self, variant: Variant, folder: Option<&Path>) -> Result<(), CliError> {
        match self.dispatch(variant, folder).await {
            Ok(report) => {
                self.report(&report);
                Ok(())
            }
            Err(error) if error.is_fatal() => Err(error),
            Err(error) => {
                self.notifier.notify(Severity::Error, &error.to_string());
                Ok(())
            }
        }
    }

    pub async fn dispatch(
        &self,
        variant: Variant,
        folder: Option<&Path>,
    ) -> Result<GenerationReport, CliError> {
        let target = match folder {
            Some(folder) => Self::resolve_folder(folder)?,
            None => self.ensure_default_directory().await?,
        };

        debug!(?target, %variant, "Resolved target directory");

        let generator = ComponentGenerator::try_new(target, self.source, self.generator_config)?;

        Ok(generator.generate(variant).await)
    }

    /// Lists the templates of the active source with the variant each one serves.
    pub async fn templates(&self) -> Result<Vec<(TemplateFile, Option<Variant>)>, CliError> {
        let templates = self.source.list().await?;

        Ok(templates
            .into_iter()
            .map(|template| {
                let variant = Variant::from_tag(&template.tag);
                (template, variant)
            })
            .collect())
    }

    /// Makes `folder` absolute without resolving symlinks, so the component
    /// is named after the folder as given.
    fn resolve_folder(folder: &Path) -> Result<PathBuf, CliError> {
        crate::cli::check_path(folder)?;

        std::path::absolute(folder).map_err(|error| CliError::InvalidPath(error.to_string()))
    }

    async fn ensure_default_directory(&self) -> Result<PathBuf, CliError> {
        let path = self
            .config
            .workspace_root
            .join(&self.config.default_directory);

        tokio::fs::create_dir_all(&path)
            .await
            .map_err(|source| CliError::DefaultDirectory {
                path: path.clone(),
                source,
            })?;

        self.notifier.notify(
            Severity::Warning,
            &format!("No folder selected, generating into {}", path.display()),
        );

        Ok(path)
    }

    fn report(&self, report: &GenerationReport) {
        for error in report.errors() {
            self.notifier.notify(Severity::Error, &error.to_string());
        }

        if report.is_success() {
            self.notifier.notify(
                Severity::Success,
                &format!(
                    "{} generated in {}",
                    report.component_name,
                    report.target_directory.display()
                ),
            );
        }
    }
}
