use crate::error::TemplateError;
use crate::variant::Variant;
use async_trait::async_trait;
use tracing::debug;

pub mod directory;
pub mod embedded;

/// A template known to a [`TemplateSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// File name inside the source, e.g. `stateless.tsx.tmpl`.
    pub file_name: String,
    /// Everything before the first `.` of the file name, e.g. `stateless`.
    pub tag: String,
}

impl TemplateFile {
    pub fn new(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let tag = file_name
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string();

        Self { file_name, tag }
    }
}

/// Trait defining where templates come from.
///
/// Implementors only list and load raw template text; selection and
/// substitution are handled by the generator.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// List every template the source offers.
    async fn list(&self) -> Result<Vec<TemplateFile>, TemplateError>;

    /// Load the text of a template previously returned by [`TemplateSource::list`].
    async fn read(&self, template: &TemplateFile) -> Result<String, TemplateError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Picks the one template whose tag equals the variant tag.
pub fn select(templates: &[TemplateFile], variant: Variant) -> Result<&TemplateFile, TemplateError> {
    let tag = variant.tag();
    let mut candidates = templates.iter().filter(|template| template.tag == tag);

    let Some(selected) = candidates.next() else {
        return Err(TemplateError::TemplateNotFound {
            tag: tag.to_string(),
        });
    };

    let others: Vec<&TemplateFile> = candidates.collect();
    if !others.is_empty() {
        let candidates = std::iter::once(selected)
            .chain(others)
            .map(|template| template.file_name.clone())
            .collect();

        return Err(TemplateError::AmbiguousTemplate {
            tag: tag.to_string(),
            candidates,
        });
    }

    debug!(template = %selected.file_name, %variant, "Selected template");

    Ok(selected)
}
