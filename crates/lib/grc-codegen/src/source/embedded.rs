use crate::error::TemplateError;
use crate::source::{TemplateFile, TemplateSource};
use async_trait::async_trait;

/// Templates compiled into the binary.
const TEMPLATES: &[(&str, &str)] = &[
    (
        "basic-comp.tsx.tmpl",
        include_str!("../../templates/basic-comp.tsx.tmpl"),
    ),
    (
        "redux-comp.tsx.tmpl",
        include_str!("../../templates/redux-comp.tsx.tmpl"),
    ),
    (
        "stateless.tsx.tmpl",
        include_str!("../../templates/stateless.tsx.tmpl"),
    ),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTemplates;

#[async_trait]
impl TemplateSource for EmbeddedTemplates {
    async fn list(&self) -> Result<Vec<TemplateFile>, TemplateError> {
        Ok(TEMPLATES
            .iter()
            .map(|(file_name, _)| TemplateFile::new(*file_name))
            .collect())
    }

    async fn read(&self, template: &TemplateFile) -> Result<String, TemplateError> {
        TEMPLATES
            .iter()
            .find(|(file_name, _)| *file_name == template.file_name)
            .map(|(_, content)| content.to_string())
            .ok_or_else(|| TemplateError::TemplateRead {
                name: template.file_name.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "not an embedded template",
                ),
            })
    }

    fn name(&self) -> &'static str {
        "embedded"
    }
}
