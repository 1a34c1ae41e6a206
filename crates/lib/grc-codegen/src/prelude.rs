pub use crate::error::*;
pub use crate::generator::config::GeneratorConfig;
pub use crate::generator::{ComponentGenerator, ComponentName, GenerationReport, OutputFile};
pub use crate::source::directory::DirectoryTemplates;
pub use crate::source::embedded::EmbeddedTemplates;
pub use crate::source::{TemplateFile, TemplateSource};
pub use crate::variant::Variant;
