pub const DEFAULT_COMPONENT_FILE: &str = "index.tsx";

/// Stylesheet written next to the component. The templates import it by
/// this name, so it is not configurable.
pub const STYLESHEET_FILE: &str = "index.scss";

/// Name of the component file written into the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub component_file: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            component_file: DEFAULT_COMPONENT_FILE.to_string(),
        }
    }
}
