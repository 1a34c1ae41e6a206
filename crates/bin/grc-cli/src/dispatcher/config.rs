use std::path::PathBuf;

pub const DEFAULT_DIRECTORY: &str = "ReactComponent";

pub struct DispatcherConfig {
    pub workspace_root: PathBuf,
    /// Folder created under `workspace_root` when no target is given.
    pub default_directory: String,
}

impl DispatcherConfig {
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            default_directory: DEFAULT_DIRECTORY.to_string(),
        }
    }
}
