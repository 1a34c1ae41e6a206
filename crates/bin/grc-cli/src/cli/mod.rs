use crate::error::CliError;
use clap::{Args, Parser, Subcommand};
use grc_codegen::prelude::Variant;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Workspace root, used to place the default `ReactComponent` folder.
    ///
    /// Defaults to the current directory.
    #[arg(short, long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Directory containing templates to use instead of the built-in ones.
    ///
    /// A template is used for a component style when its file name, up to
    /// the first dot, equals the style tag (`basic-comp`, `redux-comp`, `stateless`).
    #[arg(short, long, global = true)]
    pub templates: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a class component (grc.basicComponent)
    Basic(TargetArgs),

    /// Generate a redux connected component (grc.reduxComponent)
    Redux(TargetArgs),

    /// Generate a function component (grc.stateLessComponent)
    Stateless(TargetArgs),

    /// List the available templates
    Templates,
}

#[derive(Args)]
pub struct TargetArgs {
    /// Folder to generate into, its name becomes the component name.
    ///
    /// Existing `index.tsx` and `index.scss` files are overwritten.
    pub folder: Option<PathBuf>,
}

impl Command {
    /// The variant and target folder of a generation command.
    pub fn generation(&self) -> Option<(Variant, Option<&Path>)> {
        let (variant, args) = match self {
            Command::Basic(args) => (Variant::Basic, args),
            Command::Redux(args) => (Variant::Redux, args),
            Command::Stateless(args) => (Variant::Stateless, args),
            Command::Templates => return None,
        };

        Some((variant, args.folder.as_deref()))
    }
}

/// Checks if a path exists and is a directory.
pub fn check_path(path: &Path) -> Result<(), CliError> {
    let exists = path
        .try_exists()
        .map_err(|error| CliError::InvalidPath(format!("{}: {error}", path.display())))?;

    if !exists {
        return Err(CliError::InexistentPath(
            path.to_string_lossy().to_string(),
        ));
    }

    if !path.is_dir() {
        return Err(CliError::NotDirectory(path.to_string_lossy().to_string()));
    }

    Ok(())
}
