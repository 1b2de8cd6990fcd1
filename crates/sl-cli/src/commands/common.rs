//! Shared helpers for command implementations

use anyhow::{Context, Result};
use sl_core::Config;
use std::path::PathBuf;

use crate::cli::GlobalArgs;

/// A loaded project: its root directory plus parsed configuration
pub(crate) struct ProjectContext {
    pub root: PathBuf,
    pub config: Config,
}

/// Load the project configuration from the --project-dir
pub(crate) fn load_project(global: &GlobalArgs) -> Result<ProjectContext> {
    let root = PathBuf::from(&global.project_dir);
    let config = Config::load_from_dir(&root).context("Failed to load project configuration")?;

    if global.verbose {
        eprintln!("[verbose] Loaded project '{}' from {}", config.name, root.display());
    }

    Ok(ProjectContext { root, config })
}
