//! Configuration types and parsing for starlift.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main project configuration from starlift.yml
///
/// The config is constructed once at process start and passed immutably
/// into the pipeline stages; directory paths are stored relative to the
/// project root and resolved with the `*_absolute` helpers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,

    /// Directory containing raw source extracts (`<source>_<table>.csv`)
    #[serde(default = "default_raw_dir")]
    pub raw_dir: String,

    /// Directory for cleaned staging outputs
    #[serde(default = "default_staging_dir")]
    pub staging_dir: String,

    /// Directory for final warehouse tables and the generated schema
    #[serde(default = "default_warehouse_dir")]
    pub warehouse_dir: String,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_raw_dir() -> String {
    "data/raw".to_string()
}

fn default_staging_dir() -> String {
    "data/staging".to_string()
}

fn default_warehouse_dir() -> String {
    "data/warehouse".to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for starlift.yml or starlift.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("starlift.yml");
        let yaml_path = dir.join("starlift.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            })
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        for (field, value) in [
            ("raw_dir", &self.raw_dir),
            ("staging_dir", &self.staging_dir),
            ("warehouse_dir", &self.warehouse_dir),
        ] {
            if value.is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: format!("{} cannot be empty", field),
                });
            }
        }

        Ok(())
    }

    /// Get the absolute raw-extract directory relative to a project root
    pub fn raw_dir_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.raw_dir)
    }

    /// Get the absolute staging directory relative to a project root
    pub fn staging_dir_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.staging_dir)
    }

    /// Get the absolute warehouse directory relative to a project root
    pub fn warehouse_dir_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.warehouse_dir)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
