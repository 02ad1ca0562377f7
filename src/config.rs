//! Configuration file handling for pgogen
//!
//! An optional `pgogen.yaml` in the workspace directory overrides the
//! defaults. The default package list matches the packages whose hot paths
//! the server's benchmarks cover.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PgogenError, Result};
use crate::package;

/// Configuration file name looked up in the workspace directory
pub const CONFIG_FILE: &str = "pgogen.yaml";

fn default_go() -> String {
    "go".to_string()
}

fn default_benchtime() -> String {
    "10s".to_string()
}

fn default_packages() -> Vec<String> {
    vec![
        "cmd/server".to_string(),
        "internal/adapters/inbound".to_string(),
        "internal/adapters/outbound".to_string(),
    ]
}

/// Profile generation configuration (pgogen.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PgogenConfig {
    /// Go toolchain binary to invoke
    #[serde(default = "default_go")]
    pub go: String,

    /// Value passed to `go test -benchtime`
    #[serde(default = "default_benchtime")]
    pub benchtime: String,

    /// Package paths to benchmark and profile
    #[serde(default = "default_packages")]
    pub packages: Vec<String>,
}

impl Default for PgogenConfig {
    fn default() -> Self {
        Self {
            go: default_go(),
            benchtime: default_benchtime(),
            packages: default_packages(),
        }
    }
}

impl PgogenConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration for `workspace`, falling back to defaults when no
    /// `pgogen.yaml` exists there
    pub fn load(workspace: &Path) -> Result<Self> {
        let path = workspace.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| PgogenError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| PgogenError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Reject the whole configuration if any entry would reach an external
    /// command without passing the package-path allow-list
    pub fn validate(&self) -> Result<()> {
        if self.packages.is_empty() {
            return Err(PgogenError::ConfigInvalid {
                message: "packages list is empty".to_string(),
            });
        }
        for pkg in &self.packages {
            if !package::validate_package_path(pkg) {
                return Err(PgogenError::InvalidPackagePath { path: pkg.clone() });
            }
        }
        Ok(())
    }
}
