use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths;

/// Root configuration structure for cmdsmith.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via cmdsmith.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Manifest file whose `module` directive names the import root.
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default)]
    pub viper: bool,

    /// Custom command template; `~` is expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(default = "default_framework_import")]
    pub framework_import: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            viper: false,
            template: None,
            framework_import: default_framework_import(),
        }
    }
}

impl Defaults {
    /// Resolved path of the custom template, if one is configured.
    pub fn template_path(&self) -> Option<PathBuf> {
        self.template
            .as_deref()
            .map(|raw| PathBuf::from(shellexpand::tilde(raw).into_owned()))
    }

    fn validate(&self) -> Result<()> {
        if self.manifest.trim().is_empty() {
            return Err(Error::config_invalid_value(
                "defaults.manifest",
                Some(self.manifest.clone()),
                "manifest file name cannot be empty",
            ));
        }
        if self.manifest.contains('/') || self.manifest.contains('\\') {
            return Err(Error::config_invalid_value(
                "defaults.manifest",
                Some(self.manifest.clone()),
                "manifest must be a file name, not a path",
            ));
        }
        if self.framework_import.trim().is_empty() {
            return Err(Error::config_invalid_value(
                "defaults.framework_import",
                Some(self.framework_import.clone()),
                "framework import path cannot be empty",
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_manifest() -> String {
    "go.mod".to_string()
}

fn default_framework_import() -> String {
    "github.com/chroblert/jishell".to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load cmdsmith.json, reporting why it could not be used.
///
/// A missing file is not an error; it yields the built-in defaults.
pub fn load_config_from_file() -> Result<GeneratorConfig> {
    let path = paths::cmdsmith_json()?;

    if !path.exists() {
        return Ok(GeneratorConfig::default());
    }

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> Result<GeneratorConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    let config: GeneratorConfig = serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;

    config.defaults.validate()?;

    Ok(config)
}

/// Check if cmdsmith.json file exists
pub fn config_exists() -> bool {
    paths::cmdsmith_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}

/// Get the path to cmdsmith.json (for display purposes)
pub fn config_path() -> Result<String> {
    Ok(paths::cmdsmith_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}
