//! The `add` workflow: validate the request, resolve the module root, derive
//! the descriptor and scaffold the command file.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::command_spec;
use crate::defaults::Defaults;
use crate::environment;
use crate::error::{Error, Result};
use crate::scaffold::{self, ScaffoldOptions};
use crate::utils::validation;

#[derive(Debug, Clone, Default)]
pub struct AddRequest {
    pub command: Option<String>,
    /// Accepted for compatibility; derivation ignores it.
    pub package: Option<String>,
    pub parent: String,
    pub options: ScaffoldOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOutcome {
    pub name: String,
    pub message: String,
    pub file: PathBuf,
    pub written: bool,
    pub overwritten: bool,
    pub descriptor: serde_json::Value,
}

/// Generate the command described by `request` inside the module enclosing
/// `working_dir`.
///
/// The name is checked before the environment is consulted, so a blank name
/// is reported as a validation error even outside a module.
pub fn add(request: &AddRequest, working_dir: &Path, defaults: &Defaults) -> Result<AddOutcome> {
    let raw_name = request
        .command
        .as_deref()
        .ok_or_else(|| Error::validation_missing_argument(vec!["command".to_string()]))?;
    command_spec::validate_name(raw_name)?;

    if let Some(package) = &request.package {
        log_status!("add", "--package {} does not affect generated names", package);
    }

    let module_root = environment::module_root(working_dir, &defaults.manifest)?;
    let project = environment::project_context(working_dir, defaults);

    let parent = validation::normalize_parent_path(&request.parent);
    let descriptor = command_spec::build(raw_name, parent, &module_root, working_dir, &project)?;

    let created = scaffold::create(&descriptor, defaults, &request.options)?;

    let message = if created.written {
        format!("{} created at {}", created.name, created.file.display())
    } else {
        format!("{} would be created at {}", created.name, created.file.display())
    };
    log_status!("add", "{}", message);

    let descriptor = serde_json::to_value(&descriptor).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize descriptor".to_string()))
    })?;

    Ok(AddOutcome {
        name: created.name,
        message,
        file: created.file,
        written: created.written,
        overwritten: created.overwritten,
        descriptor,
    })
}
