//! Derivation of every name and location a new sub-command needs.
//!
//! Pure string and path arithmetic: nothing here touches the filesystem.
//! The working directory and module root arrive already resolved (see
//! [`crate::environment`]).

use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::identifier;

/// Directory, relative to the working directory, that holds the command tree.
pub const COMMANDS_DIR: &str = "cmd";

/// Package name used for commands attached at the tree root.
pub const ROOT_PACKAGE: &str = "cmd";

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Read-only view of the project the command is generated into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    pub absolute_path: PathBuf,
    pub viper: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDescriptor<'a> {
    pub name: String,
    pub parent_path: String,
    pub parent_handle: String,
    pub filesystem_path: PathBuf,
    pub template_name_prefix: String,
    pub import_path_prefix: String,
    pub package_name: String,
    pub project: &'a ProjectContext,
}

impl CommandDescriptor<'_> {
    pub fn is_root(&self) -> bool {
        self.parent_path.is_empty()
    }
}

/// Split a parent path into its segments. The empty path has none.
pub fn parent_segments(parent_path: &str) -> Vec<&str> {
    if parent_path.is_empty() {
        Vec::new()
    } else {
        parent_path.split('/').collect()
    }
}

/// Reject blank command names, returning the trimmed name.
pub fn validate_name(raw_name: &str) -> Result<&str> {
    let trimmed = raw_name.trim();
    if trimmed.is_empty() {
        return Err(Error::validation_invalid_argument(
            "command",
            "Command name cannot be empty",
            None,
            None,
        ));
    }
    Ok(trimmed)
}

/// True when `value` can be used verbatim as a Go identifier and path component.
pub fn is_identifier(value: &str) -> bool {
    IDENTIFIER.is_match(value)
}

/// Build the descriptor for `raw_name` attached under `parent_path`.
///
/// Fails with `validation.invalid_argument` when the name is blank or not an
/// identifier once sanitized, or when a parent segment is empty or not an
/// identifier. Every accepted descriptor stays below `<working_dir>/cmd`.
pub fn build<'a>(
    raw_name: &str,
    parent_path: &str,
    module_root: &str,
    working_dir: &Path,
    project: &'a ProjectContext,
) -> Result<CommandDescriptor<'a>> {
    let name = identifier::sanitize(validate_name(raw_name)?).into_owned();
    if !is_identifier(&name) {
        return Err(Error::validation_invalid_argument(
            "command",
            format!("Command name '{}' is not a valid identifier", name),
            Some(raw_name.to_string()),
            None,
        ));
    }

    let segments = parent_segments(parent_path);

    if segments.iter().any(|s| s.is_empty()) {
        return Err(Error::validation_invalid_argument(
            "parent",
            "Parent path cannot contain empty segments",
            Some(parent_path.to_string()),
            None,
        ));
    }
    if let Some(bad) = segments.iter().find(|s| !is_identifier(s)) {
        return Err(Error::validation_invalid_argument(
            "parent",
            format!("Parent segment '{}' is not a valid identifier", bad),
            Some(parent_path.to_string()),
            None,
        ));
    }

    let filesystem_path = segments
        .iter()
        .fold(working_dir.join(COMMANDS_DIR), |path, segment| {
            path.join(segment)
        });

    let (parent_handle, import_path_prefix, package_name) = match segments.last() {
        Some(last) => (
            segments.join("_"),
            format!("{}/{}/{}", module_root, COMMANDS_DIR, parent_path),
            (*last).to_string(),
        ),
        None => (
            String::new(),
            format!("{}/{}", module_root, COMMANDS_DIR),
            ROOT_PACKAGE.to_string(),
        ),
    };

    Ok(CommandDescriptor {
        name,
        parent_path: parent_path.to_string(),
        template_name_prefix: parent_handle.clone(),
        parent_handle,
        filesystem_path,
        import_path_prefix,
        package_name,
        project,
    })
}
