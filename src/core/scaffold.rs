//! Materializes a [`CommandDescriptor`] as a source file.

use heck::{ToLowerCamelCase, ToUpperCamelCase};
use serde::Serialize;
use std::path::PathBuf;

use crate::command_spec::CommandDescriptor;
use crate::defaults::Defaults;
use crate::error::{Error, Result};
use crate::utils::{io, template};

pub struct TemplateVars;

impl TemplateVars {
    pub const NAME: &'static str = "name";
    pub const EXPORTED_NAME: &'static str = "exportedName";
    pub const VARIABLE_NAME: &'static str = "variableName";
    pub const PARENT_PATH: &'static str = "parentPath";
    pub const PARENT_HANDLE: &'static str = "parentHandle";
    pub const TEMPLATE_NAME_PREFIX: &'static str = "templateNamePrefix";
    pub const IMPORT_PATH_PREFIX: &'static str = "importPathPrefix";
    pub const PACKAGE_NAME: &'static str = "packageName";
    pub const FRAMEWORK_IMPORT: &'static str = "frameworkImport";
    pub const FRAMEWORK_PACKAGE: &'static str = "frameworkPackage";
    pub const MODULE_PATH: &'static str = "modulePath";
}

/// Extension of generated files.
pub const FILE_EXTENSION: &str = "go";

/// Built-in command template. The generated command is returned from a
/// constructor so the parent wires it in explicitly.
pub const DEFAULT_TEMPLATE: &str = r#"package {{packageName}}

import (
	"{{frameworkImport}}"
)

// New{{exportedName}}Command builds the "{{name}}" command.
// Attach it to its parent's command list.
func New{{exportedName}}Command() *{{frameworkPackage}}.Command {
	return {{variableName}}
}

var {{variableName}} = &{{frameworkPackage}}.Command{
	Name:  "{{name}}",
	Help:  "{{name}} command",
	Usage: "{{name}}",
	Flags: func(f *{{frameworkPackage}}.Flags) {
	},
	Args: func(a *{{frameworkPackage}}.Args) {
	},
	Run: func(c *{{frameworkPackage}}.Context) error {
		return nil
	},
}
"#;

#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Overwrite an existing file instead of failing.
    pub force: bool,
    /// Render only; write nothing.
    pub dry_run: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCommand {
    pub name: String,
    pub file: PathBuf,
    pub written: bool,
    pub overwritten: bool,
}

/// Generated file name: `<name>.go` at the root, `<prefix>_<name>.go` below it.
pub fn file_name(descriptor: &CommandDescriptor<'_>) -> String {
    if descriptor.is_root() {
        format!("{}.{}", descriptor.name, FILE_EXTENSION)
    } else {
        format!(
            "{}_{}.{}",
            descriptor.template_name_prefix, descriptor.name, FILE_EXTENSION
        )
    }
}

/// Go variable holding the command, unique across the tree.
pub fn variable_name(descriptor: &CommandDescriptor<'_>) -> String {
    if descriptor.is_root() {
        format!("{}Cmd", descriptor.name.to_lower_camel_case())
    } else {
        format!(
            "{}{}Cmd",
            descriptor.template_name_prefix.to_lower_camel_case(),
            descriptor.name.to_upper_camel_case()
        )
    }
}

/// Package qualifier of an import path (its last segment).
fn framework_package(import: &str) -> &str {
    import.rsplit('/').next().unwrap_or(import)
}

pub fn render(descriptor: &CommandDescriptor<'_>, source: &str, defaults: &Defaults) -> String {
    let exported = descriptor.name.to_upper_camel_case();
    let variable = variable_name(descriptor);
    let module_path = descriptor.project.absolute_path.display().to_string();
    let framework_package = framework_package(&defaults.framework_import);

    template::render(
        source,
        &[
            (TemplateVars::NAME, descriptor.name.as_str()),
            (TemplateVars::EXPORTED_NAME, exported.as_str()),
            (TemplateVars::VARIABLE_NAME, variable.as_str()),
            (TemplateVars::PARENT_PATH, descriptor.parent_path.as_str()),
            (TemplateVars::PARENT_HANDLE, descriptor.parent_handle.as_str()),
            (
                TemplateVars::TEMPLATE_NAME_PREFIX,
                descriptor.template_name_prefix.as_str(),
            ),
            (
                TemplateVars::IMPORT_PATH_PREFIX,
                descriptor.import_path_prefix.as_str(),
            ),
            (TemplateVars::PACKAGE_NAME, descriptor.package_name.as_str()),
            (
                TemplateVars::FRAMEWORK_IMPORT,
                defaults.framework_import.as_str(),
            ),
            (TemplateVars::FRAMEWORK_PACKAGE, framework_package),
            (TemplateVars::MODULE_PATH, module_path.as_str()),
        ],
    )
}

/// Template source: the configured custom template, or the built-in one.
pub fn load_template(defaults: &Defaults) -> Result<String> {
    let Some(path) = defaults.template_path() else {
        return Ok(DEFAULT_TEMPLATE.to_string());
    };

    let source = io::read_file(&path, &format!("read template {}", path.display()))?;
    if !template::is_present(&source, TemplateVars::PACKAGE_NAME) {
        log_status!(
            "scaffold",
            "Template {} does not reference {{{{packageName}}}}",
            path.display()
        );
    }
    Ok(source)
}

/// Render and write the command file under `descriptor.filesystem_path`.
pub fn create(
    descriptor: &CommandDescriptor<'_>,
    defaults: &Defaults,
    options: &ScaffoldOptions,
) -> Result<CreatedCommand> {
    let source = load_template(defaults)?;
    let content = render(descriptor, &source, defaults);
    let file = descriptor.filesystem_path.join(file_name(descriptor));
    let exists = file.exists();

    if exists && !options.force {
        return Err(Error::scaffold_file_exists(file.display().to_string()));
    }

    if options.dry_run {
        return Ok(CreatedCommand {
            name: descriptor.name.clone(),
            file,
            written: false,
            overwritten: false,
        });
    }

    io::ensure_dir(
        &descriptor.filesystem_path,
        &format!("create {}", descriptor.filesystem_path.display()),
    )?;
    io::write_file_atomic(&file, &content, &format!("write {}", file.display()))?;
    log_status!("scaffold", "Wrote {}", file.display());

    Ok(CreatedCommand {
        name: descriptor.name.clone(),
        file,
        written: true,
        overwritten: exists,
    })
}
