//! Resolution of the inputs the derivation engine takes as given: the
//! working directory and the enclosing module's import root.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::command_spec::ProjectContext;
use crate::defaults::Defaults;
use crate::error::{Error, Result};

static MODULE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*module\s+(?:"([^"]+)"|(\S+))"#).unwrap());

/// Absolute path of the current working directory.
pub fn working_dir() -> Result<PathBuf> {
    std::env::current_dir()
        .map_err(|e| Error::environment_resolution("working directory", e.to_string(), None))
}

/// Walk from `start` up through its ancestors looking for `manifest`.
pub fn find_manifest(start: &Path, manifest: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(manifest))
        .find(|candidate| candidate.is_file())
}

/// Extract the module path from manifest content.
///
/// Accepts bare and quoted forms and ignores `//` comments.
pub fn parse_module_directive(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let line = match line.find("//") {
            Some(idx) => &line[..idx],
            None => line,
        };
        let caps = MODULE_DIRECTIVE.captures(line)?;
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    })
}

/// Import root of the module enclosing `start`.
pub fn module_root(start: &Path, manifest: &str) -> Result<String> {
    let searched_from = Some(start.display().to_string());

    let path = find_manifest(start, manifest).ok_or_else(|| {
        Error::environment_resolution(
            "module root",
            format!("no {} found in this directory or any parent", manifest),
            searched_from.clone(),
        )
    })?;

    let content = fs::read_to_string(&path).map_err(|e| {
        Error::environment_resolution(
            "module root",
            format!("{}: {}", path.display(), e),
            searched_from.clone(),
        )
    })?;

    parse_module_directive(&content).ok_or_else(|| {
        Error::environment_resolution(
            "module root",
            format!("{} has no module directive", path.display()),
            searched_from,
        )
    })
}

pub fn project_context(working_dir: &Path, defaults: &Defaults) -> ProjectContext {
    ProjectContext {
        absolute_path: working_dir.to_path_buf(),
        viper: defaults.viper,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_bare_module() {
        let content = "module example.com/mod\n\ngo 1.21\n";
        assert_eq!(
            parse_module_directive(content).as_deref(),
            Some("example.com/mod")
        );
    }

    #[test]
    fn parse_quoted_module_with_comment() {
        let content = "// generated\nmodule \"github.com/acme/tool\" // root\n";
        assert_eq!(
            parse_module_directive(content).as_deref(),
            Some("github.com/acme/tool")
        );
    }

    #[test]
    fn parse_ignores_commented_out_directive() {
        let content = "// module old.example/mod\nmodule new.example/mod\n";
        assert_eq!(
            parse_module_directive(content).as_deref(),
            Some("new.example/mod")
        );
    }

    #[test]
    fn parse_missing_directive() {
        assert_eq!(parse_module_directive("go 1.21\n"), None);
        assert_eq!(parse_module_directive("modules are fun\n"), None);
    }

    #[test]
    fn module_root_walks_up_to_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/mod\n").unwrap();
        let nested = dir.path().join("internal").join("pkg");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(module_root(&nested, "go.mod").unwrap(), "example.com/mod");
    }

    #[test]
    fn module_root_without_manifest_fails() {
        let dir = TempDir::new().unwrap();
        let err = module_root(dir.path(), "cmdsmith-missing.mod").unwrap_err();

        assert_eq!(err.code.as_str(), "environment.resolution_failed");
        assert_eq!(err.details["resource"], "module root");
    }

    #[test]
    fn module_root_without_directive_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), "go 1.21\n").unwrap();

        let err = module_root(dir.path(), "go.mod").unwrap_err();
        assert_eq!(err.code.as_str(), "environment.resolution_failed");
    }

    #[test]
    fn unreadable_manifest_is_resolution_failure() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = module_root(dir.path(), "go.mod").unwrap_err();
        assert_eq!(err.code.as_str(), "environment.resolution_failed");
        assert_eq!(err.details["resource"], "module root");
    }

    #[test]
    fn project_context_copies_viper_flag() {
        let defaults = Defaults {
            viper: true,
            ..Defaults::default()
        };
        let ctx = project_context(Path::new("/w"), &defaults);

        assert!(ctx.viper);
        assert_eq!(ctx.absolute_path, PathBuf::from("/w"));
    }
}
