//! String template rendering utilities.
//!
//! Placeholders take the form `{{key}}`. Unknown placeholders are left in
//! place.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap());

/// Substitute every known placeholder in one pass over `template`.
///
/// Substituted values are never rescanned, so a value containing `{{key}}`
/// is emitted literally.
pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            variables
                .iter()
                .find(|(key, _)| *key == &caps[1])
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

pub fn is_present(template: &str, key: &str) -> bool {
    let placeholder = format!("{{{{{}}}}}", key);
    template.contains(&placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_every_occurrence() {
        let out = render("{{name}} and {{name}}", &[("name", "list")]);
        assert_eq!(out, "list and list");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let out = render("{{name}} {{other}}", &[("name", "list")]);
        assert_eq!(out, "list {{other}}");
    }

    #[test]
    fn render_does_not_expand_substituted_values() {
        let out = render(
            "{{name}}/{{parentPath}}",
            &[("name", "{{parentPath}}"), ("parentPath", "admin")],
        );
        assert_eq!(out, "{{parentPath}}/admin");
    }

    #[test]
    fn is_present_detects_placeholder() {
        assert!(is_present("package {{packageName}}", "packageName"));
        assert!(!is_present("package cmd", "packageName"));
    }
}
