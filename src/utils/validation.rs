//! Input validation primitives.

/// Strip leading and trailing `/` from a user-supplied parent path.
pub fn normalize_parent_path(raw: &str) -> &str {
    raw.trim().trim_matches('/')
}
