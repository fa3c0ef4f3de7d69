//! Command name sanitization.
//!
//! Folds `-` and `_` separators into camelCase so a user-supplied command
//! name can be used as an identifier in generated source. ASCII only:
//! multi-byte input is not supported.

use std::borrow::Cow;

fn is_separator(byte: u8) -> bool {
    byte == b'-' || byte == b'_'
}

/// Returns `source` without dashes and underscores, uppercasing the letter
/// that follows each run of separators.
///
/// Input without separators is returned as-is (borrowed). A trailing
/// separator is dropped. If folding would leave nothing (the input is made
/// only of separators), the input is returned unchanged.
pub fn sanitize(source: &str) -> Cow<'_, str> {
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut output: Option<String> = None;
    let mut i = 0;

    while i < len {
        if !is_separator(bytes[i]) {
            if let Some(out) = output.as_mut() {
                out.push(bytes[i] as char);
            }
            i += 1;
            continue;
        }

        let out = output.get_or_insert_with(|| source[..i].to_string());

        if i == len - 1 {
            break;
        }

        // Collapse runs: only the last separator of a run uppercases.
        if is_separator(bytes[i + 1]) {
            i += 1;
            continue;
        }

        out.push(bytes[i + 1].to_ascii_uppercase() as char);
        i += 2;
    }

    match output {
        Some(out) if !out.is_empty() => Cow::Owned(out),
        _ => Cow::Borrowed(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_dash() {
        assert_eq!(sanitize("foo-bar"), "fooBar");
    }

    #[test]
    fn sanitize_mixed_separators() {
        assert_eq!(sanitize("foo_bar-baz"), "fooBarBaz");
    }

    #[test]
    fn sanitize_drops_trailing_separator() {
        assert_eq!(sanitize("foo-"), "foo");
        assert_eq!(sanitize("foo__"), "foo");
    }

    #[test]
    fn sanitize_collapses_consecutive_separators() {
        assert_eq!(sanitize("foo--bar"), "fooBar");
        assert_eq!(sanitize("foo-_-bar"), "fooBar");
    }

    #[test]
    fn sanitize_leading_separator_uppercases_first_letter() {
        assert_eq!(sanitize("-foo"), "Foo");
        assert_eq!(sanitize("--foo"), "Foo");
    }

    #[test]
    fn sanitize_keeps_digits_after_separator() {
        assert_eq!(sanitize("v-2"), "v2");
        assert_eq!(sanitize("get-v2-data"), "getV2Data");
    }

    #[test]
    fn sanitize_clean_input_is_borrowed() {
        assert!(matches!(sanitize("list"), Cow::Borrowed("list")));
        assert!(matches!(sanitize("fooBar"), Cow::Borrowed("fooBar")));
    }

    #[test]
    fn sanitize_separator_only_input_is_unchanged() {
        assert_eq!(sanitize("-"), "-");
        assert_eq!(sanitize("_-_"), "_-_");
    }

    #[test]
    fn sanitize_empty_input() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let samples = [
            "foo-bar",
            "foo_bar-baz",
            "foo-",
            "foo--bar",
            "-foo",
            "--",
            "already",
            "a-b-c-d",
            "x_",
            "_",
            "user-list_all",
        ];

        for sample in samples {
            let once = sanitize(sample).into_owned();
            let twice = sanitize(&once).into_owned();
            assert_eq!(once, twice, "sanitize not idempotent for {:?}", sample);
        }
    }
}
