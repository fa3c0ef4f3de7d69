use std::path::{Path, PathBuf};

use cmdsmith::command_spec::{self, ProjectContext};
use cmdsmith::identifier::sanitize;
use cmdsmith::ErrorCode;

fn project(path: &str) -> ProjectContext {
    ProjectContext {
        absolute_path: PathBuf::from(path),
        viper: false,
    }
}

#[test]
fn sanitize_documented_cases() {
    assert_eq!(sanitize("foo-bar"), "fooBar");
    assert_eq!(sanitize("foo_bar-baz"), "fooBarBaz");
    assert_eq!(sanitize("foo-"), "foo");
    assert_eq!(sanitize("foo--bar"), "fooBar");
    assert_eq!(sanitize("-foo"), "Foo");
}

#[test]
fn sanitize_is_identity_without_separators() {
    for input in ["list", "fooBar", "Users2", "x", "a.b"] {
        assert_eq!(sanitize(input), input);
    }
}

#[test]
fn root_command_descriptor() {
    let ctx = project("/home/u/proj");
    let desc = command_spec::build(
        "list",
        "",
        "example.com/mod",
        Path::new("/home/u/proj"),
        &ctx,
    )
    .unwrap();

    assert_eq!(desc.name, "list");
    assert_eq!(desc.parent_handle, "");
    assert_eq!(desc.filesystem_path, PathBuf::from("/home/u/proj/cmd"));
    assert_eq!(desc.import_path_prefix, "example.com/mod/cmd");
    assert_eq!(desc.package_name, "cmd");
}

#[test]
fn nested_command_descriptor() {
    let ctx = project("/home/u/proj");
    let desc = command_spec::build(
        "list",
        "admin/users",
        "example.com/mod",
        Path::new("/home/u/proj"),
        &ctx,
    )
    .unwrap();

    assert_eq!(desc.parent_handle, "admin_users");
    assert_eq!(
        desc.filesystem_path,
        PathBuf::from("/home/u/proj/cmd/admin/users")
    );
    assert_eq!(desc.import_path_prefix, "example.com/mod/cmd/admin/users");
    assert_eq!(desc.package_name, "users");
}

#[test]
fn empty_name_fails_for_every_parent() {
    let ctx = project("/w");
    for parent in ["", "a", "a/b", "a/b/c"] {
        let err = command_spec::build("", parent, "m", Path::new("/w"), &ctx).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
    }
}

#[test]
fn descriptor_invariants_hold() {
    let ctx = project("/w");
    for parent in ["", "a", "a/b", "x/y/z"] {
        let desc =
            command_spec::build("do-it", parent, "example.com/m", Path::new("/w"), &ctx).unwrap();

        assert!(!desc.package_name.is_empty());
        assert!(desc.import_path_prefix.starts_with("example.com/m"));
        assert_eq!(desc.template_name_prefix, desc.parent_handle);
        if parent.is_empty() {
            assert!(desc.parent_handle.is_empty());
        } else {
            let expected = parent.rsplit('/').next().unwrap();
            assert_eq!(desc.package_name, expected);
        }
    }
}
