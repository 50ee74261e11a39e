pub const HELP: &str = r#"List the projects in the workspace.

Usage:
    vproj list

Use 'vproj help list' to read more about the command.
"#;
