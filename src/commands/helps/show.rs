pub const HELP: &str = r#"Summarize a single project.

Usage:
    vproj show <name>

Args:
    <name>          project directory within the workspace

Use 'vproj help show' to read more about the command.
"#;
