pub const HELP: &str = r#"Write a json summary of the workspace.

Usage:
    vproj report [options]

Options:
    --output <file>     destination of the report (default: project_report.json)

Use 'vproj help report' to read more about the command.
"#;
