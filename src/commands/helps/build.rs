pub const COMPILE: &str = r#"Compile every project in the workspace.

Usage:
    vproj compile [options]

Options:
    --timeout <secs>    seconds to wait on each project
    --verbose           display the command and its output

Use 'vproj help build' to read more about the command.
"#;

pub const SIMULATE: &str = r#"Simulate every project in the workspace.

Usage:
    vproj simulate [options]

Options:
    --timeout <secs>    seconds to wait on each project
    --verbose           display the command and its output

Use 'vproj help build' to read more about the command.
"#;

pub const CLEAN: &str = r#"Remove build artifacts from every project.

Usage:
    vproj clean [options]

Options:
    --timeout <secs>    seconds to wait on each project
    --verbose           display the command and its output

Use 'vproj help build' to read more about the command.
"#;
