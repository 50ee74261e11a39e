pub const HELP: &str = r#"Read in-depth documentation on vproj topics.

Usage:
    vproj help [<topic>]

Args:
    <topic>         a listed topic or any vproj command

Options:
    --list          view available topics and exit

Use 'vproj help --list' to see all available topics.
"#;
