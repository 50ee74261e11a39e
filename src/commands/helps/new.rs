pub const HELP: &str = r#"Create a new project from a signal specification.

Usage:
    vproj new [options] <name> [<signals>]

Args:
    <name>          project and top-level module name
    <signals>       ports as "inputs / outputs" (default: "/")

Options:
    --strict        reject the specification if any token is malformed
    --force         overwrite an existing project without asking

Use 'vproj help new' to read more about the command.
"#;
