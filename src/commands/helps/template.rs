pub const HELP: &str = r#"Create a new project from a built-in design.

Usage:
    vproj template [options] [<name>]

Args:
    <name>          built-in template to generate

Options:
    --list          view available templates and exit
    --force         overwrite an existing project without asking

Use 'vproj help template' to read more about the command.
"#;
