pub const HELP: &str = r#"Vproj is a project generator and batch manager for Verilog designs.

Usage:
    vproj [options] [command]

Commands:
    new             create a new project from a signal specification
    template        create a new project from a built-in design
    list            list the projects in the workspace
    show            summarize a single project
    compile         compile every project in the workspace
    simulate        simulate every project in the workspace
    clean           remove build artifacts from every project
    report          write a json summary of the workspace
    help            read in-depth documentation on a topic

Options:
    --version       print version information and exit
    --force         skip confirmation prompts
    --color <when>  coloring: auto, always, never
    --help, -h      print help information

Use 'vproj help <command>' for more information about a command.
"#;
