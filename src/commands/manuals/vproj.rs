pub const MANUAL: &str = r#"NAME
    vproj - project generator and batch manager for Verilog designs

SYNOPSIS
    vproj [options] [command]

DESCRIPTION
    Vproj scaffolds Verilog projects from a compact signal specification and
    manages a workspace of such projects.

    A project is a directory holding an 'rtl/' directory with the design, a
    'sim/' directory with its testbench, a Makefile driving Icarus Verilog,
    and a README. The workspace is the directory whose immediate
    subdirectories are projects. It defaults to the current working
    directory and can be changed with the VPROJ_WORKSPACE environment
    variable.

ENVIRONMENT
    VPROJ_HOME
        Directory holding the global config.toml (default: ~/.vproj)

    VPROJ_WORKSPACE
        Directory whose subdirectories are managed as projects

    VPROJ_LOG
        Diagnostic log filter, such as 'debug' (default: warn)

TOPICS
    new, template, list, show, build, report, signals, config
"#;
