pub const MANUAL: &str = r#"NAME
    list - list the projects in the workspace

SYNOPSIS
    vproj list

DESCRIPTION
    This command prints a table of every project in the workspace with its
    number of design files, number of testbench files, and status.

    A directory counts as a project when it contains 'rtl/', 'sim/' and a
    Makefile. A project is complete when it has at least one design file
    ('rtl/*.v') and one testbench file ('sim/*_tb.v').
"#;
