pub const MANUAL: &str = r#"NAME
    template - create a new project from a built-in design

SYNOPSIS
    vproj template [options] [<name>]

DESCRIPTION
    This command creates a project from one of the built-in designs. Unlike
    'vproj new', the design and testbench are complete working examples. The
    Makefile and README are generated from the design's ports.

    The project directory takes the name of the template. Overwriting an
    existing directory follows the same rules as 'vproj new'.

    Available templates: mux2to1, demux1to2, counter, shift_register, fsm.

OPTIONS
    --list
        View available templates and exit

    --force
        Overwrite an existing project without asking

EXAMPLES
    vproj template --list
    vproj template counter
"#;
