pub const MANUAL: &str = r#"NAME
    show - summarize a single project

SYNOPSIS
    vproj show <name>

DESCRIPTION
    This command prints the location of a project, its design and testbench
    files with their line counts, and the size of its waveform file
    '<name>.vcd' when a simulation has produced one.

EXAMPLES
    vproj show counter
"#;
