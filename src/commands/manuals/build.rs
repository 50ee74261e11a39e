pub const MANUAL: &str = r#"NAME
    compile, simulate, clean - run a build step in every project

SYNOPSIS
    vproj compile [options]
    vproj simulate [options]
    vproj clean [options]

DESCRIPTION
    These commands run the build tool in each project of the workspace, one
    project at a time. The build tool defaults to 'make' and is invoked with
    the step's target ('compile', 'simulate' or 'clean') as its last
    argument.

    Each project is given a time limit: 30 seconds to compile or simulate and
    10 seconds to clean by default. A project that exceeds its limit is
    stopped and reported as timed out.

    A failing project does not stop the remaining projects. After every
    project ran, a tally is printed and the command fails if any project
    failed.

OPTIONS
    --timeout <secs>
        Seconds to wait on each project, overriding the configured limit

    --verbose
        Display the command and the output of every project

EXAMPLES
    vproj compile
    vproj simulate --timeout 120
"#;
