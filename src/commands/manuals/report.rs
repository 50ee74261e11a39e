pub const MANUAL: &str = r#"NAME
    report - write a json summary of the workspace

SYNOPSIS
    vproj report [options]

DESCRIPTION
    This command writes a json document describing every project in the
    workspace and prints it.

    The document holds the time it was generated, the number of projects,
    and for each project the number of design and testbench files, their
    line counts, and whether a waveform file exists.

    The destination defaults to 'project_report.json' in the workspace and
    can be changed with the 'general.report-file' setting.

OPTIONS
    --output <file>
        Destination of the report
"#;
