pub const MANUAL: &str = r#"NAME
    config - settings files

DESCRIPTION
    Vproj reads two settings files written in TOML. The global file is
    'config.toml' in VPROJ_HOME. The local file is 'vproj.toml' in the
    workspace. A value set in the local file overrides the same value in
    the global file. Unknown keys are an error.

KEYS
    [general]
    report-file         destination of 'vproj report'
    strict              always parse signals strictly

    [build]
    command             build tool to run (default: make)
    args                arguments placed before the step's target
    compile-timeout     seconds allowed for 'compile' (default: 30)
    simulate-timeout    seconds allowed for 'simulate' (default: 30)
    clean-timeout       seconds allowed for 'clean' (default: 10)

EXAMPLES
    [general]
    strict = true

    [build]
    command = "make"
    args = ["-s"]
    simulate-timeout = 120
"#;
