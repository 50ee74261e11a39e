pub const MANUAL: &str = r#"NAME
    new - create a new project from a signal specification

SYNOPSIS
    vproj new [options] <name> [<signals>]

DESCRIPTION
    This command creates the directory <name> in the workspace containing
    'rtl/<name>.v', 'sim/<name>_tb.v', a Makefile and a README.md.

    The name must be a valid Verilog identifier: a letter or underscore
    followed by letters, digits or underscores. An invalid name is rejected
    before anything is written.

    The signals describe the module's ports. See 'vproj help signals' for the
    format. Malformed tokens are skipped unless '--strict' is given, in
    which case every malformed token is reported with its position and
    nothing is written.

    If the project directory already exists you are asked before it is
    replaced. Declining leaves the workspace untouched. The new tree is
    written to a staging directory first and only moved into place once
    every file was written.

OPTIONS
    --strict
        Reject the specification if any token is malformed

    --force
        Overwrite an existing project without asking

EXAMPLES
    vproj new adder "[3:0] a, [3:0] b / [4:0] sum"
    vproj new blink "clk, rst / led"
    vproj new --strict alu "signed [7:0] x, signed [7:0] y, [1:0] op / signed [7:0] r"
"#;
