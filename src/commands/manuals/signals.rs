pub const MANUAL: &str = r#"NAME
    signals - the signal specification format

DESCRIPTION
    A signal specification lists a module's input ports and output ports,
    separated by a '/'. Each side is a comma-separated list of ports. Either
    side may be empty.

        <inputs> / <outputs>

    A port is any number of qualifiers followed by a name. A qualifier is
    'signed', 'unsigned', or a bracketed width such as '[7:0]'. Qualifiers
    keep the order in which they were written.

    Tokens that cannot be read, such as a name starting with a digit or a
    port with no name, are skipped. With '--strict' they are reported
    instead and the command fails.

    Everything after the first '/' belongs to the outputs.

EXAMPLES
    clk, rst / led
    [7:0] a, [7:0] b / [8:0] sum
    signed [15:0] x / signed [15:0] y
    / done
"#;
