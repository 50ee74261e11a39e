//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

//! Text generation for the files of a new project.

use super::identifier::Identifier;
use super::port::{Port, PortList};

/// Number of inputs the generated testbench toggles in its first test case.
const TOGGLED_INPUTS: usize = 2;

/// Renders the files of a project from its name and port lists.
#[derive(Debug, PartialEq)]
pub struct Renderer<'a> {
    name: &'a Identifier,
    inputs: &'a PortList,
    outputs: &'a PortList,
}

impl<'a> Renderer<'a> {
    pub fn new(name: &'a Identifier, inputs: &'a PortList, outputs: &'a PortList) -> Self {
        Self {
            name: name,
            inputs: inputs,
            outputs: outputs,
        }
    }

    fn ports(&self) -> impl Iterator<Item = &'a Port> {
        self.inputs.iter().chain(self.outputs.iter())
    }

    /// The RTL skeleton with one declaration per port.
    pub fn module(&self) -> String {
        let total = self.inputs.len() + self.outputs.len();
        let ports = self
            .ports()
            .enumerate()
            .map(|(i, p)| {
                let sep = if i + 1 < total { "," } else { "" };
                format!(
                    "    {} {}{}\n",
                    p.get_direction().as_keyword(),
                    p.declaration(),
                    sep
                )
            })
            .collect::<String>();

        format!(
            "\
`timescale 1ns/1ps

module {name} (
{ports});

    // ============================================
    // Internal signals
    // ============================================
    // wire/reg declarations go here

    // ============================================
    // Combinational/sequential logic
    // ============================================
    // Implement the design here
    // e.g. assign output1 = input1 & input2;

endmodule
",
            name = self.name,
            ports = ports
        )
    }

    /// A testbench that instantiates the module and monitors every port.
    pub fn testbench(&self) -> String {
        let mut decls = String::new();
        self.inputs
            .iter()
            .for_each(|p| decls.push_str(&format!("    reg {};\n", p.declaration())));
        self.outputs
            .iter()
            .for_each(|p| decls.push_str(&format!("    wire {};\n", p.declaration())));
        decls.push_str("    integer i;  // loop counter\n");

        let connections = self
            .ports()
            .map(|p| format!("        .{0}({0})", p.get_name()))
            .collect::<Vec<String>>()
            .join(",\n");

        let names = self
            .ports()
            .map(|p| p.get_name().as_str())
            .collect::<Vec<&str>>();
        let monitor_values = match names.is_empty() {
            true => String::new(),
            false => format!(", {}", names.join(", ")),
        };

        format!(
            "\
`timescale 1ns/1ps

module {name}_tb;
    // ============================================
    // Signal declarations
    // ============================================
{decls}
    // ============================================
    // Device under test
    // ============================================
    {name} uut (
{connections}
    );

    // ============================================
    // Stimulus
    // ============================================
    initial begin
        // drive every input to a known value
{init}

        // dump waveforms for gtkwave
        $dumpfile(\"{name}.vcd\");
        $dumpvars(0, {name}_tb);

        // print every signal change
        $monitor(\"@%4d ns : {monitor_names}\", $time{monitor_values});

        // ============================================
        // Test cases
        // ============================================
{cases}

        #100 $finish;
    end

endmodule
",
            name = self.name,
            decls = decls,
            connections = connections,
            init = self.initialization(),
            monitor_names = names.join(", "),
            monitor_values = monitor_values,
            cases = self.test_cases(),
        )
    }

    fn initialization(&self) -> String {
        match self.inputs.is_empty() {
            true => String::from("        // add initialization as needed"),
            false => self
                .inputs
                .iter()
                .map(|p| format!("        {} = 1'b0;", p.get_name()))
                .collect::<Vec<String>>()
                .join("\n"),
        }
    }

    fn test_cases(&self) -> String {
        let mut lines = vec![
            String::from("        // Test case 1: basic functionality"),
            String::from("        #10;  // wait 10ns"),
        ];
        for p in self.inputs.iter().take(TOGGLED_INPUTS) {
            lines.push(format!("        {0} = ~{0};  // toggle", p.get_name()));
        }
        lines.push(String::from("        #10;  // observe outputs"));
        lines.push(String::new());
        lines.push(String::from("        // add more test cases..."));
        lines.join("\n")
    }

    /// The Makefile driving Icarus Verilog, VVP and GTKWave.
    pub fn makefile(&self) -> String {
        format!(
            "\
# Verilog simulation Makefile
# Uses Icarus Verilog and VVP

VERILOG_FILES = rtl/{name}.v sim/{name}_tb.v
MODULE_NAME = {name}_tb
OUTPUT_NAME = {name}

.PHONY: all compile simulate view clean help

all: compile simulate view

compile:
\tiverilog -o $(OUTPUT_NAME).vvp $(VERILOG_FILES)
\t@echo \"[OK] Compilation done: $(OUTPUT_NAME).vvp\"

simulate: compile
\tvvp $(OUTPUT_NAME).vvp
\t@echo \"[OK] Simulation done: $(OUTPUT_NAME).vcd\"

view: simulate
\tgtkwave $(OUTPUT_NAME).vcd &
\t@echo \"[OK] Waveform viewer opened\"

clean:
\trm -f $(OUTPUT_NAME).vvp $(OUTPUT_NAME).vcd
\t@echo \"[OK] Clean done\"

help:
\t@echo \"Available targets:\"
\t@echo \"  make          - compile, simulate and view (full flow)\"
\t@echo \"  make compile  - compile only\"
\t@echo \"  make simulate - compile and simulate\"
\t@echo \"  make view     - view the waveform\"
\t@echo \"  make clean    - remove generated files\"
",
            name = self.name
        )
    }

    /// Project documentation stamped with `timestamp`.
    pub fn readme(&self, timestamp: &str) -> String {
        format!(
            "\
# {name}

## Layout

```
{name}/
├── rtl/
│   └── {name}.v       # RTL module
├── sim/
│   └── {name}_tb.v    # testbench
├── Makefile
└── README.md
```

## Interface

### Inputs ({n_in})
{inputs}

### Outputs ({n_out})
{outputs}

## Quick start

1. Implement the logic in `rtl/{name}.v`.
2. Add stimulus to the test cases in `sim/{name}_tb.v`.
3. Run the flow:

```bash
cd {name}
make            # compile, simulate and open the waveform
make compile    # compile only
make simulate   # compile and simulate
make view       # open {name}.vcd in gtkwave
make clean      # remove generated files
```

## Tools

- Icarus Verilog (iverilog)
- VVP
- GTKWave

---
Generated: {timestamp}
",
            name = self.name,
            n_in = self.inputs.len(),
            inputs = Self::bullet_list(self.inputs),
            n_out = self.outputs.len(),
            outputs = Self::bullet_list(self.outputs),
            timestamp = timestamp,
        )
    }

    fn bullet_list(ports: &PortList) -> String {
        match ports.is_empty() {
            true => String::from("- None"),
            false => ports
                .iter()
                .map(|p| format!("- `{}`", p.declaration()))
                .collect::<Vec<String>>()
                .join("\n"),
        }
    }
}
