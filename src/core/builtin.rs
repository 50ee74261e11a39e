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

//! Ready-made circuits that can be generated as complete projects.

use super::identifier::Identifier;
use super::project::Project;
use super::sigspec::{Mode, SignalSpec};
use crate::util::anyerror::{AnyError, Fault};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Builtin {
    Mux2to1,
    Demux1to2,
    Counter,
    ShiftRegister,
    Fsm,
}

impl Builtin {
    pub const ALL: [Builtin; 5] = [
        Self::Mux2to1,
        Self::Demux1to2,
        Self::Counter,
        Self::ShiftRegister,
        Self::Fsm,
    ];

    /// The module (and project) name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mux2to1 => "mux2to1",
            Self::Demux1to2 => "demux1to2",
            Self::Counter => "counter",
            Self::ShiftRegister => "shift_register",
            Self::Fsm => "fsm",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Self::Mux2to1 => "2-to-1 multiplexer",
            Self::Demux1to2 => "1-to-2 demultiplexer",
            Self::Counter => "4-bit counter with enable",
            Self::ShiftRegister => "4-bit serial-in parallel-out shift register",
            Self::Fsm => "traffic light state machine",
        }
    }

    /// Signal specification describing the circuit's ports.
    pub fn signals(&self) -> &'static str {
        match self {
            Self::Mux2to1 => "i0, i1, sel / y",
            Self::Demux1to2 => "i, sel / o0, o1",
            Self::Counter => "clk, rst, enable / [3:0] count",
            Self::ShiftRegister => "clk, rst, shift_in / [3:0] data_out",
            Self::Fsm => "clk, rst / [1:0] light",
        }
    }

    fn rtl(&self) -> &'static str {
        match self {
            Self::Mux2to1 => MUX2TO1_RTL,
            Self::Demux1to2 => DEMUX1TO2_RTL,
            Self::Counter => COUNTER_RTL,
            Self::ShiftRegister => SHIFT_REGISTER_RTL,
            Self::Fsm => FSM_RTL,
        }
    }

    fn bench(&self) -> &'static str {
        match self {
            Self::Mux2to1 => MUX2TO1_TB,
            Self::Demux1to2 => DEMUX1TO2_TB,
            Self::Counter => COUNTER_TB,
            Self::ShiftRegister => SHIFT_REGISTER_TB,
            Self::Fsm => FSM_TB,
        }
    }

    /// Assembles the project for this circuit.
    pub fn into_project(&self) -> Result<Project, Fault> {
        let name = Identifier::from_str(self.as_str())?;
        let spec = SignalSpec::parse(self.signals(), Mode::Strict)?;
        Ok(Project::new(name, spec).sources(self.rtl(), self.bench()))
    }

    /// Formats every available template on its own line.
    pub fn list_all() -> String {
        Self::ALL.iter().fold(String::new(), |mut acc, b| {
            acc.push_str(&format!("{:<16}{}\n", b.as_str(), b.summary()));
            acc
        })
    }
}

impl FromStr for Builtin {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| AnyError(format!("unknown template {:?}", s)))
    }
}

impl std::fmt::Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const MUX2TO1_RTL: &str = r#"`timescale 1ns/1ps

module mux2to1 (
    input i0,
    input i1,
    input sel,
    output y
);
    // y = i0 when sel is 0, y = i1 when sel is 1
    assign y = sel ? i1 : i0;

endmodule
"#;

const MUX2TO1_TB: &str = r#"`timescale 1ns/1ps

module mux2to1_tb;
    reg i0, i1, sel;
    wire y;

    mux2to1 uut (.i0(i0), .i1(i1), .sel(sel), .y(y));

    initial begin
        $dumpfile("mux2to1.vcd");
        $dumpvars(0, mux2to1_tb);
        $monitor("@%t: i0=%b i1=%b sel=%b => y=%b", $time, i0, i1, sel, y);

        // all 8 input combinations
        #10 i0=0; i1=0; sel=0;
        #10 i0=0; i1=0; sel=1;
        #10 i0=0; i1=1; sel=0;
        #10 i0=0; i1=1; sel=1;
        #10 i0=1; i1=0; sel=0;
        #10 i0=1; i1=0; sel=1;
        #10 i0=1; i1=1; sel=0;
        #10 i0=1; i1=1; sel=1;

        #20 $finish;
    end
endmodule
"#;

const DEMUX1TO2_RTL: &str = r#"`timescale 1ns/1ps

module demux1to2 (
    input i,
    input sel,
    output o0,
    output o1
);
    // route i to o0 when sel is 0, to o1 when sel is 1
    assign o0 = sel ? 1'b0 : i;
    assign o1 = sel ? i : 1'b0;

endmodule
"#;

const DEMUX1TO2_TB: &str = r#"`timescale 1ns/1ps

module demux1to2_tb;
    reg i, sel;
    wire o0, o1;

    demux1to2 uut (.i(i), .sel(sel), .o0(o0), .o1(o1));

    initial begin
        $dumpfile("demux1to2.vcd");
        $dumpvars(0, demux1to2_tb);
        $monitor("@%t: i=%b sel=%b => o0=%b o1=%b", $time, i, sel, o0, o1);

        // all 4 input combinations
        #10 i=0; sel=0;
        #10 i=1; sel=0;
        #10 i=0; sel=1;
        #10 i=1; sel=1;

        #20 $finish;
    end
endmodule
"#;

const COUNTER_RTL: &str = r#"`timescale 1ns/1ps

module counter (
    input clk,
    input rst,
    input enable,
    output [3:0] count
);
    // counts while enable is high, synchronous reset
    reg [3:0] count_reg;

    always @(posedge clk) begin
        if (rst)
            count_reg <= 4'b0000;
        else if (enable)
            count_reg <= count_reg + 1;
    end

    assign count = count_reg;

endmodule
"#;

const COUNTER_TB: &str = r#"`timescale 1ns/1ps

module counter_tb;
    reg clk, rst, enable;
    wire [3:0] count;
    integer i;

    counter uut (.clk(clk), .rst(rst), .enable(enable), .count(count));

    always #5 clk = ~clk;

    initial begin
        clk = 0;
        $dumpfile("counter.vcd");
        $dumpvars(0, counter_tb);
        $monitor("@%t: count=%4b rst=%b enable=%b", $time, count, rst, enable);

        // test 1: reset
        #10 rst = 1; enable = 0;
        #20 rst = 0; enable = 0;
        #10 $display("test 1: reset done");

        // test 2: count from 0 to 15
        #10 enable = 1;
        for (i = 0; i < 16; i = i + 1) begin
            #10;
        end
        #10 $display("test 2: counting done");

        // test 3: hold
        #10 enable = 0;
        #20 $display("test 3: counting disabled");

        // test 4: reset again
        #10 rst = 1;
        #10 rst = 0;
        #10 $display("test 4: second reset done");

        #20 $finish;
    end
endmodule
"#;

const SHIFT_REGISTER_RTL: &str = r#"`timescale 1ns/1ps

module shift_register (
    input clk,
    input rst,
    input shift_in,
    output [3:0] data_out
);
    // serial in, parallel out
    reg [3:0] sr;

    always @(posedge clk) begin
        if (rst)
            sr <= 4'b0000;
        else
            sr <= {sr[2:0], shift_in};
    end

    assign data_out = sr;

endmodule
"#;

const SHIFT_REGISTER_TB: &str = r#"`timescale 1ns/1ps

module shift_register_tb;
    reg clk, rst, shift_in;
    wire [3:0] data_out;

    shift_register uut (.clk(clk), .rst(rst), .shift_in(shift_in), .data_out(data_out));

    always #5 clk = ~clk;

    initial begin
        clk = 0;
        $dumpfile("shift_register.vcd");
        $dumpvars(0, shift_register_tb);
        $monitor("@%t: data_out=%4b shift_in=%b", $time, data_out, shift_in);

        // test 1: reset
        #10 rst = 1; shift_in = 0;
        #20 rst = 0;
        #10 $display("test 1: reset done");

        // test 2: shift in 1010
        #10 shift_in = 1;
        #10 shift_in = 0;
        #10 shift_in = 1;
        #10 shift_in = 0;
        #10 $display("test 2: shifted in 1010");

        // test 3: reset then shift in 1111
        #10 rst = 1;
        #10 rst = 0;
        #10 shift_in = 1;
        #40;
        #10 $display("test 3: shifted in 1111");

        #20 $finish;
    end
endmodule
"#;

const FSM_RTL: &str = r#"`timescale 1ns/1ps

module fsm (
    input clk,
    input rst,
    output [1:0] light
);
    // RED -> GREEN -> YELLOW -> RED
    localparam RED = 2'b00, GREEN = 2'b01, YELLOW = 2'b10;

    reg [1:0] current_state, next_state;

    always @(*) begin
        case (current_state)
            RED:     next_state = GREEN;
            GREEN:   next_state = YELLOW;
            YELLOW:  next_state = RED;
            default: next_state = RED;
        endcase
    end

    always @(posedge clk) begin
        if (rst)
            current_state <= RED;
        else
            current_state <= next_state;
    end

    assign light = current_state;

endmodule
"#;

const FSM_TB: &str = r#"`timescale 1ns/1ps

module fsm_tb;
    reg clk, rst;
    wire [1:0] light;
    integer i;

    fsm uut (.clk(clk), .rst(rst), .light(light));

    always #5 clk = ~clk;

    initial begin
        clk = 0;
        $dumpfile("fsm.vcd");
        $dumpvars(0, fsm_tb);
        $monitor("@%t: light=%b (%s)", $time, light,
                 light == 2'b00 ? "RED" : light == 2'b01 ? "GREEN" : "YELLOW");

        #10 rst = 1;
        #20 rst = 0;
        #10 $display("cycling: RED -> GREEN -> YELLOW -> RED");

        for (i = 0; i < 6; i = i + 1) begin
            #10;
        end

        #10 $finish;
    end
endmodule
"#;
