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

//! Parsing of compact signal specifications.
//!
//! A specification lists a module's inputs and outputs separated by a `/`:
//!
//! ```text
//! signed [7:0] data, clk / ready
//! ```
//!
//! Each side is a comma-separated list of tokens, and each token is zero or
//! more qualifiers (`signed`, `unsigned`, `[m:l]`) followed by a name.

use super::identifier::{Identifier, IdentifierError};
use super::port::{Direction, Port, PortList, Qualifier, QualifierError};
use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

const SIDE_DELIMITER: char = '/';
const TOKEN_DELIMITER: char = ',';

/// Controls how malformed tokens are handled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Mode {
    /// Malformed tokens are dropped and parsing continues.
    #[default]
    Lenient,
    /// Any malformed token or duplicate name fails the entire parse.
    Strict,
}

#[derive(Debug, PartialEq)]
pub struct SignalSpec {
    inputs: PortList,
    outputs: PortList,
    dropped: Vec<Diagnostic>,
}

impl SignalSpec {
    /// Parses `spec` into its input and output port lists.
    ///
    /// Only the first `/` separates the two sides. Anything after it belongs
    /// to the output side as written.
    pub fn parse(spec: &str, mode: Mode) -> Result<Self, SpecError> {
        let mut diagnostics = Vec::new();
        let (inputs, outputs) = match spec.split_once(SIDE_DELIMITER) {
            Some((lhs, rhs)) => (
                Self::parse_side(lhs, 0, Direction::Input, &mut diagnostics),
                Self::parse_side(rhs, lhs.len() + 1, Direction::Output, &mut diagnostics),
            ),
            None => (
                Self::parse_side(spec, 0, Direction::Input, &mut diagnostics),
                Vec::new(),
            ),
        };

        let duplicates = Self::find_duplicates(&inputs, &outputs);
        let inputs: PortList = inputs.into_iter().map(|(_, p)| p).collect();
        let outputs: PortList = outputs.into_iter().map(|(_, p)| p).collect();

        match mode {
            Mode::Strict => {
                diagnostics.extend(duplicates);
                if diagnostics.is_empty() == false {
                    diagnostics.sort_by_key(|d| d.position);
                    return Err(SpecError(diagnostics));
                }
            }
            Mode::Lenient => {
                for d in &diagnostics {
                    log::debug!("dropping signal token: {}", d);
                }
                for d in &duplicates {
                    log::warn!("{}", d);
                }
            }
        }

        Ok(Self {
            inputs: inputs,
            outputs: outputs,
            dropped: diagnostics,
        })
    }

    /// Splits one side of the specification on commas and extracts every
    /// well-formed port along with the byte position of its token. `offset`
    /// is the byte position of `side` within the original string.
    fn parse_side(
        side: &str,
        offset: usize,
        direction: Direction,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<(usize, Port)> {
        let mut ports = Vec::new();
        let mut position = offset;
        for raw in side.split(TOKEN_DELIMITER) {
            let token = raw.trim();
            if token.is_empty() == false {
                let start = position + (raw.len() - raw.trim_start().len());
                match Self::extract_port(token, direction) {
                    Ok(p) => ports.push((start, p)),
                    Err(reason) => diagnostics.push(Diagnostic {
                        position: start,
                        token: token.to_string(),
                        direction: direction,
                        reason: reason,
                    }),
                }
            }
            position += raw.len() + 1;
        }
        ports
    }

    /// Converts a single token into a port.
    ///
    /// The last whitespace-separated word is the name and every word before it
    /// must be a qualifier.
    fn extract_port(token: &str, direction: Direction) -> Result<Port, Reason> {
        let mut words: Vec<&str> = token.split_whitespace().collect();
        let name = match words.pop() {
            Some(w) => Identifier::from_str(w).map_err(Reason::InvalidName)?,
            None => return Err(Reason::Empty),
        };
        let qualifiers = words
            .into_iter()
            .map(|w| Qualifier::from_str(w))
            .collect::<Result<Vec<Qualifier>, QualifierError>>()
            .map_err(Reason::InvalidQualifier)?;
        Ok(Port::new(direction, name).qualifiers(qualifiers))
    }

    /// Reports every name declared more than once across both sides.
    fn find_duplicates(inputs: &[(usize, Port)], outputs: &[(usize, Port)]) -> Vec<Diagnostic> {
        let mut seen = HashSet::new();
        inputs
            .iter()
            .chain(outputs.iter())
            .filter(|(_, p)| seen.insert(p.get_name()) == false)
            .map(|(start, p)| Diagnostic {
                position: *start,
                token: p.declaration(),
                direction: p.get_direction(),
                reason: Reason::DuplicateName(p.get_name().clone()),
            })
            .collect()
    }

    pub fn get_inputs(&self) -> &PortList {
        &self.inputs
    }

    pub fn get_outputs(&self) -> &PortList {
        &self.outputs
    }

    /// Tokens that were skipped during a lenient parse.
    pub fn get_dropped(&self) -> &Vec<Diagnostic> {
        &self.dropped
    }

    pub fn into_lists(self) -> (PortList, PortList) {
        (self.inputs, self.outputs)
    }
}

impl FromStr for SignalSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Mode::Lenient)
    }
}

/// Why a token was not accepted.
#[derive(Debug, PartialEq)]
pub enum Reason {
    Empty,
    InvalidName(IdentifierError),
    InvalidQualifier(QualifierError),
    DuplicateName(Identifier),
}

impl Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "token is empty"),
            Self::InvalidName(e) => write!(f, "{}", e),
            Self::InvalidQualifier(e) => write!(f, "{}", e),
            Self::DuplicateName(n) => write!(f, "signal {:?} is declared more than once", n.as_str()),
        }
    }
}

/// A problem found with one token of a signal specification.
#[derive(Debug, PartialEq)]
pub struct Diagnostic {
    /// Byte offset of the token within the original specification.
    position: usize,
    token: String,
    direction: Direction,
    reason: Reason,
}

impl Diagnostic {
    pub fn get_position(&self) -> usize {
        self.position
    }

    pub fn get_token(&self) -> &str {
        &self.token
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn get_reason(&self) -> &Reason {
        &self.reason
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:?} at position {}: {}",
            self.direction, self.token, self.position, self.reason
        )
    }
}

#[derive(Debug, PartialEq, Error)]
pub struct SpecError(pub Vec<Diagnostic>);

impl Display for SpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid signal specification")?;
        for d in &self.0 {
            write!(f, "\n    {}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lenient(s: &str) -> SignalSpec {
        SignalSpec::parse(s, Mode::Lenient).unwrap()
    }

    fn decls(list: &PortList) -> Vec<String> {
        list.iter().map(|p| p.declaration()).collect()
    }

    fn names(list: &PortList) -> Vec<&str> {
        list.iter().map(|p| p.get_name().as_str()).collect()
    }

    #[test]
    fn bare_identifier_input() {
        for n in ["clk", "_x", "a1", "rst_n", "DATA"] {
            let spec = lenient(&format!("{} /", n));
            assert_eq!(spec.get_inputs().len(), 1);
            assert_eq!(spec.get_inputs()[0].get_name().as_str(), n);
            assert_eq!(spec.get_inputs()[0].get_qualifiers().is_empty(), true);
            assert_eq!(spec.get_outputs().is_empty(), true);
        }
    }

    #[test]
    fn sign_qualifiers() {
        for q in ["signed", "unsigned"] {
            for n in ["a", "value", "_tmp9"] {
                let spec = lenient(&format!("{} {} /", q, n));
                let port = &spec.get_inputs()[0];
                assert_eq!(port.declaration(), format!("{} {}", q, n));
                assert_eq!(port.get_name().as_str(), n);
            }
        }
    }

    #[test]
    fn width_and_plain() {
        let spec = lenient("[7:0] data, clk /");
        assert_eq!(decls(spec.get_inputs()), vec!["[7:0] data", "clk"]);
        assert_eq!(names(spec.get_inputs()), vec!["data", "clk"]);
    }

    #[test]
    fn mixed_example() {
        let spec = lenient("signed [7:0] data, clk / ready");
        assert_eq!(decls(spec.get_inputs()), vec!["signed [7:0] data", "clk"]);
        assert_eq!(decls(spec.get_outputs()), vec!["ready"]);
    }

    #[test]
    fn whitespace_separated_words_form_one_token() {
        // without commas "clk rst" is one token: qualifier "clk" is unknown
        let spec = lenient("clk rst / out");
        assert_eq!(spec.get_inputs().len(), 0);
        assert_eq!(names(spec.get_outputs()), vec!["out"]);
        assert_eq!(spec.get_dropped().len(), 1);
    }

    #[test]
    fn canonical_form_reparses_identically() {
        let spec = lenient("  signed    [15:0]   acc ,unsigned  b, [3] c,d /");
        for port in spec.get_inputs() {
            let again = lenient(&format!("{} /", port.declaration()));
            assert_eq!(&again.get_inputs()[0], port);
        }
        assert_eq!(
            decls(spec.get_inputs()),
            vec!["signed [15:0] acc", "unsigned b", "[3] c", "d"]
        );
    }

    #[test]
    fn digit_leading_identifier_dropped() {
        let spec = lenient("1bad /");
        assert_eq!(spec.get_inputs().len(), 0);
        assert_eq!(spec.get_dropped()[0].get_token(), "1bad");
    }

    #[test]
    fn outputs_only() {
        let spec = lenient("/ y");
        assert_eq!(spec.get_inputs().len(), 0);
        assert_eq!(names(spec.get_outputs()), vec!["y"]);
    }

    #[test]
    fn inputs_only() {
        let spec = lenient("sig1, sig2, sig3 /");
        assert_eq!(names(spec.get_inputs()), vec!["sig1", "sig2", "sig3"]);
        assert_eq!(spec.get_outputs().len(), 0);

        let spec = lenient("a, b");
        assert_eq!(names(spec.get_inputs()), vec!["a", "b"]);
        assert_eq!(spec.get_outputs().len(), 0);
    }

    #[test]
    fn empty_tokens_skipped() {
        let spec = lenient("a, , b /");
        assert_eq!(names(spec.get_inputs()), vec!["a", "b"]);
        assert_eq!(spec.get_dropped().is_empty(), true);
    }

    #[test]
    fn empty_spec() {
        let spec = lenient("/");
        assert_eq!(spec.get_inputs().len(), 0);
        assert_eq!(spec.get_outputs().len(), 0);
        let spec = lenient("");
        assert_eq!(spec.get_inputs().len() + spec.get_outputs().len(), 0);
    }

    #[test]
    fn invalid_qualifier_rejects_whole_token() {
        let spec = lenient("wire [7:0] a, [N:0] b, c / reg q, [7:0] d");
        assert_eq!(names(spec.get_inputs()), vec!["c"]);
        assert_eq!(names(spec.get_outputs()), vec!["d"]);
        assert_eq!(spec.get_dropped().len(), 3);
    }

    #[test]
    fn trailing_width_is_not_a_name() {
        let spec = lenient("data [7:0] /");
        assert_eq!(spec.get_inputs().len(), 0);
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint() {
        let spec = lenient("a, b, signed c / d, [1:0] e");
        for p in spec.get_inputs() {
            assert_eq!(p.get_direction(), Direction::Input);
        }
        for p in spec.get_outputs() {
            assert_eq!(p.get_direction(), Direction::Output);
        }
        assert_eq!(spec.get_inputs().len() + spec.get_outputs().len(), 5);
        assert_eq!(names(spec.get_inputs()), vec!["a", "b", "c"]);
        assert_eq!(names(spec.get_outputs()), vec!["d", "e"]);
    }

    #[test]
    fn extra_slashes_stay_on_output_side() {
        let spec = lenient("a / b / c");
        assert_eq!(names(spec.get_inputs()), vec!["a"]);
        // "b / c" is a single token with an unknown qualifier
        assert_eq!(spec.get_outputs().len(), 0);

        let spec = lenient("a / b, / c");
        assert_eq!(names(spec.get_outputs()), vec!["b"]);
        assert_eq!(spec.get_dropped()[0].get_token(), "/ c");
    }

    #[test]
    fn duplicates_kept_when_lenient() {
        let spec = lenient("a, a / a");
        assert_eq!(names(spec.get_inputs()), vec!["a", "a"]);
        assert_eq!(names(spec.get_outputs()), vec!["a"]);
    }

    #[test]
    fn strict_reports_positions() {
        let err = SignalSpec::parse("clk, 1bad, [x] y / ok,  9z", Mode::Strict).unwrap_err();
        let found: Vec<(usize, &str)> = err
            .0
            .iter()
            .map(|d| (d.get_position(), d.get_token()))
            .collect();
        assert_eq!(found, vec![(5, "1bad"), (11, "[x] y"), (24, "9z")]);
        assert_eq!(err.0[2].get_direction(), Direction::Output);
        assert!(matches!(err.0[0].get_reason(), Reason::InvalidName(_)));
        assert!(matches!(err.0[1].get_reason(), Reason::InvalidQualifier(_)));
    }

    #[test]
    fn strict_rejects_duplicates() {
        let err = SignalSpec::parse("clk, data / data", Mode::Strict).unwrap_err();
        assert_eq!(err.0.len(), 1);
        assert_eq!(
            err.0[0].get_reason(),
            &Reason::DuplicateName(Identifier::from_str("data").unwrap())
        );
        assert_eq!(err.0[0].get_direction(), Direction::Output);
        assert_eq!(err.0[0].get_position(), 12);
    }

    #[test]
    fn duplicate_positions_point_at_tokens() {
        // a longer name sharing the prefix must not be mistaken for the duplicate
        let err = SignalSpec::parse("a / a, ab", Mode::Strict).unwrap_err();
        let found: Vec<usize> = err.0.iter().map(|d| d.get_position()).collect();
        assert_eq!(found, vec![4]);

        let err = SignalSpec::parse("a, a, a /", Mode::Strict).unwrap_err();
        let found: Vec<usize> = err.0.iter().map(|d| d.get_position()).collect();
        assert_eq!(found, vec![3, 6]);

        let err = SignalSpec::parse("ab, signed a, a /", Mode::Strict).unwrap_err();
        let found: Vec<(usize, &str)> = err
            .0
            .iter()
            .map(|d| (d.get_position(), d.get_token()))
            .collect();
        assert_eq!(found, vec![(14, "a")]);
    }

    #[test]
    fn strict_accepts_clean_spec() {
        let spec = SignalSpec::parse("signed [7:0] data, clk / ready", Mode::Strict).unwrap();
        assert_eq!(spec.get_inputs().len() + spec.get_outputs().len(), 3);
        assert_eq!(spec.get_dropped().is_empty(), true);
    }

    #[test]
    fn from_str_is_lenient() {
        let spec = SignalSpec::from_str("1bad, ok /").unwrap();
        assert_eq!(names(spec.get_inputs()), vec!["ok"]);
    }
}
