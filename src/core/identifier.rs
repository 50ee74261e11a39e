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

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A basic Verilog identifier: `[A-Za-z_][A-Za-z0-9_]*`.
///
/// Used for signal names as well as project/module names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// References the inner string.
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    fn validate(s: &str) -> Result<(), IdentifierError> {
        let first = match s.chars().next() {
            Some(c) => c,
            None => return Err(IdentifierError::Empty),
        };
        if first.is_ascii_digit() == true {
            return Err(IdentifierError::DigitFirst(s.to_string()));
        }
        // a bracketed token is a width annotation, never a name
        if s.starts_with('[') && s.ends_with(']') {
            return Err(IdentifierError::LooksLikeWidth(s.to_string()));
        }
        if first.is_ascii_alphabetic() == false && first != '_' {
            return Err(IdentifierError::InvalidFirstChar(s.to_string(), first));
        }
        match s
            .chars()
            .find(|c| c.is_ascii_alphanumeric() == false && c != &'_')
        {
            Some(c) => Err(IdentifierError::InvalidChar(s.to_string(), c)),
            None => Ok(()),
        }
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)?;
        Ok(Self(s.to_string()))
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<std::path::Path> for Identifier {
    fn as_ref(&self) -> &std::path::Path {
        self.0.as_ref()
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum IdentifierError {
    #[error("identifier is empty")]
    Empty,
    #[error("identifier {0:?} cannot begin with a digit")]
    DigitFirst(String),
    #[error("{0:?} is a width annotation, not an identifier")]
    LooksLikeWidth(String),
    #[error("identifier {0:?} must begin with a letter or underscore, found {1:?}")]
    InvalidFirstChar(String, char),
    #[error("identifier {0:?} contains invalid character {1:?}")]
    InvalidChar(String, char),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_identifiers() {
        assert_eq!(Identifier::from_str("clk").unwrap().as_str(), "clk");
        assert_eq!(Identifier::from_str("_rst_n").unwrap().as_str(), "_rst_n");
        assert_eq!(Identifier::from_str("data8").unwrap().as_str(), "data8");
        assert_eq!(Identifier::from_str("A").unwrap().as_str(), "A");
        // keywords are not special-cased
        assert_eq!(Identifier::from_str("signed").unwrap().as_str(), "signed");
    }

    #[test]
    fn invalid_identifiers() {
        assert_eq!(Identifier::from_str(""), Err(IdentifierError::Empty));
        assert_eq!(
            Identifier::from_str("1bad"),
            Err(IdentifierError::DigitFirst(String::from("1bad")))
        );
        assert_eq!(
            Identifier::from_str("[7:0]"),
            Err(IdentifierError::LooksLikeWidth(String::from("[7:0]")))
        );
        assert_eq!(
            Identifier::from_str("$time"),
            Err(IdentifierError::InvalidFirstChar(String::from("$time"), '$'))
        );
        assert_eq!(
            Identifier::from_str("count[3:0]"),
            Err(IdentifierError::InvalidChar(String::from("count[3:0]"), '['))
        );
        assert_eq!(
            Identifier::from_str("my-mod"),
            Err(IdentifierError::InvalidChar(String::from("my-mod"), '-'))
        );
    }

    #[test]
    fn non_ascii_rejected() {
        assert!(Identifier::from_str("données").is_err());
        assert_eq!(
            Identifier::from_str("é"),
            Err(IdentifierError::InvalidFirstChar(String::from("é"), 'é'))
        );
    }
}
