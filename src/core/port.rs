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

use super::identifier::Identifier;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

pub type PortList = Vec<Port>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Input,
    Output,
}

impl Direction {
    /// The keyword used when declaring a port in a module header.
    pub fn as_keyword(&self) -> &str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_keyword())
    }
}

/// A bit-width annotation such as `[7:0]` or `[3]`.
///
/// Only the characters `0-9 : , [ ] <space>` may appear between the outer
/// brackets. The text is kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Width(String);

impl FromStr for Width {
    type Err = QualifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 2 || s.starts_with('[') == false || s.ends_with(']') == false {
            return Err(QualifierError::NotBracketed(s.to_string()));
        }
        let inner = &s[1..s.len() - 1];
        match inner
            .chars()
            .find(|c| c.is_ascii_digit() == false && ":,[] ".contains(*c) == false)
        {
            Some(c) => Err(QualifierError::InvalidWidthChar(s.to_string(), c)),
            None => Ok(Self(s.to_string())),
        }
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A type modifier written before a signal's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Qualifier {
    Signed,
    Unsigned,
    Width(Width),
}

impl FromStr for Qualifier {
    type Err = QualifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "signed" => Ok(Self::Signed),
            "unsigned" => Ok(Self::Unsigned),
            _ => match s.starts_with('[') {
                true => Ok(Self::Width(Width::from_str(s)?)),
                false => Err(QualifierError::Unknown(s.to_string())),
            },
        }
    }
}

impl Display for Qualifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Signed => write!(f, "signed"),
            Self::Unsigned => write!(f, "unsigned"),
            Self::Width(w) => write!(f, "{}", w),
        }
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum QualifierError {
    #[error("unknown qualifier {0:?}")]
    Unknown(String),
    #[error("width {0:?} must be enclosed in brackets")]
    NotBracketed(String),
    #[error("width {0:?} contains invalid character {1:?}")]
    InvalidWidthChar(String, char),
}

/// A single signal at a module's boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    direction: Direction,
    qualifiers: Vec<Qualifier>,
    name: Identifier,
}

impl Port {
    pub fn new(direction: Direction, name: Identifier) -> Self {
        Self {
            direction: direction,
            qualifiers: Vec::new(),
            name: name,
        }
    }

    pub fn qualifiers(mut self, q: Vec<Qualifier>) -> Self {
        self.qualifiers = q;
        self
    }

    /// The bare name, used wherever the wire is referenced.
    pub fn get_name(&self) -> &Identifier {
        &self.name
    }

    pub fn get_qualifiers(&self) -> &Vec<Qualifier> {
        &self.qualifiers
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    /// The canonical declaration: qualifiers followed by the name, separated
    /// by single spaces.
    pub fn declaration(&self) -> String {
        self.to_string()
    }
}

impl Display for Port {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for q in &self.qualifiers {
            write!(f, "{} ", q)?;
        }
        write!(f, "{}", self.name)
    }
}
