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

use colored::Colorize;
use std::fmt::Display;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid project name {0:?}: {1}{2}")]
    InvalidProjectName(String, LastError, Hint),
    #[error("failed to create project: {0}")]
    FailedToCreateProject(LastError),
    #[error("{0}{1}")]
    SignalSpecRejected(LastError, Hint),
    #[error("no project named {0:?} in {1:?}{2}")]
    ProjectNotFound(String, String, Hint),
    #[error("no template named {0:?}{1}")]
    TemplateNotFound(String, Hint),
    #[error("{1} of {2} projects failed to {0}")]
    BatchIncomplete(String, usize, usize),
    #[error("failed to load configuration: {0}")]
    ConfigNotLoaded(LastError),
    #[error("failed to write report: {0}")]
    ReportNotSaved(LastError),
}

#[derive(Debug, PartialEq)]
pub struct LastError(pub String);

impl Display for LastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Error::lowerize(self.0.to_string()))
    }
}

impl Error {
    pub fn lowerize(s: String) -> String {
        // get the first word
        let first_word = match s.split_whitespace().next() {
            Some(w) => w,
            None => return s,
        };
        // retain punctuation if the first word is all-caps and longer than 1 character
        if first_word.len() > 1
            && first_word
                .chars()
                .find(|c| c.is_ascii_lowercase() == true)
                .is_none()
        {
            s.to_string()
        } else {
            s.char_indices()
                .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
                .collect()
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Hint {
    ProjectsList,
    TemplatesList,
    IdentifierRules,
    LenientParse,
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::ProjectsList => "use `vproj list` to see the projects in the workspace",
            Self::TemplatesList => "use `vproj template --list` to see the available templates",
            Self::IdentifierRules => {
                "names must start with a letter or underscore and contain only letters, digits, and underscores"
            }
            Self::LenientParse => "omit \"--strict\" to skip malformed signals instead",
        };
        write!(
            f,
            "\n\n{}: {}",
            "hint".green(),
            Error::lowerize(message.to_string())
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lowerize_first_letter() {
        assert_eq!(
            Error::lowerize(String::from("No such file")),
            String::from("no such file")
        );
        assert_eq!(
            Error::lowerize(String::from("IO failure")),
            String::from("IO failure")
        );
        assert_eq!(Error::lowerize(String::new()), String::new());
    }

    #[test]
    fn batch_message() {
        assert_eq!(
            Error::BatchIncomplete(String::from("compile"), 2, 5).to_string(),
            "2 of 5 projects failed to compile"
        );
    }
}
