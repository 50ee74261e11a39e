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

use crate::util::filesystem;
use std::error::Error;
use std::fmt::Display;
use std::path::Path;

/// An error that is only ever displayed to the user.
#[derive(Debug, PartialEq)]
pub struct AnyError(pub String);

impl AnyError {
    /// Prefixes `msg` with the location it concerns.
    pub fn at(path: &Path, msg: impl Display) -> Self {
        AnyError(format!(
            "{}: {}",
            filesystem::into_std_str(path.to_path_buf()),
            msg
        ))
    }
}

impl Error for AnyError {}

impl Display for AnyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub type Fault = Box<dyn Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn located_message() {
        let e = AnyError::at(Path::new("work/vproj.toml"), "unknown field `colour`");
        assert_eq!(e.to_string(), "work/vproj.toml: unknown field `colour`");
    }
}
