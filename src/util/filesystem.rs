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

use crate::util::anyerror::Fault;
use std::path::{Path, PathBuf};

pub enum Unit {
    KiloBytes,
    Bytes,
}

impl Unit {
    /// Returns the divisor number to convert to the `self` unit.
    fn value(&self) -> usize {
        match self {
            Self::KiloBytes => 1024,
            Self::Bytes => 1,
        }
    }
}

/// Calculates the size of the given path.
pub fn compute_size<P>(path: &P, unit: Unit) -> Result<f32, Fault>
where
    P: AsRef<Path>,
{
    Ok(fs_extra::dir::get_size(&path)? as f32 / unit.value() as f32)
}

/// Converts the path into a string with forward slashes.
pub fn into_std_str(path: PathBuf) -> String {
    path.display().to_string().replace('\\', "/")
}

/// Counts the lines of text in a file. Invalid UTF-8 sequences are replaced
/// rather than treated as errors.
pub fn count_lines(path: &Path) -> Result<usize, Fault> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).lines().count())
}

/// Sums the line counts of every file in `paths`.
pub fn count_lines_all(paths: &[PathBuf]) -> Result<usize, Fault> {
    paths
        .iter()
        .try_fold(0, |acc, p| Ok(acc + count_lines(p)?))
}
