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

use colored::ColoredString;
use colored::Colorize;
use std::io;
use std::io::{BufRead, Error, Write};

/// Conditionally operates on `status` to return a string representation.
pub fn report_eval(status: bool) -> ColoredString {
    match status {
        true => ColoredString::from("ok").green(),
        false => ColoredString::from("failed").red(),
    }
}

/// Outputs the text `s` with a `[y/N]` option and waits for an answer.
///
/// Anything other than an explicit yes is treated as no.
pub fn confirm(s: &str) -> Result<bool, Error> {
    confirm_from(s, &mut io::stdin().lock())
}

/// Like [confirm], but reads the answer from `input`.
pub fn confirm_from(s: &str, input: &mut impl BufRead) -> Result<bool, Error> {
    print!("{}? [y/N] ", s);
    io::stdout().flush()?;
    check_for_response(input)
}

/// Reads a single line. "y"/"yes" map to `true`; an empty line, end of input,
/// or any other answer maps to `false`.
///
/// Also supports checking windows-style line endings `\r\n`.
fn check_for_response(input: &mut impl BufRead) -> Result<bool, Error> {
    let mut buffer: String = String::new();
    input.read_line(&mut buffer)?;
    Ok(match buffer.trim().to_lowercase().as_ref() {
        "y" | "yes" => true,
        _ => false,
    })
}
