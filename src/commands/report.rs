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

use crate::commands::helps::report;
use crate::core::catalog::Catalog;
use crate::core::context::Context;
use crate::core::report::Report as Summary;
use crate::error::{Error, LastError};
use crate::util::filesystem;
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Report {
    output: Option<PathBuf>,
}

impl Subcommand<Context> for Report {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(report::HELP))?;
        Ok(Report {
            output: cli.get(Arg::option("output").value("file"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let catalog = Catalog::discover(c.get_workspace())?;
        let summary = Summary::new(&catalog)?;
        let dest = self.destination(c);
        if let Err(e) = summary.write(&dest) {
            return Err(Error::ReportNotSaved(LastError(e.to_string())))?;
        }
        println!("{}", summary.to_json()?);
        println!(
            "\ninfo: report saved to {}",
            filesystem::into_std_str(dest)
        );
        Ok(())
    }
}

impl Report {
    /// Relative paths are resolved against the workspace.
    fn destination(&self, c: &Context) -> PathBuf {
        let file = match &self.output {
            Some(p) => p.clone(),
            None => c.get_config().get_report_file(),
        };
        match file.is_absolute() {
            true => file,
            false => c.get_workspace().join(file),
        }
    }
}
