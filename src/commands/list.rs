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

use crate::commands::helps::list;
use crate::core::catalog::Catalog;
use crate::core::context::Context;
use colored::Colorize;

use cliproc::{cli, proc, stage::*};
use cliproc::{Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct List {}

impl Subcommand<Context> for List {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(list::HELP))?;
        Ok(List {})
    }

    fn execute(self, c: &Context) -> proc::Result {
        let catalog = Catalog::discover(c.get_workspace())?;
        if catalog.is_empty() == true {
            println!("info: no projects found in {}", c.get_workspace().display());
            return Ok(());
        }
        let mut rows = Vec::with_capacity(catalog.len());
        for p in catalog.iter() {
            let status = match p.is_complete()? {
                true => "complete".green().to_string(),
                false => "incomplete".yellow().to_string(),
            };
            rows.push(Row {
                name: p.get_name().to_string(),
                rtl: p.rtl_files()?.len(),
                tb: p.bench_files()?.len(),
                status: status,
            });
        }
        print!("{}", Self::fmt_table(&rows));
        println!("\n{} project(s)", catalog.len());
        Ok(())
    }
}

struct Row {
    name: String,
    rtl: usize,
    tb: usize,
    status: String,
}

impl List {
    fn fmt_table(rows: &[Row]) -> String {
        let header = format!(
            "\
{:<24}{:<8}{:<8}{:<12}
{:->24}{4:->8}{4:->8}{4:->12}\n",
            "Project", "RTL", "TB", "Status", " "
        );
        let mut body = String::new();
        for r in rows {
            body.push_str(&format!(
                "{:<24}{:<8}{:<8}{}\n",
                r.name, r.rtl, r.tb, r.status
            ));
        }
        header + &body
    }
}
