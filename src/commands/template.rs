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

use super::new::New;
use crate::commands::helps::template;
use crate::core::builtin::Builtin;
use crate::core::context::Context;
use crate::error::{Error, Hint, LastError};
use std::str::FromStr;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Template {
    list: bool,
    force: bool,
    name: Option<String>,
}

impl Subcommand<Context> for Template {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(template::HELP))?;
        Ok(Template {
            list: cli.check(Arg::flag("list"))?,
            force: cli.check(Arg::flag("force"))?,
            name: cli.get(Arg::positional("name"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let name = match (&self.name, self.list) {
            (Some(n), false) => n,
            // display the available templates and exit
            _ => {
                print!("{}", Builtin::list_all());
                return Ok(());
            }
        };
        let builtin = Self::find(name)?;
        let project = match builtin.into_project() {
            Ok(p) => p,
            Err(e) => return Err(Error::FailedToCreateProject(LastError(e.to_string())))?,
        };
        New::create(c.get_workspace(), &project, self.force || c.is_forced())
    }
}

impl Template {
    fn find(name: &str) -> Result<Builtin, Error> {
        Builtin::from_str(name)
            .map_err(|_| Error::TemplateNotFound(name.to_string(), Hint::TemplatesList))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unknown_template() {
        assert_eq!(
            Template::find("adder"),
            Err(Error::TemplateNotFound(
                String::from("adder"),
                Hint::TemplatesList
            ))
        );
        assert_eq!(Template::find("shift_register"), Ok(Builtin::ShiftRegister));
    }

    #[test]
    fn generates_builtin_with_force() {
        let root = tempfile::tempdir().unwrap();
        let project = Template::find("counter").unwrap().into_project().unwrap();
        New::create(root.path(), &project, true).unwrap();
        let rtl = std::fs::read_to_string(root.path().join("counter/rtl/counter.v")).unwrap();
        assert!(rtl.contains("count_reg <= count_reg + 1"));
        assert!(root.path().join("counter/sim/counter_tb.v").is_file());
    }
}
