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

use crate::commands::helps::vproj;
use crate::core::config::CONFIG_FILE;
use crate::core::context::Context;
use crate::core::target::Step;
use crate::util::anyerror::AnyError;
use crate::util::environment;
use std::str::FromStr;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Help, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, PartialEq)]
pub struct Vproj {
    version: bool,
    force: bool,
    command: Option<VprojSubcommand>,
}

impl Command for Vproj {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(vproj::HELP))?;
        let version = cli.check(Arg::flag("version"))?;
        let force = cli.check(Arg::flag("force"))?;
        // set the coloring mode before any subcommand can print
        match cli
            .get(Arg::option("color").value("when"))?
            .unwrap_or(ColorMode::Auto)
        {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => (),
        }
        Ok(Vproj {
            version: version,
            force: force,
            command: cli.nest(Arg::subcommand("command"))?,
        })
    }

    fn execute(self) -> proc::Result {
        // prioritize version information
        if self.version == true {
            println!("vproj {}", VERSION);
            Ok(())
        // run the specified command
        } else if let Some(c) = self.command {
            match c {
                // help pages do not depend on any settings
                VprojSubcommand::Help(h) => h.execute(&()),
                c => {
                    let context = Context::new()
                        .home(environment::VPROJ_HOME)?
                        .workspace(environment::VPROJ_WORKSPACE)?
                        .settings(CONFIG_FILE)?
                        .retain_options(self.force);
                    log::debug!(
                        "home: {:?}, workspace: {}",
                        context.get_home_path(),
                        context.get_workspace().display()
                    );
                    c.execute(&context)
                }
            }
        // if no command is given then print default help
        } else {
            Ok(println!("{}", vproj::HELP))
        }
    }
}

use crate::commands::build::Build;
use crate::commands::help::Help as HelpCommand;
use crate::commands::list::List;
use crate::commands::new::New;
use crate::commands::report::Report;
use crate::commands::show::Show;
use crate::commands::template::Template;

#[derive(Debug, PartialEq)]
enum VprojSubcommand {
    Help(HelpCommand),
    New(New),
    Template(Template),
    List(List),
    Show(Show),
    Build(Build),
    Report(Report),
}

impl Subcommand<Context> for VprojSubcommand {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        match cli
            .select(&[
                "help", "new", "template", "list", "show", "compile", "simulate", "clean",
                "report",
            ])?
            .as_ref()
        {
            "help" => Ok(Self::Help(HelpCommand::interpret(cli)?)),
            "new" => Ok(Self::New(New::interpret(cli)?)),
            "template" => Ok(Self::Template(Template::interpret(cli)?)),
            "list" => Ok(Self::List(List::interpret(cli)?)),
            "show" => Ok(Self::Show(Show::interpret(cli)?)),
            "compile" => Ok(Self::Build(Build::interpret(cli, Step::Compile)?)),
            "simulate" => Ok(Self::Build(Build::interpret(cli, Step::Simulate)?)),
            "clean" => Ok(Self::Build(Build::interpret(cli, Step::Clean)?)),
            "report" => Ok(Self::Report(Report::interpret(cli)?)),
            _ => panic!("an unimplemented command was passed through!"),
        }
    }

    fn execute(self, context: &Context) -> proc::Result {
        match self {
            Self::Help(c) => c.execute(&()),
            Self::New(c) => c.execute(context),
            Self::Template(c) => c.execute(context),
            Self::List(c) => c.execute(context),
            Self::Show(c) => c.execute(context),
            Self::Build(c) => c.execute(context),
            Self::Report(c) => c.execute(context),
        }
    }
}

/// When to emit terminal colors.
#[derive(Debug, PartialEq, Clone, Copy)]
enum ColorMode {
    Always,
    Never,
    Auto,
}

impl FromStr for ColorMode {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            "auto" => Ok(Self::Auto),
            _ => Err(AnyError(format!(
                "color mode must be one of 'auto', 'always', or 'never' but got '{}'",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn color_modes() {
        assert_eq!(ColorMode::from_str("always").unwrap(), ColorMode::Always);
        assert_eq!(ColorMode::from_str("never").unwrap(), ColorMode::Never);
        assert_eq!(ColorMode::from_str("auto").unwrap(), ColorMode::Auto);
        assert!(ColorMode::from_str("sometimes").is_err());
    }

    #[test]
    fn help_lists_every_command() {
        for c in [
            "new", "template", "list", "show", "compile", "simulate", "clean", "report", "help",
        ] {
            assert!(vproj::HELP.contains(&format!("    {} ", c)));
        }
    }
}
