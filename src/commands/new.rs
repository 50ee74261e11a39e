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

use crate::commands::helps::new;
use crate::core::context::Context;
use crate::core::identifier::Identifier;
use crate::core::project::Project;
use crate::core::sigspec::{Mode, SignalSpec};
use crate::error::{Error, Hint, LastError};
use crate::util::prompt;
use std::io::{self, BufRead};
use std::path::Path;
use std::str::FromStr;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

/// Signals used when none are given: no inputs and no outputs.
const EMPTY_SIGNALS: &str = "/";

#[derive(Debug, PartialEq)]
pub struct New {
    name: String,
    signals: Option<String>,
    strict: bool,
    force: bool,
}

impl Subcommand<Context> for New {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(new::HELP))?;
        Ok(Self {
            strict: cli.check(Arg::flag("strict"))?,
            force: cli.check(Arg::flag("force"))?,
            name: cli.require(Arg::positional("name"))?,
            signals: cli.get(Arg::positional("signals"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        // validate everything before touching the file system
        let name = Self::validate_name(&self.name)?;
        let spec = Self::parse_signals(
            self.signals.as_deref().unwrap_or(EMPTY_SIGNALS),
            c.parse_mode(self.strict),
        )?;
        if spec.get_dropped().is_empty() == false {
            log::info!("skipped {} malformed signal(s)", spec.get_dropped().len());
        }
        let project = Project::new(name, spec);
        Self::create(c.get_workspace(), &project, self.force || c.is_forced())
    }
}

impl New {
    /// Verifies `name` can be used as both a directory and a module name.
    pub fn validate_name(name: &str) -> Result<Identifier, Error> {
        Identifier::from_str(name).map_err(|e| {
            Error::InvalidProjectName(
                name.to_string(),
                LastError(e.to_string()),
                Hint::IdentifierRules,
            )
        })
    }

    pub fn parse_signals(signals: &str, mode: Mode) -> Result<SignalSpec, Error> {
        SignalSpec::parse(signals, mode)
            .map_err(|e| Error::SignalSpecRejected(LastError(e.to_string()), Hint::LenientParse))
    }

    /// Writes `project` under `root`, asking before replacing an existing
    /// directory unless `force` is set.
    ///
    /// Declining the overwrite is not an error.
    pub fn create(root: &Path, project: &Project, force: bool) -> proc::Result {
        Self::create_from(&mut io::stdin().lock(), root, project, force)
    }

    /// Like [New::create], but reads the overwrite answer from `input`.
    fn create_from(
        input: &mut impl BufRead,
        root: &Path,
        project: &Project,
        force: bool,
    ) -> proc::Result {
        let dest = root.join(project.get_name());
        if dest.exists() == true && force == false {
            let question = format!("project {:?} already exists, overwrite it", project.get_name().as_str());
            if prompt::confirm_from(&question, input)? == false {
                println!("info: cancelled");
                return Ok(());
            }
        }

        let dest = match project.generate(root) {
            Ok(p) => p,
            Err(e) => return Err(Error::FailedToCreateProject(LastError(e.to_string())))?,
        };

        println!(
            "info: created project {} ({} inputs, {} outputs) at {}",
            project.get_name(),
            project.get_inputs().len(),
            project.get_outputs().len(),
            dest.display()
        );
        println!("\nnext steps:");
        println!("  1. cd {}", project.get_name());
        println!("  2. implement the design in {}", project.rtl_path().display());
        println!("  3. add stimulus to {}", project.bench_path().display());
        println!("  4. run 'make' to simulate");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn invalid_name_rejected() {
        let err = New::validate_name("1adder").unwrap_err();
        assert!(matches!(err, Error::InvalidProjectName(ref n, _, Hint::IdentifierRules) if n == "1adder"));
        assert!(New::validate_name("my-proj").is_err());
        assert!(New::validate_name("").is_err());
        assert_eq!(New::validate_name("adder").unwrap().as_str(), "adder");
    }

    #[test]
    fn strict_signals_surface_diagnostics() {
        let err = New::parse_signals("a, 1b / y", Mode::Strict).unwrap_err();
        assert!(err.to_string().contains("\"1b\" at position 3"));
        assert!(New::parse_signals("a, 1b / y", Mode::Lenient).is_ok());
    }

    #[test]
    fn create_with_force_replaces_directory() {
        let root = tempfile::tempdir().unwrap();
        let existing = root.path().join("blink");
        std::fs::create_dir(&existing).unwrap();
        std::fs::write(existing.join("keep.txt"), "old").unwrap();

        let project = Project::new(
            New::validate_name("blink").unwrap(),
            New::parse_signals("clk / led", Mode::Lenient).unwrap(),
        );
        New::create(root.path(), &project, true).unwrap();
        assert_eq!(existing.join("keep.txt").exists(), false);
        assert!(existing.join("rtl/blink.v").is_file());
    }

    #[test]
    fn declined_overwrite_keeps_existing_project() {
        let root = tempfile::tempdir().unwrap();
        let existing = root.path().join("blink");
        std::fs::create_dir(&existing).unwrap();
        std::fs::write(existing.join("keep.txt"), "old").unwrap();

        let project = Project::new(
            New::validate_name("blink").unwrap(),
            New::parse_signals("clk / led", Mode::Lenient).unwrap(),
        );
        assert!(New::create_from(&mut "n\n".as_bytes(), root.path(), &project, false).is_ok());
        assert_eq!(std::fs::read_to_string(existing.join("keep.txt")).unwrap(), "old");
        assert_eq!(existing.join("rtl").exists(), false);
        let entries: Vec<_> = std::fs::read_dir(root.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("blink")]);
    }

    #[test]
    fn accepted_overwrite_replaces_project() {
        let root = tempfile::tempdir().unwrap();
        let existing = root.path().join("blink");
        std::fs::create_dir(&existing).unwrap();
        std::fs::write(existing.join("keep.txt"), "old").unwrap();

        let project = Project::new(
            New::validate_name("blink").unwrap(),
            New::parse_signals("clk / led", Mode::Lenient).unwrap(),
        );
        New::create_from(&mut "y\n".as_bytes(), root.path(), &project, false).unwrap();
        assert_eq!(existing.join("keep.txt").exists(), false);
        assert!(existing.join("sim/blink_tb.v").is_file());
    }

    #[test]
    fn invalid_name_fails_first() {
        let new = New {
            name: String::from("9lives"),
            signals: None,
            strict: false,
            force: true,
        };
        let c = Context::new();
        // validation fails before the workspace is consulted
        assert!(new.execute(&c).is_err());
    }
}
