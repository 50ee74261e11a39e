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

use crate::commands::helps::build;
use crate::core::catalog::Catalog;
use crate::core::context::Context;
use crate::core::target::{BuildTool, Outcome, Step};
use crate::error::Error;
use crate::util::prompt;
use std::time::Duration;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help};

/// Runs one build step across every project in the workspace.
#[derive(Debug, PartialEq)]
pub struct Build {
    step: Step,
    timeout: Option<u64>,
    verbose: bool,
}

impl Build {
    pub fn interpret<'c>(cli: &'c mut Cli<Memory>, step: Step) -> cli::Result<Self> {
        cli.help(Help::with(match step {
            Step::Compile => build::COMPILE,
            Step::Simulate => build::SIMULATE,
            Step::Clean => build::CLEAN,
        }))?;
        Ok(Build {
            step: step,
            verbose: cli.check(Arg::flag("verbose"))?,
            timeout: cli.get(Arg::option("timeout").value("secs"))?,
        })
    }

    pub fn execute(self, c: &Context) -> proc::Result {
        let catalog = Catalog::discover(c.get_workspace())?;
        if catalog.is_empty() == true {
            println!("info: no projects found in {}", c.get_workspace().display());
            return Ok(());
        }
        let tool = BuildTool::from_config(c.get_config());
        let timeout = match self.timeout {
            Some(s) => Duration::from_secs(s),
            None => c.get_config().get_timeout(&self.step),
        };
        if self.verbose == true {
            println!(
                "info: running '{} {}' with a limit of {}s",
                tool.get_command(),
                self.step,
                timeout.as_secs()
            );
        }

        let tally = Self::run(&catalog, &tool, &self.step, timeout, self.verbose);
        println!("\n{} succeeded, {} failed", tally.passed, tally.failed);
        match tally.failed {
            0 => Ok(()),
            n => Err(Error::BatchIncomplete(
                self.step.to_string(),
                n,
                tally.passed + tally.failed,
            ))?,
        }
    }

    /// Runs the step in each project in order. A failing project does not
    /// stop the others.
    fn run(catalog: &Catalog, tool: &BuildTool, step: &Step, timeout: Duration, verbose: bool) -> Tally {
        let mut tally = Tally::default();
        for p in catalog.iter() {
            let outcome = tool.execute(p.get_path(), step, timeout);
            println!(
                "info: {} {} ... {}",
                step,
                p.get_name(),
                prompt::report_eval(outcome.is_success())
            );
            Self::display_outcome(&outcome, verbose);
            match outcome.is_success() {
                true => tally.passed += 1,
                false => {
                    log::info!("{} failed in {}: {}", step, p.get_name(), outcome);
                    tally.failed += 1
                }
            }
        }
        tally
    }

    fn display_outcome(outcome: &Outcome, verbose: bool) {
        match outcome {
            Outcome::Success { stdout, stderr } => {
                if verbose == true {
                    indent(stdout);
                    indent(stderr);
                }
            }
            Outcome::Failed { stderr, .. } => {
                println!("    {}", outcome);
                indent(stderr);
            }
            _ => println!("    {}", outcome),
        }
    }
}

fn indent(text: &str) {
    for line in text.lines() {
        println!("    | {}", line);
    }
}

#[derive(Debug, Default, PartialEq)]
struct Tally {
    passed: usize,
    failed: usize,
}

#[cfg(test)]
#[cfg(unix)]
mod test {
    use super::*;
    use crate::core::identifier::Identifier;
    use crate::core::project::Project;
    use crate::core::sigspec::SignalSpec;
    use std::str::FromStr;

    fn workspace(names: &[&str]) -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        for n in names {
            Project::new(
                Identifier::from_str(n).unwrap(),
                SignalSpec::from_str("a / y").unwrap(),
            )
            .generate(root.path())
            .unwrap();
        }
        root
    }

    #[test]
    fn failures_do_not_stop_batch() {
        let root = workspace(&["alpha", "beta", "gamma"]);
        // the step name is the last argument given to the script
        std::fs::write(root.path().join("beta/broken"), "").unwrap();
        let tool = BuildTool::new("sh").args(vec![
            String::from("-c"),
            String::from("test ! -f broken"),
        ]);
        let catalog = Catalog::discover(root.path()).unwrap();
        let tally = Build::run(&catalog, &tool, &Step::Compile, Duration::from_secs(5), false);
        assert_eq!(tally, Tally { passed: 2, failed: 1 });
    }

    #[test]
    fn timeout_counts_as_failure() {
        let root = workspace(&["slow"]);
        let tool = BuildTool::new("sh").args(vec![String::from("-c"), String::from("sleep 5")]);
        let catalog = Catalog::discover(root.path()).unwrap();
        let tally = Build::run(&catalog, &tool, &Step::Simulate, Duration::from_millis(200), false);
        assert_eq!(tally, Tally { passed: 0, failed: 1 });
    }
}
