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

use crate::commands::helps::show;
use crate::core::catalog::{Catalog, ProjectEntry};
use crate::core::context::Context;
use crate::error::{Error, Hint};
use crate::util::anyerror::Fault;
use crate::util::filesystem::{self, Unit};
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Show {
    name: String,
}

impl Subcommand<Context> for Show {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(show::HELP))?;
        Ok(Show {
            name: cli.require(Arg::positional("name"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let catalog = Catalog::discover(c.get_workspace())?;
        let project = Self::find(&catalog, &self.name)?;
        print!("{}", Self::summarize(project)?);
        Ok(())
    }
}

impl Show {
    fn find<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a ProjectEntry, Error> {
        catalog.get(name).ok_or_else(|| {
            Error::ProjectNotFound(
                name.to_string(),
                filesystem::into_std_str(catalog.get_root().clone()),
                Hint::ProjectsList,
            )
        })
    }

    fn fmt_files(files: &[PathBuf], root: &PathBuf) -> Result<String, Fault> {
        if files.is_empty() == true {
            return Ok(String::from("    (none)\n"));
        }
        let mut body = String::new();
        for f in files {
            let rel = f.strip_prefix(root).unwrap_or(f).to_path_buf();
            body.push_str(&format!(
                "    {:<36}{} lines\n",
                filesystem::into_std_str(rel),
                filesystem::count_lines(f)?
            ));
        }
        Ok(body)
    }

    fn summarize(project: &ProjectEntry) -> Result<String, Fault> {
        let root = project.get_path();
        let mut text = format!(
            "{}\n    path: {}\n",
            project.get_name(),
            filesystem::into_std_str(root.clone())
        );
        text.push_str("\nRTL files:\n");
        text.push_str(&Self::fmt_files(&project.rtl_files()?, root)?);
        text.push_str("\nTestbench files:\n");
        text.push_str(&Self::fmt_files(&project.bench_files()?, root)?);
        text.push_str("\nWaveform:\n");
        let vcd = project.waveform();
        match vcd.is_file() {
            true => text.push_str(&format!(
                "    {:<36}{:.2} KB\n",
                filesystem::into_std_str(vcd.strip_prefix(root).unwrap_or(&vcd).to_path_buf()),
                filesystem::compute_size(&vcd, Unit::KiloBytes)?
            )),
            false => text.push_str("    (not simulated)\n"),
        }
        Ok(text)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::identifier::Identifier;
    use crate::core::project::Project;
    use crate::core::sigspec::SignalSpec;
    use std::str::FromStr;

    #[test]
    fn missing_project() {
        let root = tempfile::tempdir().unwrap();
        let catalog = Catalog::discover(root.path()).unwrap();
        let err = Show::find(&catalog, "ghost").unwrap_err();
        assert!(matches!(err, Error::ProjectNotFound(ref n, _, Hint::ProjectsList) if n == "ghost"));
    }

    #[test]
    fn summary_lists_files_and_waveform() {
        let root = tempfile::tempdir().unwrap();
        let project = Project::new(
            Identifier::from_str("blink").unwrap(),
            SignalSpec::from_str("clk / led").unwrap(),
        );
        project.generate(root.path()).unwrap();

        let catalog = Catalog::discover(root.path()).unwrap();
        let entry = Show::find(&catalog, "blink").unwrap();
        let text = Show::summarize(entry).unwrap();
        assert!(text.starts_with("blink\n"));
        assert!(text.contains("rtl/blink.v"));
        assert!(text.contains("sim/blink_tb.v"));
        assert!(text.contains("(not simulated)"));

        std::fs::write(root.path().join("blink/blink.vcd"), vec![b'x'; 1024]).unwrap();
        let text = Show::summarize(entry).unwrap();
        assert!(text.contains("1.00 KB"));
    }
}
