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

use crate::commands::helps::help;
use crate::commands::manuals;
use crate::util::anyerror::AnyError;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Help {
    list: bool,
    topic: Option<Topic>,
}

impl Subcommand<()> for Help {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(cliproc::Help::with(help::HELP))?;
        Ok(Help {
            list: cli.check(Arg::flag("list"))?,
            topic: cli.get(Arg::positional("topic"))?,
        })
    }

    fn execute(self, _: &()) -> proc::Result {
        println!("{}", self.page());
        Ok(())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum Topic {
    New,
    Template,
    List,
    Show,
    Build,
    Report,
    Signals,
    Config,
}

impl Topic {
    const ALL: [Topic; 8] = [
        Self::New,
        Self::Template,
        Self::List,
        Self::Show,
        Self::Build,
        Self::Report,
        Self::Signals,
        Self::Config,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Template => "template",
            Self::List => "list",
            Self::Show => "show",
            Self::Build => "build",
            Self::Report => "report",
            Self::Signals => "signals",
            Self::Config => "config",
        }
    }

    /// The manual page for the topic.
    fn as_manual(&self) -> &'static str {
        match self {
            Self::New => manuals::new::MANUAL,
            Self::Template => manuals::template::MANUAL,
            Self::List => manuals::list::MANUAL,
            Self::Show => manuals::show::MANUAL,
            Self::Build => manuals::build::MANUAL,
            Self::Report => manuals::report::MANUAL,
            Self::Signals => manuals::signals::MANUAL,
            Self::Config => manuals::config::MANUAL,
        }
    }

    fn list_all() -> String {
        Self::ALL
            .iter()
            .map(|t| format!("{}\n", t.name()))
            .collect()
    }
}

impl std::str::FromStr for Topic {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the batch commands share one page
        let s = match s {
            "compile" | "simulate" | "clean" => "build",
            _ => s,
        };
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| AnyError(format!("topic '{}' not found", s)))
    }
}

impl Help {
    fn page(&self) -> String {
        match (self.list, self.topic) {
            (true, _) => Topic::list_all(),
            (false, Some(t)) => t.as_manual().to_string(),
            (false, None) => manuals::vproj::MANUAL.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn build_steps_share_a_topic() {
        for s in ["build", "compile", "simulate", "clean"] {
            assert_eq!(Topic::from_str(s).unwrap(), Topic::Build);
        }
        assert!(Topic::from_str("upgrade").is_err());
    }

    #[test]
    fn list_takes_priority() {
        let h = Help {
            list: true,
            topic: Some(Topic::Config),
        };
        assert_eq!(h.page().lines().count(), Topic::ALL.len());
        let h = Help {
            list: false,
            topic: None,
        };
        assert!(h.page().starts_with("NAME\n    vproj"));
    }

    #[test]
    fn every_listed_topic_resolves() {
        for t in Topic::list_all().lines() {
            assert!(Topic::from_str(t).unwrap().as_manual().starts_with("NAME"));
        }
    }
}
