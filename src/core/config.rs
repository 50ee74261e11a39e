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

use crate::core::target::Step;
use crate::util::anyerror::{AnyError, Fault};
use serde_derive::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Name of the global configuration file within the home directory.
pub const CONFIG_FILE: &str = "config.toml";
/// Name of the configuration file within a workspace directory.
pub const LOCAL_CONFIG_FILE: &str = "vproj.toml";

const DEFAULT_REPORT_FILE: &str = "project_report.json";
const DEFAULT_BUILD_COMMAND: &str = "make";

pub trait FromFile: FromStr
where
    Self: Sized,
{
    fn from_file(path: &Path) -> Result<Self, Fault>;
}

#[derive(Debug, PartialEq, Clone)]
pub enum Locality {
    Global,
    Local,
}

/// Every configuration file that was found, with where it came from.
#[derive(Debug, PartialEq)]
pub struct Configs {
    inner: Vec<(PathBuf, Config, Locality)>,
}

impl Configs {
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Loads the configuration at `file` if it exists. A missing file is not
    /// an error.
    pub fn load(mut self, file: PathBuf, lvl: Locality) -> Result<Self, Fault> {
        if file.is_file() == true {
            let cfg = Config::from_file(&file)?;
            log::debug!("loaded configuration {}", file.display());
            self.inner.push((file, cfg, lvl));
        }
        Ok(self)
    }

    pub fn get_paths(&self) -> Vec<&PathBuf> {
        self.inner.iter().map(|(p, _, _)| p).collect()
    }
}

impl From<Configs> for Config {
    /// Transform the multi-layered configurations into a single level.
    ///
    /// The local file is processed before the global file. Once a value is set
    /// it is not overridden by a file later in the processing order.
    fn from(value: Configs) -> Self {
        let mut single = Config::new();
        let mut value = value;
        let local = value.inner.iter().position(|p| p.2 == Locality::Local);
        if let Some(i) = local {
            single.append(value.inner.remove(i).1);
        }
        let global = value.inner.iter().position(|p| p.2 == Locality::Global);
        if let Some(i) = global {
            single.append(value.inner.remove(i).1);
        }
        single
    }
}

#[derive(PartialEq, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct General {
    #[serde(rename = "report-file")]
    report_file: Option<PathBuf>,
    strict: Option<bool>,
}

impl General {
    /// Merges any populated data from `rhs` into attributes that do not already
    /// have data defined in `self`.
    pub fn merge(&mut self, rhs: Option<Self>) {
        if let Some(rhs) = rhs {
            if self.report_file.is_none() == true {
                self.report_file = rhs.report_file;
            }
            if self.strict.is_none() == true {
                self.strict = rhs.strict;
            }
        }
    }
}

#[derive(PartialEq, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Build {
    command: Option<String>,
    args: Option<Vec<String>>,
    #[serde(rename = "compile-timeout")]
    compile_timeout: Option<u64>,
    #[serde(rename = "simulate-timeout")]
    simulate_timeout: Option<u64>,
    #[serde(rename = "clean-timeout")]
    clean_timeout: Option<u64>,
}

impl Build {
    pub fn merge(&mut self, rhs: Option<Self>) {
        if let Some(rhs) = rhs {
            if self.command.is_none() == true {
                self.command = rhs.command;
            }
            if self.args.is_none() == true {
                self.args = rhs.args;
            }
            if self.compile_timeout.is_none() == true {
                self.compile_timeout = rhs.compile_timeout;
            }
            if self.simulate_timeout.is_none() == true {
                self.simulate_timeout = rhs.simulate_timeout;
            }
            if self.clean_timeout.is_none() == true {
                self.clean_timeout = rhs.clean_timeout;
            }
        }
    }
}

#[derive(PartialEq, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    general: Option<General>,
    build: Option<Build>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            general: None,
            build: None,
        }
    }

    /// Adds the new information to the existing configuration to combine data.
    ///
    /// Existing data in `self` has precedence over incoming data from `rhs`.
    pub fn append(&mut self, rhs: Self) {
        match &mut self.general {
            Some(v) => v.merge(rhs.general),
            None => self.general = rhs.general,
        }
        match &mut self.build {
            Some(v) => v.merge(rhs.build),
            None => self.build = rhs.build,
        }
    }

    pub fn get_report_file(&self) -> PathBuf {
        self.general
            .as_ref()
            .and_then(|g| g.report_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILE))
    }

    pub fn is_strict(&self) -> bool {
        self.general.as_ref().and_then(|g| g.strict).unwrap_or(false)
    }

    /// The program invoked for every build step.
    pub fn get_build_command(&self) -> &str {
        self.build
            .as_ref()
            .and_then(|b| b.command.as_deref())
            .unwrap_or(DEFAULT_BUILD_COMMAND)
    }

    /// Arguments placed before the step's target name.
    pub fn get_build_args(&self) -> Vec<String> {
        self.build
            .as_ref()
            .and_then(|b| b.args.clone())
            .unwrap_or_default()
    }

    /// The time limit for one invocation of `step`.
    pub fn get_timeout(&self, step: &Step) -> Duration {
        let secs = self.build.as_ref().and_then(|b| match step {
            Step::Compile => b.compile_timeout,
            Step::Simulate => b.simulate_timeout,
            Step::Clean => b.clean_timeout,
        });
        match secs {
            Some(s) => Duration::from_secs(s),
            None => step.default_timeout(),
        }
    }
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl FromFile for Config {
    fn from_file(path: &Path) -> Result<Self, Fault> {
        let contents = std::fs::read_to_string(&path)?;
        match Self::from_str(&contents) {
            Ok(r) => Ok(r),
            Err(e) => Err(AnyError::at(path, e))?,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const C_0: &str = r#"
# This is a blank configuration file.
"#;

    const C_1: &str = r#"
[general]
report-file = "out/summary.json"

[build]
command = "make"
args = ["-s"]
compile-timeout = 60
"#;

    const C_2: &str = r#"
[general]
report-file = "ignored.json"
strict = true

[build]
command = "gmake"
clean-timeout = 2
"#;

    #[test]
    fn parse_empty_config() {
        let cfg = Config::from_str(C_0).unwrap();
        assert_eq!(cfg, Config::new());
        assert_eq!(cfg.get_build_command(), "make");
        assert_eq!(cfg.get_build_args(), Vec::<String>::new());
        assert_eq!(cfg.get_report_file(), PathBuf::from("project_report.json"));
        assert_eq!(cfg.is_strict(), false);
        assert_eq!(cfg.get_timeout(&Step::Compile), Duration::from_secs(30));
        assert_eq!(cfg.get_timeout(&Step::Simulate), Duration::from_secs(30));
        assert_eq!(cfg.get_timeout(&Step::Clean), Duration::from_secs(10));
    }

    #[test]
    fn parse_basic_config() {
        let cfg = Config::from_str(C_1).unwrap();
        assert_eq!(cfg.get_report_file(), PathBuf::from("out/summary.json"));
        assert_eq!(cfg.get_build_args(), vec![String::from("-s")]);
        assert_eq!(cfg.get_timeout(&Step::Compile), Duration::from_secs(60));
        assert_eq!(cfg.get_timeout(&Step::Clean), Duration::from_secs(10));
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(Config::from_str("[build]\ntimeout = 3\n").is_err());
        assert!(Config::from_str("[plugin]\n").is_err());
    }

    #[test]
    fn local_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join(LOCAL_CONFIG_FILE);
        let global = dir.path().join(CONFIG_FILE);
        std::fs::write(&local, C_1).unwrap();
        std::fs::write(&global, C_2).unwrap();

        let configs = Configs::new()
            .load(global, Locality::Global)
            .unwrap()
            .load(local, Locality::Local)
            .unwrap();
        assert_eq!(configs.get_paths().len(), 2);
        let cfg = Config::from(configs);
        assert_eq!(cfg.get_report_file(), PathBuf::from("out/summary.json"));
        assert_eq!(cfg.get_build_command(), "make");
        assert_eq!(cfg.is_strict(), true);
        assert_eq!(cfg.get_timeout(&Step::Compile), Duration::from_secs(60));
        assert_eq!(cfg.get_timeout(&Step::Clean), Duration::from_secs(2));
    }

    #[test]
    fn missing_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let configs = Configs::new()
            .load(dir.path().join("nope.toml"), Locality::Local)
            .unwrap();
        assert_eq!(configs.get_paths().len(), 0);
        assert_eq!(Config::from(configs), Config::new());
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        std::fs::write(&path, "[build\n").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains(LOCAL_CONFIG_FILE));
    }
}
