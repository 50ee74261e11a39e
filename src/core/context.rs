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

use crate::core::config::{Config, Configs, Locality, LOCAL_CONFIG_FILE};
use crate::core::sigspec::Mode;
use crate::error::{Error, LastError};
use crate::util::anyerror::{AnyError, Fault};
use std::env;
use std::path::PathBuf;

/// Runtime state shared by every command.
#[derive(Debug, PartialEq)]
pub struct Context {
    home_path: Option<PathBuf>,
    workspace: PathBuf,
    config: Config,
    force: bool,
}

impl Context {
    pub fn new() -> Context {
        Context {
            home_path: None,
            workspace: PathBuf::from("."),
            config: Config::new(),
            force: false,
        }
    }

    pub fn retain_options(mut self, force: bool) -> Context {
        self.force = force;
        self
    }

    /// Sets the home directory. By default this is `$HOME/.vproj`, overridden
    /// by the environment variable `key`. The directory is not required to
    /// exist.
    pub fn home(mut self, key: &str) -> Result<Context, Fault> {
        self.home_path = match env::var(key) {
            Ok(s) => Some(PathBuf::from(s)),
            Err(_) => home::home_dir().map(|p| p.join(".vproj")),
        };
        if self.home_path.is_none() == true {
            log::warn!(
                "failed to detect user's home directory; set {} to load a global configuration",
                key
            );
        }
        Ok(self)
    }

    /// Sets the workspace to the current working directory, or to the
    /// directory named by the environment variable `key`.
    pub fn workspace(mut self, key: &str) -> Result<Context, Fault> {
        self.workspace = match env::var(key) {
            Ok(s) => {
                let p = PathBuf::from(s);
                if p.is_dir() == false {
                    return Err(AnyError::at(
                        &p,
                        format!("directory named by {} does not exist", key),
                    ))?;
                }
                p
            }
            Err(_) => env::current_dir()?,
        };
        Ok(self)
    }

    /// Reads the global configuration file `s` within the home directory and
    /// the local configuration within the workspace.
    pub fn settings(mut self, s: &str) -> Result<Context, Fault> {
        let mut configs = Configs::new();
        if let Some(home) = &self.home_path {
            configs = configs
                .load(home.join(s), Locality::Global)
                .map_err(|e| Error::ConfigNotLoaded(LastError(e.to_string())))?;
        }
        configs = configs
            .load(self.workspace.join(LOCAL_CONFIG_FILE), Locality::Local)
            .map_err(|e| Error::ConfigNotLoaded(LastError(e.to_string())))?;
        log::debug!("settings: {:?}", configs.get_paths());
        self.config = Config::from(configs);
        Ok(self)
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    /// The directory holding the projects to manage.
    pub fn get_workspace(&self) -> &PathBuf {
        &self.workspace
    }

    pub fn get_home_path(&self) -> Option<&PathBuf> {
        self.home_path.as_ref()
    }

    /// Checks if interactive prompts should be skipped.
    pub fn is_forced(&self) -> bool {
        self.force
    }

    /// The parse mode, promoted to strict when `strict` is set on the command
    /// line.
    pub fn parse_mode(&self, strict: bool) -> Mode {
        match strict || self.config.is_strict() {
            true => Mode::Strict,
            false => Mode::Lenient,
        }
    }
}
