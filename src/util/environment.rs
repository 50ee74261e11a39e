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

// Environment variables read by vproj.

/// Directory holding the global `config.toml` (default `~/.vproj`).
pub const VPROJ_HOME: &str = "VPROJ_HOME";
/// Directory whose subdirectories are managed as projects (default: cwd).
pub const VPROJ_WORKSPACE: &str = "VPROJ_WORKSPACE";
/// Log filter for diagnostic output, in `env_logger` syntax.
pub const VPROJ_LOG: &str = "VPROJ_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the logger. Diagnostic messages go to stderr and are filtered
/// by `VPROJ_LOG`.
pub fn init_logger() {
    let env = env_logger::Env::new().filter_or(VPROJ_LOG, DEFAULT_LOG_FILTER);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
