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

use super::identifier::Identifier;
use super::port::PortList;
use super::render::Renderer;
use super::sigspec::SignalSpec;
use crate::util::anyerror::Fault;
use std::path::{Path, PathBuf};

pub const RTL_DIR: &str = "rtl";
pub const SIM_DIR: &str = "sim";
pub const BUILD_FILE: &str = "Makefile";
pub const README_FILE: &str = "README.md";
pub const HDL_EXT: &str = "v";
pub const BENCH_SUFFIX: &str = "_tb";
pub const WAVEFORM_EXT: &str = "vcd";

const STAGING_PREFIX: &str = ".vproj-";
/// Name of the replaced project inside the staging directory. Never a valid
/// identifier, so it cannot clash with the staged tree.
const PREVIOUS_DIR: &str = ".previous";

/// A Verilog project to be written to disk: one module and its testbench.
#[derive(Debug, PartialEq)]
pub struct Project {
    name: Identifier,
    inputs: PortList,
    outputs: PortList,
    rtl: Option<String>,
    bench: Option<String>,
}

impl Project {
    pub fn new(name: Identifier, spec: SignalSpec) -> Self {
        let (inputs, outputs) = spec.into_lists();
        Self {
            name: name,
            inputs: inputs,
            outputs: outputs,
            rtl: None,
            bench: None,
        }
    }

    /// Replaces the generated module and testbench skeletons with fixed text.
    pub fn sources(mut self, rtl: &str, bench: &str) -> Self {
        self.rtl = Some(rtl.to_string());
        self.bench = Some(bench.to_string());
        self
    }

    pub fn get_name(&self) -> &Identifier {
        &self.name
    }

    pub fn get_inputs(&self) -> &PortList {
        &self.inputs
    }

    pub fn get_outputs(&self) -> &PortList {
        &self.outputs
    }

    /// Path of the module source relative to the project root.
    pub fn rtl_path(&self) -> PathBuf {
        PathBuf::from(RTL_DIR).join(format!("{}.{}", self.name, HDL_EXT))
    }

    /// Path of the testbench source relative to the project root.
    pub fn bench_path(&self) -> PathBuf {
        PathBuf::from(SIM_DIR).join(format!("{}{}.{}", self.name, BENCH_SUFFIX, HDL_EXT))
    }

    /// Renders every file of the project as `(relative path, contents)` pairs.
    pub fn render(&self, timestamp: &str) -> Vec<(PathBuf, String)> {
        let r = Renderer::new(&self.name, &self.inputs, &self.outputs);
        vec![
            (
                self.rtl_path(),
                self.rtl.clone().unwrap_or_else(|| r.module()),
            ),
            (
                self.bench_path(),
                self.bench.clone().unwrap_or_else(|| r.testbench()),
            ),
            (PathBuf::from(BUILD_FILE), r.makefile()),
            (PathBuf::from(README_FILE), r.readme(timestamp)),
        ]
    }

    /// Writes the project into `parent/<name>` and returns that path.
    ///
    /// All files are first written to a hidden staging directory inside
    /// `parent`. Only after every file is written is any existing destination
    /// moved aside into the staging directory and the staged tree moved into
    /// place. The previous project is restored if that final move fails and
    /// is deleted along with the staging directory otherwise.
    pub fn generate(&self, parent: &Path) -> Result<PathBuf, Fault> {
        let dest = parent.join(&self.name);
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        // removed automatically when dropped, including on early return
        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(parent)?;
        let staged_root = staging.path().join(&self.name);
        std::fs::create_dir(&staged_root)?;
        std::fs::create_dir(staged_root.join(RTL_DIR))?;
        std::fs::create_dir(staged_root.join(SIM_DIR))?;

        for (rel, contents) in self.render(&timestamp) {
            let path = staged_root.join(&rel);
            std::fs::write(&path, contents)?;
            log::debug!("staged {}", path.display());
        }

        let previous = staging.path().join(PREVIOUS_DIR);
        let replacing = dest.exists();
        if replacing == true {
            log::info!("replacing existing project at {}", dest.display());
            std::fs::rename(&dest, &previous)?;
        }
        if let Err(e) = std::fs::rename(&staged_root, &dest) {
            if replacing == true {
                std::fs::rename(&previous, &dest)?;
            }
            return Err(e.into());
        }
        Ok(dest)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    fn project(name: &str, spec: &str) -> Project {
        Project::new(
            Identifier::from_str(name).unwrap(),
            SignalSpec::from_str(spec).unwrap(),
        )
    }

    #[test]
    fn file_layout() {
        let p = project("adder", "a, b / sum");
        let files: Vec<PathBuf> = p.render("now").into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            files,
            vec![
                PathBuf::from("rtl/adder.v"),
                PathBuf::from("sim/adder_tb.v"),
                PathBuf::from("Makefile"),
                PathBuf::from("README.md"),
            ]
        );
    }

    #[test]
    fn fixed_sources_replace_skeletons() {
        let p = project("mux", "a / y").sources("RTL", "BENCH");
        let files = p.render("now");
        assert_eq!(files[0].1, "RTL");
        assert_eq!(files[1].1, "BENCH");
        assert!(files[2].1.contains("rtl/mux.v"));
    }

    #[test]
    fn generate_writes_tree() {
        let root = tempfile::tempdir().unwrap();
        let p = project("counter", "clk, rst / [3:0] count");
        let dest = p.generate(root.path()).unwrap();
        assert_eq!(dest, root.path().join("counter"));
        assert!(dest.join("rtl/counter.v").is_file());
        assert!(dest.join("sim/counter_tb.v").is_file());
        assert!(dest.join("Makefile").is_file());
        assert!(dest.join("README.md").is_file());
        let rtl = std::fs::read_to_string(dest.join("rtl/counter.v")).unwrap();
        assert!(rtl.contains("output [3:0] count"));
        // no staging directory left behind
        let leftovers = std::fs::read_dir(root.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with(STAGING_PREFIX))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn generate_overwrites_existing() {
        let root = tempfile::tempdir().unwrap();
        let dest = root.path().join("gate");
        std::fs::create_dir_all(dest.join("old")).unwrap();
        std::fs::write(dest.join("old/stale.v"), "stale").unwrap();

        project("gate", "a / y").generate(root.path()).unwrap();
        assert_eq!(dest.join("old").exists(), false);
        assert!(dest.join("rtl/gate.v").is_file());
        // the replaced tree goes away with the staging directory
        let entries: Vec<_> = std::fs::read_dir(root.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("gate")]);
    }

    #[test]
    fn generate_replaces_plain_file() {
        let root = tempfile::tempdir().unwrap();
        let dest = root.path().join("gate");
        std::fs::write(&dest, "not a project").unwrap();

        project("gate", "a / y").generate(root.path()).unwrap();
        assert!(dest.join("rtl/gate.v").is_file());
    }

    #[test]
    fn generate_fails_without_leaving_partial_tree() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("does-not-exist");
        assert!(project("gate", "a / y").generate(&missing).is_err());
        assert_eq!(missing.exists(), false);
    }
}
