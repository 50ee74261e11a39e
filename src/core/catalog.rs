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

use super::project::{BENCH_SUFFIX, BUILD_FILE, HDL_EXT, RTL_DIR, SIM_DIR, WAVEFORM_EXT};
use crate::util::anyerror::Fault;
use crate::util::filesystem;
use std::path::{Path, PathBuf};

/// A generated project found on the file system.
#[derive(Debug, PartialEq)]
pub struct ProjectEntry {
    name: String,
    path: PathBuf,
}

impl ProjectEntry {
    /// Checks if `dir` has the layout of a project: `rtl/`, `sim/` and a build
    /// file.
    pub fn is_project(dir: &Path) -> bool {
        dir.is_dir()
            && dir.join(BUILD_FILE).is_file()
            && dir.join(RTL_DIR).is_dir()
            && dir.join(SIM_DIR).is_dir()
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_path(&self) -> &PathBuf {
        &self.path
    }

    fn glob_files(&self, pattern: &str) -> Result<Vec<PathBuf>, Fault> {
        let pattern = self.path.join(pattern);
        let mut files: Vec<PathBuf> = glob::glob(&filesystem::into_std_str(pattern))?
            .filter_map(|f| f.ok())
            .filter(|f| f.is_file())
            .collect();
        files.sort();
        Ok(files)
    }

    /// Module sources: `rtl/*.v`.
    pub fn rtl_files(&self) -> Result<Vec<PathBuf>, Fault> {
        self.glob_files(&format!("{}/*.{}", RTL_DIR, HDL_EXT))
    }

    /// Testbench sources: `sim/*_tb.v`.
    pub fn bench_files(&self) -> Result<Vec<PathBuf>, Fault> {
        self.glob_files(&format!("{}/*{}.{}", SIM_DIR, BENCH_SUFFIX, HDL_EXT))
    }

    /// The waveform produced by simulation: `<name>.vcd`.
    pub fn waveform(&self) -> PathBuf {
        self.path.join(format!("{}.{}", self.name, WAVEFORM_EXT))
    }

    /// A project is complete when it has at least one module and one testbench.
    pub fn is_complete(&self) -> Result<bool, Fault> {
        Ok(self.rtl_files()?.is_empty() == false && self.bench_files()?.is_empty() == false)
    }

    pub fn stats(&self) -> Result<ProjectStats, Fault> {
        let rtl = self.rtl_files()?;
        let bench = self.bench_files()?;
        Ok(ProjectStats {
            rtl_files: rtl.len(),
            tb_files: bench.len(),
            rtl_lines: filesystem::count_lines_all(&rtl)?,
            tb_lines: filesystem::count_lines_all(&bench)?,
            vcd_file: self.waveform().is_file(),
        })
    }
}

/// File and line counts for a single project.
#[derive(Debug, PartialEq, Clone, serde_derive::Serialize)]
pub struct ProjectStats {
    pub rtl_files: usize,
    pub tb_files: usize,
    pub rtl_lines: usize,
    pub tb_lines: usize,
    pub vcd_file: bool,
}

/// The projects discovered directly under a workspace directory.
#[derive(Debug, PartialEq)]
pub struct Catalog {
    root: PathBuf,
    projects: Vec<ProjectEntry>,
}

impl Catalog {
    /// Scans the immediate subdirectories of `root` for projects, sorted by
    /// name.
    pub fn discover(root: &Path) -> Result<Self, Fault> {
        let mut projects = Vec::new();
        for entry in std::fs::read_dir(root)? {
            let path = entry?.path();
            if ProjectEntry::is_project(&path) == false {
                continue;
            }
            let name = match path.file_name() {
                Some(n) => n.to_string_lossy().to_string(),
                None => continue,
            };
            log::debug!("found project {} at {}", name, path.display());
            projects.push(ProjectEntry {
                name: name,
                path: path,
            });
        }
        projects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self {
            root: root.to_path_buf(),
            projects: projects,
        })
    }

    pub fn get_root(&self) -> &PathBuf {
        &self.root
    }

    pub fn get(&self, name: &str) -> Option<&ProjectEntry> {
        self.projects.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectEntry> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::identifier::Identifier;
    use crate::core::project::Project;
    use crate::core::sigspec::SignalSpec;
    use std::str::FromStr;

    fn generate(root: &Path, name: &str, spec: &str) -> PathBuf {
        Project::new(
            Identifier::from_str(name).unwrap(),
            SignalSpec::from_str(spec).unwrap(),
        )
        .generate(root)
        .unwrap()
    }

    #[test]
    fn discovers_only_complete_layouts() {
        let root = tempfile::tempdir().unwrap();
        generate(root.path(), "zeta", "a / y");
        generate(root.path(), "alpha", "clk / q");
        // missing a build file
        std::fs::create_dir_all(root.path().join("loose/rtl")).unwrap();
        std::fs::create_dir_all(root.path().join("loose/sim")).unwrap();
        // a plain file
        std::fs::write(root.path().join("notes.txt"), "x").unwrap();

        let catalog = Catalog::discover(root.path()).unwrap();
        let names: Vec<&str> = catalog.iter().map(|p| p.get_name()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert_eq!(catalog.get("loose"), None);
        assert!(catalog.get("zeta").is_some());
    }

    #[test]
    fn stats_for_generated_project() {
        let root = tempfile::tempdir().unwrap();
        let dir = generate(root.path(), "gate", "a, b / y");
        let catalog = Catalog::discover(root.path()).unwrap();
        let entry = catalog.get("gate").unwrap();

        assert_eq!(entry.is_complete().unwrap(), true);

        let rtl_lines = std::fs::read_to_string(dir.join("rtl/gate.v"))
            .unwrap()
            .lines()
            .count();
        let stats = entry.stats().unwrap();
        assert_eq!(stats.rtl_files, 1);
        assert_eq!(stats.tb_files, 1);
        assert_eq!(stats.rtl_lines, rtl_lines);
        assert_eq!(stats.vcd_file, false);

        std::fs::write(dir.join("gate.vcd"), "$date\n").unwrap();
        assert_eq!(entry.stats().unwrap().vcd_file, true);
    }

    #[test]
    fn incomplete_without_testbench() {
        let root = tempfile::tempdir().unwrap();
        let dir = generate(root.path(), "half", "a / y");
        std::fs::remove_file(dir.join("sim/half_tb.v")).unwrap();
        std::fs::write(dir.join("sim/helper.v"), "// not a bench\n").unwrap();
        let catalog = Catalog::discover(root.path()).unwrap();
        assert_eq!(catalog.get("half").unwrap().is_complete().unwrap(), false);
    }
}
