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

use super::catalog::{Catalog, ProjectStats};
use crate::util::anyerror::Fault;
use serde_derive::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Summary of every project in a catalog.
#[derive(Debug, PartialEq, Serialize)]
pub struct Report {
    timestamp: String,
    total_projects: usize,
    projects: BTreeMap<String, ProjectStats>,
}

impl Report {
    pub fn new(catalog: &Catalog) -> Result<Self, Fault> {
        let mut projects = BTreeMap::new();
        for entry in catalog.iter() {
            projects.insert(entry.get_name().to_string(), entry.stats()?);
        }
        Ok(Self {
            timestamp: chrono::Local::now().to_rfc3339(),
            total_projects: catalog.len(),
            projects: projects,
        })
    }

    pub fn get(&self, name: &str) -> Option<&ProjectStats> {
        self.projects.get(name)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the JSON document to `dest`, creating parent directories.
    pub fn write(&self, dest: &Path) -> Result<(), Fault> {
        if let Some(parent) = dest.parent() {
            if parent.as_os_str().is_empty() == false {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(dest, self.to_json()? + "\n")?;
        Ok(())
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
    fn report_document_shape() {
        let root = tempfile::tempdir().unwrap();
        for (name, spec) in [("b_mod", "a / y"), ("a_mod", "clk, rst / q")] {
            Project::new(
                Identifier::from_str(name).unwrap(),
                SignalSpec::from_str(spec).unwrap(),
            )
            .generate(root.path())
            .unwrap();
        }
        std::fs::write(root.path().join("a_mod/a_mod.vcd"), "").unwrap();

        let report = Report::new(&Catalog::discover(root.path()).unwrap()).unwrap();
        assert_eq!(report.get("a_mod").unwrap().vcd_file, true);
        assert_eq!(report.get("b_mod").unwrap().vcd_file, false);

        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["total_projects"], 2);
        assert_eq!(value["projects"]["a_mod"]["rtl_files"], 1);
        assert_eq!(value["projects"]["a_mod"]["tb_files"], 1);
        assert_eq!(value["projects"]["b_mod"]["vcd_file"], false);
        assert!(value["projects"]["b_mod"]["rtl_lines"].as_u64().unwrap() > 0);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn write_creates_parent_directories() {
        let root = tempfile::tempdir().unwrap();
        let report = Report::new(&Catalog::discover(root.path()).unwrap()).unwrap();
        let dest = root.path().join("out/nested/report.json");
        report.write(&dest).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&dest).unwrap()).unwrap();
        assert_eq!(value["total_projects"], 0);
        assert_eq!(value["projects"], serde_json::json!({}));
    }
}
