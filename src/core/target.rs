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

use crate::core::config::Config;
use std::fmt::Display;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A named target of the external build tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Compile,
    Simulate,
    Clean,
}

impl Step {
    /// The target name passed to the build tool.
    pub fn as_target(&self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Simulate => "simulate",
            Self::Clean => "clean",
        }
    }

    pub fn default_timeout(&self) -> Duration {
        match self {
            Self::Compile => Duration::from_secs(30),
            Self::Simulate => Duration::from_secs(30),
            Self::Clean => Duration::from_secs(10),
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_target())
    }
}

/// The result of running one build step in one project.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Success { stdout: String, stderr: String },
    /// Exited with a non-zero status, or was terminated by a signal (`None`).
    Failed { code: Option<i32>, stderr: String },
    TimedOut(Duration),
    SpawnFailed(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        match self {
            Self::Success { .. } => true,
            _ => false,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success { .. } => write!(f, "ok"),
            Self::Failed { code: Some(c), .. } => write!(f, "exited with error code: {}", c),
            Self::Failed { code: None, .. } => write!(f, "terminated by signal"),
            Self::TimedOut(t) => write!(f, "timed out after {}s", t.as_secs_f32()),
            Self::SpawnFailed(e) => write!(f, "failed to start: {}", e),
        }
    }
}

/// The external program that builds projects.
#[derive(Debug, PartialEq, Clone)]
pub struct BuildTool {
    command: String,
    args: Vec<String>,
}

impl BuildTool {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            args: Vec::new(),
        }
    }

    pub fn args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.get_build_command()).args(cfg.get_build_args())
    }

    pub fn get_command(&self) -> &str {
        &self.command
    }

    /// Runs `<command> [args...] <step>` from `cwd`, capturing its output.
    ///
    /// The child is killed if it has not exited within `timeout`.
    pub fn execute(&self, cwd: &Path, step: &Step, timeout: Duration) -> Outcome {
        log::debug!(
            "running {} {:?} {} in {}",
            self.command,
            self.args,
            step,
            cwd.display()
        );
        let mut child = match Command::new(&self.command)
            .args(&self.args)
            .arg(step.as_target())
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(c) => c,
            Err(e) => return Outcome::SpawnFailed(e.to_string()),
        };

        // drain both pipes so the child never blocks on a full buffer
        let stdout = Self::drain(child.stdout.take());
        let stderr = Self::drain(child.stderr.take());

        // a timeout too large to represent never expires
        let deadline = Instant::now().checked_add(timeout);
        let status = match Self::wait_until(&mut child, deadline) {
            Ok(Some(s)) => s,
            Ok(None) => {
                log::warn!("killing {} after {:?}", self.command, timeout);
                let _ = child.kill();
                let _ = child.wait();
                return Outcome::TimedOut(timeout);
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Outcome::SpawnFailed(e.to_string());
            }
        };

        let stdout = Self::collect(stdout);
        let stderr = Self::collect(stderr);
        match status.code() {
            Some(0) => Outcome::Success {
                stdout: stdout,
                stderr: stderr,
            },
            code => Outcome::Failed {
                code: code,
                stderr: stderr,
            },
        }
    }

    /// Polls the child until it exits or `deadline` passes (`Ok(None)`).
    fn wait_until(
        child: &mut Child,
        deadline: Option<Instant>,
    ) -> std::io::Result<Option<std::process::ExitStatus>> {
        loop {
            if let Some(status) = child.try_wait()? {
                break Ok(Some(status));
            }
            if matches!(deadline, Some(d) if Instant::now() >= d) {
                break Ok(None);
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<String>> {
        pipe.map(|mut p| {
            std::thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = p.read_to_end(&mut buf);
                String::from_utf8_lossy(&buf).into_owned()
            })
        })
    }

    fn collect(handle: Option<JoinHandle<String>>) -> String {
        handle.and_then(|h| h.join().ok()).unwrap_or_default()
    }
}
