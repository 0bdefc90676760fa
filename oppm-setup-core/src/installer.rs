//! Editable pip install of the OPPM package
//!
//! The child process owns the terminal for its whole run: stdin, stdout
//! and stderr are inherited so pip's progress output and any prompts go
//! straight to the user.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::error::SetupError;
use crate::toolchain::PythonToolchain;

/// Files that mark a directory as an installable Python project
pub const PROJECT_MANIFESTS: &[&str] = &["pyproject.toml", "setup.py", "setup.cfg"];

/// A fully resolved command line, ready to spawn
#[derive(Debug, Clone)]
pub struct InstallCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl InstallCommand {
    /// Builds `python -m pip install -e <dir>` for the probed interpreter
    pub fn editable_install(toolchain: &PythonToolchain, project_dir: &Path) -> Self {
        let args = vec![
            OsString::from("-m"),
            OsString::from("pip"),
            OsString::from("install"),
            OsString::from("-e"),
            project_dir.as_os_str().to_os_string(),
        ];
        InstallCommand {
            program: toolchain.interpreter.clone(),
            args,
        }
    }

    /// Human-readable command line for log output
    pub fn describe(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

/// Runs the install command exactly once, wired to the current terminal,
/// and blocks until it exits. A nonzero exit becomes `InstallFailed` with
/// the child's own code.
pub fn run(command: &InstallCommand) -> Result<(), SetupError> {
    log::info!("Running: {}", command.describe());

    let status = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if status.success() {
        log::debug!("Install command exited cleanly");
        Ok(())
    } else {
        Err(SetupError::InstallFailed {
            code: exit_code_of(status),
        })
    }
}

/// Maps a child exit status to the code this process should propagate.
/// Signal deaths have no code; the shell convention 128+signal stands in.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// True when the directory carries any recognized Python project manifest
pub fn has_project_manifest(project_dir: &Path) -> bool {
    PROJECT_MANIFESTS
        .iter()
        .any(|manifest| project_dir.join(manifest).is_file())
}
