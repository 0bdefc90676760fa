//! Python toolchain discovery
//!
//! The editable install needs a working interpreter with pip reachable
//! through it. Probing both up front turns "pip exploded with a generic
//! code" into a precise tool-not-found report before anything runs.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::SetupError;

/// Interpreter launchers to try, in order. The `py` launcher is the
/// canonical entry point on Windows; elsewhere `python3` outranks the
/// unversioned name.
#[cfg(windows)]
pub const LAUNCHERS: &[&str] = &["py", "python", "python3"];
#[cfg(not(windows))]
pub const LAUNCHERS: &[&str] = &["python3", "python"];

/// A Python interpreter that answered the probe, with pip available
#[derive(Debug, Clone)]
pub struct PythonToolchain {
    /// Resolved interpreter path
    pub interpreter: PathBuf,
    /// First line of `python --version`, e.g. "Python 3.11.4"
    pub python_version: String,
    /// First line of `python -m pip --version`
    pub pip_version: String,
}

/// Locates a usable interpreter on PATH and verifies pip answers through it.
///
/// A launcher that resolves but does not answer `--version` (the Windows
/// Store shim behaves this way) is skipped rather than trusted. If every
/// healthy interpreter lacks pip, the first one is named in the error so
/// the user knows which install to repair.
pub fn probe() -> Result<PythonToolchain, SetupError> {
    let mut interpreter_without_pip: Option<PathBuf> = None;

    for launcher in LAUNCHERS {
        let path = match which::which(launcher) {
            Ok(path) => path,
            Err(_) => continue,
        };

        let python_version = match capture_version(&path, &["--version"]) {
            Some(version) => version,
            None => {
                log::debug!(
                    "{} resolved to {} but did not answer --version; skipping",
                    launcher,
                    path.display()
                );
                continue;
            }
        };

        match capture_version(&path, &["-m", "pip", "--version"]) {
            Some(pip_version) => {
                return Ok(PythonToolchain {
                    interpreter: path,
                    python_version,
                    pip_version,
                });
            }
            None => {
                log::debug!("{} has no usable pip module", path.display());
                interpreter_without_pip.get_or_insert(path);
            }
        }
    }

    match interpreter_without_pip {
        Some(path) => Err(SetupError::PipNotFound {
            interpreter: path.display().to_string(),
        }),
        None => Err(SetupError::InterpreterNotFound {
            tried: LAUNCHERS.join(", "),
        }),
    }
}

/// Runs `program args..` and returns the first non-empty output line when it
/// exits zero. Old interpreters print their version banner to stderr, so
/// both streams are consulted.
fn capture_version(program: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    first_line(&output.stdout).or_else(|| first_line(&output.stderr))
}

fn first_line(bytes: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(bytes);
    let line = text.lines().next()?.trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

/// Prints the probe outcome in a formatted table
pub fn print_toolchain_status(outcome: &Result<PythonToolchain, SetupError>) {
    println!("\n==================================================");
    println!("  Toolchain Status");
    println!("==================================================\n");

    match outcome {
        Ok(toolchain) => {
            println!("✓ {}", toolchain.python_version);
            println!("   {}", toolchain.interpreter.display());
            println!();
            println!("✓ {}", toolchain.pip_version);
            println!();
            println!("==================================================\n");
            println!("Everything oppm-setup needs is available.\n");
        }
        Err(error) => {
            println!("✗ {}", error);
            if let Some(advice) = error.advice() {
                println!("   {}", advice);
            }
            println!();
            println!("==================================================\n");
            println!("⚠ WARNING: the OPPM install cannot proceed until this is fixed.\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launcher_list_is_not_empty() {
        assert!(!LAUNCHERS.is_empty());
        // The unversioned name is always worth trying somewhere in the list
        assert!(LAUNCHERS.contains(&"python"));
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_version_reads_first_stdout_line() {
        let sh = which::which("sh").expect("sh should exist on unix");
        let version = capture_version(&sh, &["-c", "echo Python 3.11.4; echo extra"]);
        assert_eq!(version.as_deref(), Some("Python 3.11.4"));
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_version_falls_back_to_stderr() {
        let sh = which::which("sh").expect("sh should exist on unix");
        let version = capture_version(&sh, &["-c", "echo Python 2.7.18 1>&2"]);
        assert_eq!(version.as_deref(), Some("Python 2.7.18"));
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_version_rejects_nonzero_exit() {
        let sh = which::which("sh").expect("sh should exist on unix");
        assert!(capture_version(&sh, &["-c", "echo nope; exit 1"]).is_none());
    }

    #[cfg(windows)]
    #[test]
    fn test_capture_version_reads_cmd_output() {
        let cmd = which::which("cmd").expect("cmd should exist on windows");
        let version = capture_version(&cmd, &["/C", "echo Python 3.11.4"]);
        assert_eq!(version.as_deref(), Some("Python 3.11.4"));
    }

    #[test]
    fn test_capture_version_handles_missing_program() {
        let missing = Path::new("this_interpreter_definitely_does_not_exist_12345");
        assert!(capture_version(missing, &["--version"]).is_none());
    }

    #[test]
    fn test_capture_version_ignores_blank_output() {
        #[cfg(unix)]
        {
            let sh = which::which("sh").expect("sh should exist on unix");
            assert!(capture_version(&sh, &["-c", "true"]).is_none());
        }
    }
}
