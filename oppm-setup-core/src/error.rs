use std::io;

use thiserror::Error;

/// Exit code reported when the toolchain probe fails, matching the shell's
/// "command not found" convention so callers see the same code a missing
/// tool would have produced.
pub const EXIT_TOOL_NOT_FOUND: i32 = 127;

/// Exit code reported when the final keypress wait is interrupted (128 + SIGINT).
pub const EXIT_INTERRUPTED: i32 = 130;

/// Everything that can go wrong during a bootstrap run
#[derive(Debug, Error)]
pub enum SetupError {
    /// No Python interpreter answered on the executable search path
    #[error("no Python interpreter found on PATH (tried: {tried})")]
    InterpreterNotFound { tried: String },

    /// An interpreter was found but `-m pip` did not answer through it
    #[error("pip is not available for the Python interpreter at {interpreter}")]
    PipNotFound { interpreter: String },

    /// The install child process exited with a non-zero status
    #[error("the install command exited with status {code}")]
    InstallFailed { code: i32 },

    /// Ctrl-C arrived while waiting for the final keypress
    #[error("interrupted while waiting for a keypress")]
    Interrupted,

    /// Console or process-spawning plumbing failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SetupError {
    /// Process exit code the bootstrap reports to its own parent for this error.
    ///
    /// Install failures propagate the child's code verbatim so automated
    /// callers can detect the failure even though a human was prompted.
    pub fn exit_code(&self) -> i32 {
        match self {
            SetupError::InterpreterNotFound { .. } | SetupError::PipNotFound { .. } => {
                EXIT_TOOL_NOT_FOUND
            }
            SetupError::InstallFailed { code } => *code,
            SetupError::Interrupted => EXIT_INTERRUPTED,
            SetupError::Io(_) => 1,
        }
    }

    /// Actionable follow-up for errors the user can fix themselves
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            SetupError::InterpreterNotFound { .. } => Some(
                "Install Python 3 (https://www.python.org/downloads/ or your system \
                 package manager) and make sure it is on your PATH.",
            ),
            SetupError::PipNotFound { .. } => Some(
                "Restore pip with 'python -m ensurepip --upgrade', or install it \
                 through your system package manager.",
            ),
            _ => None,
        }
    }
}
