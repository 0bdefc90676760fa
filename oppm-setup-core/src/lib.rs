use std::path::PathBuf;

// Internal modules (private)
mod console;
mod error;
mod installer;
mod toolchain;

// Re-export public types
pub use console::{
    pause_for_keypress, print_failure, print_probe_failure, print_success, FAILURE_MESSAGE,
    INTRO_MESSAGE, SUCCESS_MESSAGE,
};
pub use error::{SetupError, EXIT_INTERRUPTED, EXIT_TOOL_NOT_FOUND};
pub use installer::{InstallCommand, PROJECT_MANIFESTS};
pub use toolchain::{PythonToolchain, LAUNCHERS};

/// Configuration options for the setup engine
#[derive(Debug, Clone)]
pub struct SetupConfig {
    /// Pause for a keypress before the process exits
    pub interactive: bool,
    /// Directory holding the OPPM sources to install in editable mode
    pub project_dir: PathBuf,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            interactive: true, // Double-clicked runs need the window held open
            project_dir: PathBuf::from("."),
        }
    }
}

/// Main engine that probes the Python toolchain and drives the install
pub struct SetupEngine {
    config: SetupConfig,
}

impl SetupEngine {
    /// Create a new setup engine with the given configuration
    pub fn new(config: SetupConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SetupConfig {
        &self.config
    }

    /// Announce the install, probe the toolchain, and run the editable
    /// pip install wired to the current terminal.
    ///
    /// The install command is spawned at most once per call. Install
    /// output lands directly on the terminal; only the framing messages
    /// come from this process.
    pub fn run_install(&self) -> Result<(), SetupError> {
        console::print_intro();

        let toolchain = toolchain::probe()?;
        log::info!(
            "Using {} at {}",
            toolchain.python_version,
            toolchain.interpreter.display()
        );
        log::info!("Found {}", toolchain.pip_version);

        if !installer::has_project_manifest(&self.config.project_dir) {
            log::warn!(
                "No Python project manifest ({}) in {}; pip will likely refuse the editable install",
                PROJECT_MANIFESTS.join(", "),
                self.config.project_dir.display()
            );
        }

        let command = InstallCommand::editable_install(&toolchain, &self.config.project_dir);
        installer::run(&command)
    }
}

/// Probe the Python toolchain and print a status report
pub fn check_toolchain() -> Result<PythonToolchain, SetupError> {
    let outcome = toolchain::probe();
    toolchain::print_toolchain_status(&outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_interactive_in_cwd() {
        let config = SetupConfig::default();
        assert!(config.interactive);
        assert_eq!(config.project_dir, PathBuf::from("."));
    }

    #[test]
    fn test_engine_keeps_its_configuration() {
        let config = SetupConfig {
            interactive: false,
            project_dir: PathBuf::from("/srv/oppm"),
        };
        let engine = SetupEngine::new(config);
        assert!(!engine.config().interactive);
        assert_eq!(engine.config().project_dir, PathBuf::from("/srv/oppm"));
    }

    // Runs against whatever Python the host has; both outcomes are legal,
    // but each must be internally consistent
    #[test]
    fn test_check_toolchain_reports_a_consistent_outcome() {
        match check_toolchain() {
            Ok(toolchain) => {
                assert!(!toolchain.python_version.is_empty());
                assert!(!toolchain.pip_version.is_empty());
            }
            Err(error) => assert_ne!(error.exit_code(), 0),
        }
    }
}
