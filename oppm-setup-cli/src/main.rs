use std::path::PathBuf;

use oppm_setup_core::{SetupConfig, SetupEngine, SetupError};

mod cli;

/// Which closing message block a finished run prints
#[derive(Debug, Clone, Copy)]
enum Report<'a> {
    Success,
    InstallFailure,
    ProbeFailure(&'a SetupError),
}

/// Selects the closing block and the process exit code for an install
/// outcome. A nonzero child exit keeps its own code behind the failure
/// block; failures before pip ever started get the probe block instead.
fn report_for(outcome: &Result<(), SetupError>) -> (Report<'_>, i32) {
    match outcome {
        Ok(()) => (Report::Success, 0),
        Err(error @ SetupError::InstallFailed { .. }) => {
            (Report::InstallFailure, error.exit_code())
        }
        Err(error) => (Report::ProbeFailure(error), error.exit_code()),
    }
}

fn print_report(report: Report<'_>) {
    match report {
        Report::Success => oppm_setup_core::print_success(),
        Report::InstallFailure => {
            // pip already reported the details on the shared terminal
            oppm_setup_core::print_failure();
        }
        Report::ProbeFailure(error) => oppm_setup_core::print_probe_failure(error),
    }
}

/// Holds the window open before exit for interactive sessions; skipped
/// entirely with `--non-interactive`. A Ctrl-C at the prompt replaces
/// the exit code.
fn pause_before_exit(config: &SetupConfig, code: i32) -> i32 {
    if !config.interactive {
        return code;
    }
    match oppm_setup_core::pause_for_keypress() {
        Ok(()) => code,
        Err(error) => error.exit_code(),
    }
}

fn main() {
    let args = cli::parse_args();

    // Initialize logger with appropriate level based on verbose flag
    if std::env::var("RUST_LOG").is_err() {
        if args.verbose {
            std::env::set_var("RUST_LOG", "debug");
        } else {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    if args.check_deps {
        let code = match oppm_setup_core::check_toolchain() {
            Ok(_) => 0,
            Err(error) => error.exit_code(),
        };
        std::process::exit(code);
    }

    let config = SetupConfig {
        interactive: !args.non_interactive, // Inverted: pausing is the default, the flag opts out
        project_dir: args.directory.unwrap_or_else(|| PathBuf::from(".")),
    };
    let engine = SetupEngine::new(config);

    let outcome = engine.run_install();
    let (report, code) = report_for(&outcome);
    print_report(report);

    let code = pause_before_exit(engine.config(), code);
    std::process::exit(code);
}
