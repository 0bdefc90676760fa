use clap::Parser;
use std::path::PathBuf;

/// Bootstrap installer for the OPPM command-line tool
#[derive(Parser, Debug)]
#[command(name = "oppm-setup")]
#[command(author = "Orion Hash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Installs OPPM system-wide with an editable pip install", long_about = None)]
pub struct Args {
    /// Directory containing the OPPM sources (defaults to the current directory)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Exit without waiting for a keypress (for scripts and CI)
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Check the Python toolchain without installing anything
    #[arg(long = "check-deps")]
    pub check_deps: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Parses command-line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_interactive_install_in_cwd() {
        let args = Args::try_parse_from(["oppm-setup"]).unwrap();
        assert!(args.directory.is_none());
        assert!(!args.non_interactive);
        assert!(!args.check_deps);
        assert!(!args.verbose);
    }

    #[test]
    fn test_accepts_a_project_directory() {
        let args = Args::try_parse_from(["oppm-setup", "/srv/oppm"]).unwrap();
        assert_eq!(args.directory, Some(PathBuf::from("/srv/oppm")));
    }

    #[test]
    fn test_flags_parse_together() {
        let args =
            Args::try_parse_from(["oppm-setup", "--non-interactive", "--verbose", "."]).unwrap();
        assert!(args.non_interactive);
        assert!(args.verbose);
        assert_eq!(args.directory, Some(PathBuf::from(".")));
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Args::try_parse_from(["oppm-setup", "--frobnicate"]).is_err());
    }
}
