//! User-facing console output and the end-of-run keypress pause

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::error::SetupError;

/// Announcement printed before the install starts
pub const INTRO_MESSAGE: &str = "Installing OPPM (Onrion Private Package Manager) system-wide...";

/// Printed after a clean install, with a first command to try
pub const SUCCESS_MESSAGE: &str = "Done! You can now use OPPM from any terminal.\n\nTry it out:\n  oppm install <package>";

/// Printed after a failed install. The PATH reminder covers the most
/// common cause on fresh machines.
pub const FAILURE_MESSAGE: &str =
    "Something went wrong.\nMake sure Python and pip are installed and on your PATH, then try again.";

const PAUSE_PROMPT: &str = "Press any key to continue...";

pub fn print_intro() {
    println!("{}", INTRO_MESSAGE);
}

pub fn print_success() {
    println!("\n{}", SUCCESS_MESSAGE);
}

pub fn print_failure() {
    println!("\n{}", FAILURE_MESSAGE);
}

/// Failure report for errors raised before pip ever ran, with the
/// specific reason and any remediation hint.
pub fn print_probe_failure(error: &SetupError) {
    println!("\n{}", FAILURE_MESSAGE);
    println!("\n  {}", error);
    if let Some(advice) = error.advice() {
        println!("  {}", advice);
    }
}

/// Blocks until the user presses a key, so a double-clicked run does not
/// close its window before the outcome can be read.
///
/// Without a real terminal (output piped, CI) raw mode fails; the pause
/// degrades to a line read on stdin. Ctrl-C during the wait reports
/// `Interrupted` instead of swallowing the keypress.
pub fn pause_for_keypress() -> Result<(), SetupError> {
    print!("\n{}", PAUSE_PROMPT);
    io::stdout().flush()?;

    if terminal::enable_raw_mode().is_err() {
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        return Ok(());
    }

    let outcome = wait_for_key();
    let _ = terminal::disable_raw_mode();
    println!();
    outcome
}

fn wait_for_key() -> Result<(), SetupError> {
    loop {
        if let Event::Key(key) = event::read()? {
            // Release and repeat events arrive on some platforms; only a
            // press counts as the user answering the prompt
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Err(SetupError::Interrupted);
            }
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_names_the_package_manager() {
        assert!(INTRO_MESSAGE.contains("Installing"));
        assert!(INTRO_MESSAGE.contains("OPPM"));
        assert!(INTRO_MESSAGE.contains("Onrion Private Package Manager"));
    }

    #[test]
    fn test_success_message_suggests_a_first_command() {
        assert!(SUCCESS_MESSAGE.contains("Done!"));
        assert!(SUCCESS_MESSAGE.contains("oppm install <package>"));
    }

    #[test]
    fn test_failure_message_mentions_path() {
        assert!(FAILURE_MESSAGE.contains("Something went wrong."));
        assert!(FAILURE_MESSAGE.contains("PATH"));
    }

    #[test]
    fn test_pause_prompt_is_the_classic_one() {
        assert_eq!(PAUSE_PROMPT, "Press any key to continue...");
    }
}
