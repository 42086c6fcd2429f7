//! The interactive command loop.
//!
//! Generic over its input and output streams so sessions can be driven from
//! test scripts as easily as from stdin/stdout.

use crate::commands::{CommandDispatcher, HELP_TEXT};
use anyhow::Context;
use std::io::{BufRead, Write};

/// Prompt shown before each command is read. Written without a newline and
/// flushed so it appears ahead of the cursor.
pub const PROMPT: &str = "Please, enter the valid command: ";

/// Farewell printed when the session ends on an exit word.
pub const FAREWELL: &str = "Good bye!";

/// Lines that end the session, compared case-insensitively after trimming.
pub const EXIT_WORDS: [&str; 3] = ["exit", "close", "good bye"];

/// Run the command loop until an exit word or end of input.
///
/// An exit word saves the snapshot and prints the farewell. End of input
/// just stops the loop: the book keeps whatever was last saved explicitly.
pub fn run(
    dispatcher: &mut CommandDispatcher,
    input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<()> {
    writeln!(output, "{}", HELP_TEXT).context("Failed to write help banner")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT).context("Failed to write prompt")?;
        output.flush().context("Failed to flush output")?;

        let line = match lines.next() {
            Some(line) => line.context("Failed to read input line")?,
            None => {
                tracing::info!("Input ended, leaving the session");
                break;
            }
        };
        let line = line.trim();

        if EXIT_WORDS.iter().any(|word| line.eq_ignore_ascii_case(word)) {
            dispatcher
                .save_snapshot()
                .context("Failed to save the address book on exit")?;
            writeln!(output, "{}", FAREWELL).context("Failed to write farewell")?;
            break;
        }

        let reply = dispatcher.dispatch(line);
        writeln!(output, "{}", reply).context("Failed to write reply")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressBook;
    use crate::storage::SnapshotStore;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    fn run_session_at(dir: &Path, script: &str) -> String {
        let store = SnapshotStore::new(dir.join("book.json"));
        let mut dispatcher = CommandDispatcher::new(AddressBook::new(), store);
        let mut output = Vec::new();
        run(&mut dispatcher, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn run_session(script: &str) -> (TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let rendered = run_session_at(dir.path(), script);
        (dir, rendered)
    }

    #[test]
    fn test_banner_then_prompt_then_farewell() {
        let (_dir, output) = run_session("exit\n");
        let expected = format!("{}\n{}{}\n", HELP_TEXT, PROMPT, FAREWELL);
        assert_eq!(output, expected);
    }

    #[test]
    fn test_replies_are_printed_per_line() {
        let (_dir, output) = run_session("hello\nshow all\nexit\n");
        assert!(output.contains("How can I help you?\n"));
        assert!(output.ends_with(&format!("{}{}\n", PROMPT, FAREWELL)));
    }

    #[test]
    fn test_exit_words_are_case_insensitive() {
        for script in ["EXIT\n", "Close\n", "Good Bye\n", "  exit  \n"] {
            let (_dir, output) = run_session(script);
            assert!(output.contains(FAREWELL), "script {:?} should end the session", script);
        }
    }

    #[test]
    fn test_exit_saves_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        run_session_at(dir.path(), "add alice 1234567890\nexit\n");
        assert!(dir.path().join("book.json").exists());
    }

    #[test]
    fn test_eof_ends_loop_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_session_at(dir.path(), "add alice 1234567890\n");
        assert!(!output.contains(FAREWELL));
        assert!(!dir.path().join("book.json").exists());
    }

    #[test]
    fn test_blank_line_is_an_unknown_command() {
        let (_dir, output) = run_session("\nexit\n");
        assert!(output.contains("Unknown command. Try again.\n"));
    }
}
