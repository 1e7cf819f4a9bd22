// Rust guideline compliant 2026-02-06

//! Implementation of the `bizdir explore` command.
//!
//! An interactive session: each input line is a command that changes the
//! search, filters or page, or opens a business. The current page is
//! rendered after every change.

use crate::commands::open_directory;
use crate::terminal::{is_interactive, SCROLL_TO_TOP};
use crate::OutputFormatter;
use anyhow::Result;
use bizdir_app::session::SESSION_HELP;
use bizdir_app::{BrowseSession, Destination, SessionCommand};
use bizdir_core::Effect;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Prompt shown before each command on a terminal.
pub const PROMPT: &str = "bizdir> ";

/// How the session talks to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionIo {
    /// Show a prompt before each command.
    pub prompt: bool,
    /// Clear the screen when the result list jumps back to the top.
    pub scroll: bool,
}

/// Starts an interactive session on stdin and stdout.
///
/// # Errors
///
/// Returns an error if the directory cannot be opened or is locked, or if
/// reading input or writing output fails.
pub fn execute(root: Option<&Path>, json: bool, formatter: &dyn OutputFormatter) -> Result<()> {
    let directory = open_directory(root)?;
    let mut session = BrowseSession::new(directory.store, directory.config.title);

    let interactive = is_interactive();
    let session_io = SessionIo {
        prompt: interactive && !json,
        scroll: interactive && !json,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut session, stdin.lock(), stdout.lock(), formatter, session_io)
}

/// Runs a session until `quit` or end of input.
///
/// Invalid commands and rejected transitions are reported and the session
/// continues with its state unchanged.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut BrowseSession,
    input: R,
    mut output: W,
    formatter: &dyn OutputFormatter,
    session_io: SessionIo,
) -> Result<()> {
    writeln!(output, "{}", formatter.format_page(&session.page()))?;

    let mut lines = input.lines();
    loop {
        if session_io.prompt {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{}", formatter.format_app_error(&err))?;
                continue;
            }
        };

        let rendered = match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => formatter.format_status(SESSION_HELP),
            SessionCommand::Refresh => formatter.format_page(&session.page()),
            SessionCommand::Browse(action) => match session.apply(action) {
                Ok(effect) => {
                    if effect == Effect::ScrollToTop && session_io.scroll {
                        write!(output, "{}", SCROLL_TO_TOP)?;
                    }
                    formatter.format_page(&session.page())
                }
                Err(err) => formatter.format_app_error(&err),
            },
            SessionCommand::Show(id) => formatter.format_detail(&session.show(&id)),
            SessionCommand::Open(path) => match session.open(&path) {
                Ok(Destination::Directory(page)) => formatter.format_page(&page),
                Ok(Destination::Detail(outcome)) => formatter.format_detail(&outcome),
                Err(err) => formatter.format_app_error(&err),
            },
        };
        writeln!(output, "{}", rendered)?;
    }

    tracing::debug!(
        hits = session.cache().hits(),
        misses = session.cache().misses(),
        "session ended"
    );
    Ok(())
}
