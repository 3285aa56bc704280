//! The command interpreter: a pure reducer over session state.
//!
//! [`execute`] is the whole contract: one command line in, output text and
//! the next session out. Parsing splits the line on runs of whitespace into
//! a command token and argument tokens — no quoting, no escaping, no
//! expansion (echo strips one pair of quotes around its own body, nothing
//! else does). Every failure is reported in the output string; nothing
//! here returns an error or panics on user input.

mod builtin;

use crate::session::Session;

/// The result of executing one command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecResult {
    /// Text to display; empty for silent commands like a successful `cd`.
    pub output: String,
    /// The session state after the command.
    pub session: Session,
}

/// Execute a single command line against a session snapshot.
///
/// The input session is cloned before any mutation, so a value the caller
/// still holds is never observably changed. An empty or whitespace-only
/// line is a no-op.
pub fn execute(line: &str, session: &Session) -> ExecResult {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = tokens.split_first() else {
        return ExecResult {
            output: String::new(),
            session: session.clone(),
        };
    };

    let mut session = session.clone();
    tracing::debug!(command, "dispatching");

    let output = match command {
        "help" => builtin::help::run(),
        "ls" => builtin::ls::run(args, &session),
        "pwd" => builtin::pwd::run(&session),
        "cd" => builtin::cd::run(args, &mut session),
        "cat" => builtin::cat::run(args, &session),
        "mkdir" => builtin::mkdir::run(args, &mut session),
        "touch" => builtin::touch::run(args, &mut session),
        "echo" => builtin::echo::run(args, &mut session),
        _ => format!("{command}: command not found"),
    };

    ExecResult { output, session }
}
