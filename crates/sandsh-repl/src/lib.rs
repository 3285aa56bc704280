//! sandsh REPL — the interactive driver around the kernel.
//!
//! The loop is intentionally thin: one engine call per submitted line,
//! print whatever comes back. All command semantics live in
//! `sandsh-kernel`; this crate only adds line editing, history, and
//! optional snapshot persistence.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use sandsh_kernel::Session;

/// REPL state: one session, advanced one line at a time.
pub struct Repl {
    session: Session,
}

impl Repl {
    /// A REPL over a fresh baseline session.
    pub fn new() -> Self {
        Self {
            session: Session::default(),
        }
    }

    /// A REPL over a recovered session.
    pub fn with_session(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Feed one submitted line to the engine. Returns the text to print,
    /// or `None` when the command was silent.
    pub fn process_line(&mut self, line: &str) -> Option<String> {
        let result = sandsh_kernel::execute(line, &self.session);
        self.session = result.session;
        (!result.output.is_empty()).then_some(result.output)
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a session snapshot from disk.
///
/// A missing or malformed file degrades to a fresh baseline session; this
/// mirrors the sanitizer's own never-fail contract.
pub fn load_session(path: &Path) -> Session {
    match fs::read_to_string(path) {
        Ok(text) => match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(value) => Session::sanitize(&value),
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "state file is not valid JSON, starting fresh");
                Session::default()
            }
        },
        Err(err) => {
            tracing::debug!(%err, path = %path.display(), "no readable state file, starting fresh");
            Session::default()
        }
    }
}

/// Write the session snapshot as pretty-printed JSON, creating parent
/// directories as needed.
pub fn save_session(path: &Path, session: &Session) -> Result<()> {
    let json = serde_json::to_string_pretty(session).context("serializing session snapshot")?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

/// Rustyline history location under the XDG data directory.
fn history_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.data_dir().join("sandsh").join("history.txt"))
}

/// Run the interactive loop until `exit` or EOF.
pub fn run(state_file: Option<PathBuf>) -> Result<()> {
    println!(
        "sandsh v{} — type 'help' for commands, 'exit' to leave.",
        env!("CARGO_PKG_VERSION")
    );

    let mut rl: Editor<(), DefaultHistory> = Editor::new().context("creating line editor")?;
    let history = history_path();
    if let Some(ref path) = history {
        let _ = rl.load_history(path);
    }

    let mut repl = match &state_file {
        Some(path) => Repl::with_session(load_session(path)),
        None => Repl::new(),
    };

    loop {
        let prompt = format!("user@sandsh:{}$ ", repl.session().cwd);
        match rl.readline(&prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                if line.trim() == "exit" {
                    break;
                }
                if let Some(output) = repl.process_line(&line) {
                    println!("{output}");
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        }
    }

    if let Some(ref path) = history {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let _ = rl.save_history(path);
    }
    if let Some(path) = state_file {
        save_session(&path, repl.session())?;
    }

    Ok(())
}
