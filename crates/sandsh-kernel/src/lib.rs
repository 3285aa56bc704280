//! sandsh-kernel: the engine behind sandsh's simulated terminal.
//!
//! The kernel is a pure, synchronous reducer over session state:
//! [`execute`] takes a command line and a [`Session`] (a filesystem snapshot
//! plus a working directory) and returns the output text along with the next
//! session state. It performs no I/O, keeps no hidden state between calls,
//! and reports every failure as output text rather than an error.
//!
//! - [`vfs`] — the filesystem tree and its creation rules
//! - [`path`] — pure path resolution, no tree access
//! - [`interpreter`] — command parsing and dispatch
//! - [`session`] — session state, wire format, snapshot sanitization

pub mod interpreter;
pub mod path;
pub mod session;
pub mod vfs;

pub use interpreter::{ExecResult, execute};
pub use session::{HOME_DIR, Session};
pub use vfs::{CreateError, FilesystemTree, Node, NodeKind};
