//! The virtual filesystem: an owned tree of directories and files.
//!
//! Every session holds exactly one [`FilesystemTree`]. The tree is a strict
//! ownership hierarchy — a directory exclusively owns its children, there
//! are no back-references and no cycles — so `Clone` is a deep copy and two
//! sessions can never alias each other's state.

mod node;
mod tree;

pub use node::{Node, NodeKind};
pub use tree::{CreateError, FilesystemTree};
