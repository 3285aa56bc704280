//! Filesystem node model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The kind of a node, for creation requests and error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// A single entry in the filesystem tree.
///
/// Serializes to the snapshot wire shape:
/// `{"type": "dir", "children": {…}}` or `{"type": "file", "content": "…"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    #[serde(rename = "dir")]
    Directory { children: HashMap<String, Node> },
    #[serde(rename = "file")]
    File { content: String },
}

impl Node {
    /// An empty directory.
    pub fn dir() -> Self {
        Node::Directory {
            children: HashMap::new(),
        }
    }

    /// A file with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        Node::File {
            content: content.into(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Directory { .. } => NodeKind::Directory,
            Node::File { .. } => NodeKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }
}
