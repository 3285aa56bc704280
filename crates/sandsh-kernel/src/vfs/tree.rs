//! The filesystem tree: lookup, node creation, baseline seeding.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use super::node::{Node, NodeKind};
use crate::path::segments;

/// Content of `/home/user/welcome.txt` in a fresh session.
pub(crate) const WELCOME_TEXT: &str =
    "Welcome to sandsh! This terminal is a sandbox — nothing here touches a real disk.\n\
     Type 'help' to see the available commands.";

/// Why `create_node` refused.
///
/// Commands prefix the rendered reason with their own name, e.g.
/// `mkdir: '/tmp': no such directory`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateError {
    /// The root directory always exists and can never be (re)created.
    #[error("cannot create root directory '/'")]
    RootForbidden,
    /// An intermediate path segment does not exist. Ancestors are never
    /// auto-created.
    #[error("'{segment}': no such directory")]
    MissingAncestor { segment: String },
    /// An intermediate path segment names a file.
    #[error("'{segment}': not a directory")]
    AncestorNotDirectory { segment: String },
    /// A directory was requested but a file already sits at the path.
    #[error("'{path}': File exists")]
    ExistsAsFile { path: String },
    /// A file was requested but a directory already sits at the path.
    #[error("'{path}': Is a directory")]
    ExistsAsDirectory { path: String },
}

/// The session filesystem: a single directory root owning the whole tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FilesystemTree {
    root: Node,
}

impl FilesystemTree {
    /// A tree holding nothing but the root directory.
    pub fn empty() -> Self {
        Self { root: Node::dir() }
    }

    /// The baseline layout seeded into every new session: `/home/user`
    /// with a welcome file, plus empty `/bin` and `/etc`.
    pub fn baseline() -> Self {
        let user = HashMap::from([("welcome.txt".to_string(), Node::file(WELCOME_TEXT))]);
        let home = HashMap::from([("user".to_string(), Node::Directory { children: user })]);
        let top = HashMap::from([
            ("home".to_string(), Node::Directory { children: home }),
            ("bin".to_string(), Node::dir()),
            ("etc".to_string(), Node::dir()),
        ]);
        Self {
            root: Node::Directory { children: top },
        }
    }

    pub(crate) fn from_root(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Walk a resolved path from the root.
    ///
    /// Returns `None` when any segment is missing or an intermediate node
    /// is a file; callers decide how to word that. `/` resolves to the
    /// root itself.
    pub fn lookup(&self, path: &str) -> Option<&Node> {
        let mut node = &self.root;
        for segment in segments(path) {
            match node {
                Node::Directory { children } => node = children.get(segment)?,
                Node::File { .. } => return None,
            }
        }
        Some(node)
    }

    /// Create a node of `kind` at a resolved path.
    ///
    /// Checks, in order: the path must not be the root; every ancestor must
    /// exist and be a directory (no `mkdir -p`); an existing node at the
    /// final segment must match `kind`. An existing file is overwritten
    /// only when `content` is supplied; bare creation over an existing
    /// matching node returns it unchanged.
    pub fn create_node(
        &mut self,
        path: &str,
        kind: NodeKind,
        content: Option<String>,
    ) -> Result<&mut Node, CreateError> {
        let segs: Vec<&str> = segments(path).collect();
        let Some((name, ancestors)) = segs.split_last() else {
            return Err(CreateError::RootForbidden);
        };

        let mut children = self.root_children_mut();
        for segment in ancestors {
            let child = children
                .get_mut(*segment)
                .ok_or_else(|| CreateError::MissingAncestor {
                    segment: (*segment).to_string(),
                })?;
            match child {
                Node::Directory { children: next } => children = next,
                Node::File { .. } => {
                    return Err(CreateError::AncestorNotDirectory {
                        segment: (*segment).to_string(),
                    });
                }
            }
        }

        match children.entry((*name).to_string()) {
            Entry::Occupied(entry) => {
                let existing = entry.into_mut();
                if existing.kind() != kind {
                    return Err(match existing.kind() {
                        NodeKind::Directory => CreateError::ExistsAsDirectory {
                            path: path.to_string(),
                        },
                        NodeKind::File => CreateError::ExistsAsFile {
                            path: path.to_string(),
                        },
                    });
                }
                if let (Node::File { content: existing_content }, Some(new_content)) =
                    (&mut *existing, content)
                {
                    *existing_content = new_content;
                }
                Ok(existing)
            }
            Entry::Vacant(entry) => {
                let node = match kind {
                    NodeKind::Directory => Node::dir(),
                    NodeKind::File => Node::file(content.unwrap_or_default()),
                };
                Ok(entry.insert(node))
            }
        }
    }

    fn root_children_mut(&mut self) -> &mut HashMap<String, Node> {
        match &mut self.root {
            Node::Directory { children } => children,
            // Every constructor and deserializer produces a directory root,
            // and create_node rejects the root path itself.
            Node::File { .. } => unreachable!("root node is always a directory"),
        }
    }
}

/// Wire shape: a map with the root node under the single key `/`.
impl Serialize for FilesystemTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("/", &self.root)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for FilesystemTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut entries = HashMap::<String, Node>::deserialize(deserializer)?;
        let root = entries
            .remove("/")
            .ok_or_else(|| D::Error::custom("filesystem snapshot has no root entry '/'"))?;
        if !root.is_dir() {
            return Err(D::Error::custom("filesystem root entry is not a directory"));
        }
        Ok(Self { root })
    }
}
