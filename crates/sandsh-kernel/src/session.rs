//! Session state: the filesystem/cwd pair and its sanitization.
//!
//! A [`Session`] is everything the engine needs between two commands. It
//! serializes to the snapshot wire format, and any snapshot arriving from
//! outside goes through [`Session::sanitize`], which never fails:
//! unrecoverable input degrades to the baseline session.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::path;
use crate::vfs::{FilesystemTree, Node};

/// Default working directory for new and recovered sessions.
pub const HOME_DIR: &str = "/home/user";

/// One terminal session's complete engine-side state.
///
/// Invariant: `cwd` is a resolved path naming an existing directory in
/// `filesystem`. The interpreter and the sanitizer both preserve it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub filesystem: FilesystemTree,
    pub cwd: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            filesystem: FilesystemTree::baseline(),
            cwd: HOME_DIR.to_string(),
        }
    }
}

impl Session {
    /// Recover a session from an untrusted snapshot value.
    ///
    /// The filesystem is rebuilt by a validating deep copy of the wire
    /// tree; any node that matches neither known shape discards the whole
    /// snapshot in favor of the baseline. The returned session shares no
    /// structure with the input.
    pub fn sanitize(raw: &JsonValue) -> Session {
        let JsonValue::Object(fields) = raw else {
            tracing::warn!("session snapshot is not an object, seeding baseline session");
            return Session::default();
        };

        let filesystem = match fields.get("filesystem").and_then(copy_filesystem) {
            Some(tree) => tree,
            None => {
                tracing::warn!("snapshot filesystem missing or malformed, seeding baseline");
                FilesystemTree::baseline()
            }
        };

        let cwd = match fields.get("cwd") {
            Some(JsonValue::String(raw_cwd)) => path::resolve(raw_cwd, HOME_DIR),
            _ => HOME_DIR.to_string(),
        };

        Self::with_valid_cwd(filesystem, cwd)
    }

    /// Re-establish the cwd invariant on a recovered pair.
    fn with_valid_cwd(filesystem: FilesystemTree, cwd: String) -> Session {
        if filesystem.lookup(&cwd).is_some_and(Node::is_dir) {
            return Session { filesystem, cwd };
        }
        tracing::warn!(%cwd, "recovered cwd is not a directory, resetting to home");
        if filesystem.lookup(HOME_DIR).is_some_and(Node::is_dir) {
            return Session {
                filesystem,
                cwd: HOME_DIR.to_string(),
            };
        }
        // A tree without a home directory cannot host a session at all.
        Session::default()
    }
}

/// Validating copy of the wire filesystem: a map with a directory root
/// under `/`.
fn copy_filesystem(raw: &JsonValue) -> Option<FilesystemTree> {
    let JsonValue::Object(entries) = raw else {
        return None;
    };
    let root = copy_node(entries.get("/")?)?;
    root.is_dir().then(|| FilesystemTree::from_root(root))
}

/// Validating deep copy of one wire node.
///
/// Returns `None` on any shape mismatch anywhere in the subtree. Depth is
/// bounded by `serde_json`'s own parser recursion limit, so hostile input
/// cannot recurse unboundedly here.
fn copy_node(raw: &JsonValue) -> Option<Node> {
    let JsonValue::Object(fields) = raw else {
        return None;
    };
    match fields.get("type")?.as_str()? {
        "dir" => {
            let JsonValue::Object(raw_children) = fields.get("children")? else {
                return None;
            };
            let mut children = HashMap::with_capacity(raw_children.len());
            for (name, child) in raw_children {
                children.insert(name.clone(), copy_node(child)?);
            }
            Some(Node::Directory { children })
        }
        "file" => Some(Node::file(fields.get("content")?.as_str()?)),
        _ => None,
    }
}
