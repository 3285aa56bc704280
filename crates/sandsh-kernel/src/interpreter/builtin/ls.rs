//! ls — List directory contents.

use crate::path;
use crate::session::Session;
use crate::vfs::Node;

pub(crate) fn run(args: &[&str], session: &Session) -> String {
    let arg = args.first().copied();
    let resolved = path::resolve(arg.unwrap_or(""), &session.cwd);

    match session.filesystem.lookup(&resolved) {
        Some(Node::Directory { children }) => {
            let mut names: Vec<&str> = children.keys().map(String::as_str).collect();
            names.sort_unstable();
            names.join("\n")
        }
        // Listing a file echoes the path exactly as the caller wrote it.
        Some(Node::File { .. }) => arg.unwrap_or(".").to_string(),
        None => format!(
            "ls: cannot access '{}': No such file or directory",
            arg.unwrap_or(".")
        ),
    }
}
