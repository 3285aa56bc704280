//! cat — Print file contents.

use crate::path;
use crate::session::Session;
use crate::vfs::Node;

pub(crate) fn run(args: &[&str], session: &Session) -> String {
    let Some(arg) = args.first() else {
        return "cat: missing operand".to_string();
    };

    let resolved = path::resolve(arg, &session.cwd);
    match session.filesystem.lookup(&resolved) {
        Some(Node::File { content }) => content.clone(),
        // Directories deliberately read as missing, never listed.
        _ => format!("cat: {arg}: No such file or directory"),
    }
}
