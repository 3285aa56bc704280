//! cd — Change the working directory.

use crate::path;
use crate::session::{HOME_DIR, Session};
use crate::vfs::Node;

pub(crate) fn run(args: &[&str], session: &mut Session) -> String {
    let arg = args.first().copied();
    let target = path::resolve(arg.unwrap_or(HOME_DIR), &session.cwd);

    match session.filesystem.lookup(&target) {
        Some(Node::Directory { .. }) => {
            session.cwd = target;
            String::new()
        }
        // Missing targets and files read the same to cd.
        _ => format!(
            "cd: no such file or directory: {}",
            arg.unwrap_or(HOME_DIR)
        ),
    }
}
