//! touch — Create an empty file.

use crate::path;
use crate::session::Session;
use crate::vfs::NodeKind;

pub(crate) fn run(args: &[&str], session: &mut Session) -> String {
    let Some(arg) = args.first() else {
        return "touch: missing operand".to_string();
    };

    let resolved = path::resolve(arg, &session.cwd);
    // No content argument: an existing file is left untouched.
    match session.filesystem.create_node(&resolved, NodeKind::File, None) {
        Ok(_) => String::new(),
        Err(err) => format!("touch: {err}"),
    }
}
