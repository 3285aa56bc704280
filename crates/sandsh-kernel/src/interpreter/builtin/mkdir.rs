//! mkdir — Create a directory.

use crate::path;
use crate::session::Session;
use crate::vfs::NodeKind;

pub(crate) fn run(args: &[&str], session: &mut Session) -> String {
    let Some(arg) = args.first() else {
        return "mkdir: missing operand".to_string();
    };

    let resolved = path::resolve(arg, &session.cwd);
    match session
        .filesystem
        .create_node(&resolved, NodeKind::Directory, None)
    {
        Ok(_) => String::new(),
        Err(err) => format!("mkdir: {err}"),
    }
}
