//! pwd — Print the working directory.

use crate::session::Session;

pub(crate) fn run(session: &Session) -> String {
    session.cwd.clone()
}
