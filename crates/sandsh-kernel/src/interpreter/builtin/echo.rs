//! echo — Print text, optionally redirected into a file.
//!
//! Grammar: `echo [body…] [> target | >> target]`. Only a trailing
//! operator/target pair counts as redirection; a `>` anywhere else is
//! ordinary body text. One pair of wrapping quotes (matching at both ends)
//! is stripped from the body.

use crate::path;
use crate::session::Session;
use crate::vfs::{Node, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Redirect {
    Overwrite,
    Append,
}

pub(crate) fn run(args: &[&str], session: &mut Session) -> String {
    let (body_tokens, redirect) = match args {
        [body @ .., op, target] if *op == ">" => (body, Some((Redirect::Overwrite, *target))),
        [body @ .., op, target] if *op == ">>" => (body, Some((Redirect::Append, *target))),
        _ => (args, None),
    };

    let body = strip_quotes(&body_tokens.join(" ")).to_string();

    let Some((mode, target)) = redirect else {
        return body;
    };

    let resolved = path::resolve(target, &session.cwd);
    let content = match session.filesystem.lookup(&resolved) {
        Some(Node::Directory { .. }) => {
            return format!("echo: cannot write to '{target}': Is a directory");
        }
        Some(Node::File { content }) if mode == Redirect::Append && !content.is_empty() => {
            format!("{content}\n{body}")
        }
        // Overwrite, or append onto empty/nonexistent: just the body.
        _ => body,
    };

    match session
        .filesystem
        .create_node(&resolved, NodeKind::File, Some(content))
    {
        Ok(_) => String::new(),
        Err(err) => format!("echo: {err}"),
    }
}

/// Strip one pair of wrapping quotes when both ends match.
fn strip_quotes(body: &str) -> &str {
    for quote in ['"', '\''] {
        if body.len() >= 2 && body.starts_with(quote) && body.ends_with(quote) {
            return &body[1..body.len() - 1];
        }
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_content<'a>(session: &'a Session, path: &str) -> &'a str {
        match session.filesystem.lookup(path) {
            Some(Node::File { content }) => content,
            other => panic!("expected file at {path}, got {other:?}"),
        }
    }

    #[test]
    fn echo_joins_tokens_with_single_spaces() {
        let mut session = Session::default();
        assert_eq!(run(&["hello", "world"], &mut session), "hello world");
    }

    #[test]
    fn echo_strips_matching_quotes() {
        let mut session = Session::default();
        assert_eq!(run(&["\"hello", "world\""], &mut session), "hello world");
        assert_eq!(run(&["'quoted'"], &mut session), "quoted");
        // Mismatched ends stay as-is.
        assert_eq!(run(&["\"hello'"], &mut session), "\"hello'");
        assert_eq!(run(&["\""], &mut session), "\"");
    }

    #[test]
    fn echo_without_args_prints_nothing() {
        let mut session = Session::default();
        assert_eq!(run(&[], &mut session), "");
    }

    #[test]
    fn overwrite_creates_the_file_silently() {
        let mut session = Session::default();
        assert_eq!(run(&["\"line1\"", ">", "f.txt"], &mut session), "");
        assert_eq!(file_content(&session, "/home/user/f.txt"), "line1");
    }

    #[test]
    fn append_joins_with_newline() {
        let mut session = Session::default();
        assert_eq!(run(&["line1", ">", "f.txt"], &mut session), "");
        assert_eq!(run(&["line2", ">>", "f.txt"], &mut session), "");
        assert_eq!(file_content(&session, "/home/user/f.txt"), "line1\nline2");
    }

    #[test]
    fn append_to_missing_file_is_just_the_body() {
        let mut session = Session::default();
        assert_eq!(run(&["solo", ">>", "new.txt"], &mut session), "");
        assert_eq!(file_content(&session, "/home/user/new.txt"), "solo");
    }

    #[test]
    fn overwrite_replaces_content() {
        let mut session = Session::default();
        run(&["old", ">", "f.txt"], &mut session);
        run(&["new", ">", "f.txt"], &mut session);
        assert_eq!(file_content(&session, "/home/user/f.txt"), "new");
    }

    #[test]
    fn redirect_to_directory_fails() {
        let mut session = Session::default();
        assert_eq!(
            run(&["text", ">", "/etc"], &mut session),
            "echo: cannot write to '/etc': Is a directory"
        );
    }

    #[test]
    fn redirect_into_missing_parent_fails() {
        let mut session = Session::default();
        assert_eq!(
            run(&["text", ">", "/tmp/f.txt"], &mut session),
            "echo: 'tmp': no such directory"
        );
    }

    #[test]
    fn only_the_trailing_pair_is_redirection() {
        let mut session = Session::default();
        assert_eq!(run(&["a", ">", "b", ">", "c.txt"], &mut session), "");
        assert_eq!(file_content(&session, "/home/user/c.txt"), "a > b");
    }

    #[test]
    fn dangling_operator_is_body_text() {
        let mut session = Session::default();
        assert_eq!(run(&["hi", ">"], &mut session), "hi >");
    }

    #[test]
    fn empty_body_overwrite_writes_empty_file() {
        let mut session = Session::default();
        assert_eq!(run(&[">", "empty.txt"], &mut session), "");
        assert_eq!(file_content(&session, "/home/user/empty.txt"), "");
    }
}
