//! Path resolution: pure segment arithmetic, no tree access.
//!
//! `resolve` is total — malformed or degenerate input always yields *some*
//! absolute normalized path. Whether the path names anything is a separate
//! question answered by [`FilesystemTree::lookup`](crate::vfs::FilesystemTree::lookup).

/// Non-empty segments of a slash-separated path. Collapses repeated
/// slashes and ignores leading/trailing ones.
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Resolve `raw` against the working directory `cwd`.
///
/// - Empty input or `.` returns `cwd` unchanged.
/// - Absolute input (leading `/`) resolves from the root; relative input
///   resolves from `cwd`'s segments.
/// - `.` segments are dropped, `..` pops the previously accumulated
///   segment. Popping past the root is a no-op, never an error.
///
/// The result always starts with `/` and contains no empty or dot
/// segments.
pub fn resolve(raw: &str, cwd: &str) -> String {
    if raw.is_empty() || raw == "." {
        return cwd.to_string();
    }

    let mut stack: Vec<&str> = if raw.starts_with('/') {
        Vec::new()
    } else {
        segments(cwd).collect()
    };

    for segment in segments(raw) {
        match segment {
            "." => {}
            ".." => {
                stack.pop();
            }
            name => stack.push(name),
        }
    }

    if stack.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", stack.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_and_dot_keep_cwd() {
        assert_eq!(resolve("", "/home/user"), "/home/user");
        assert_eq!(resolve(".", "/home/user"), "/home/user");
        assert_eq!(resolve("", "/"), "/");
    }

    #[test]
    fn absolute_paths_ignore_cwd() {
        assert_eq!(resolve("/etc", "/home/user"), "/etc");
        assert_eq!(resolve("/", "/home/user"), "/");
    }

    #[test]
    fn relative_paths_stack_on_cwd() {
        assert_eq!(resolve("docs", "/home/user"), "/home/user/docs");
        assert_eq!(resolve("docs/notes.txt", "/home/user"), "/home/user/docs/notes.txt");
    }

    #[test]
    fn dot_dot_pops() {
        assert_eq!(resolve("..", "/home/user"), "/home");
        assert_eq!(resolve("../..", "/home/user"), "/");
        assert_eq!(resolve("../user/./docs", "/home/user"), "/home/user/docs");
    }

    #[test]
    fn dot_dot_past_root_is_a_no_op() {
        assert_eq!(resolve("../../../..", "/home"), "/");
        assert_eq!(resolve("../../etc", "/home"), "/etc");
        assert_eq!(resolve("/../etc", "/home/user"), "/etc");
    }

    #[test]
    fn repeated_slashes_collapse() {
        assert_eq!(resolve("//etc///sub", "/"), "/etc/sub");
        assert_eq!(resolve("a//b", "/home"), "/home/a/b");
    }

    #[test]
    fn dots_resolve_in_absolute_input_too() {
        assert_eq!(resolve("/a/../b", "/home/user"), "/b");
        assert_eq!(resolve("/a/./b", "/home/user"), "/a/b");
    }

    #[test]
    fn trailing_slash_is_dropped() {
        assert_eq!(resolve("docs/", "/home/user"), "/home/user/docs");
        assert_eq!(resolve("/etc/", "/"), "/etc");
    }

    proptest! {
        // For any cwd and any path of names, `.` and `..`, resolve is
        // total and always yields an absolute normalized path.
        #[test]
        fn resolve_is_total_and_normalized(
            cwd_segs in proptest::collection::vec("[a-z]{1,8}", 0..5),
            raw in r"(\.\.?|[a-z]{1,8})(/(\.\.?|[a-z]{1,8})){0,7}/?",
        ) {
            let cwd = if cwd_segs.is_empty() {
                "/".to_string()
            } else {
                format!("/{}", cwd_segs.join("/"))
            };

            let resolved = resolve(&raw, &cwd);
            prop_assert!(resolved.starts_with('/'));
            if resolved != "/" {
                prop_assert!(!resolved.ends_with('/'));
                for seg in segments(&resolved) {
                    prop_assert!(seg != "." && seg != "..");
                }
            }
        }

        // Resolving an already resolved path from the root is a fixpoint.
        #[test]
        fn resolve_is_idempotent(
            cwd_segs in proptest::collection::vec("[a-z]{1,8}", 0..5),
            raw in r"(\.\.?|[a-z]{1,8})(/(\.\.?|[a-z]{1,8})){0,7}",
        ) {
            let cwd = if cwd_segs.is_empty() {
                "/".to_string()
            } else {
                format!("/{}", cwd_segs.join("/"))
            };

            let resolved = resolve(&raw, &cwd);
            prop_assert_eq!(resolve(&resolved, "/"), resolved.clone());
        }
    }
}
