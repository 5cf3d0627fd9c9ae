//! Path helpers for the walker: root normalization and child joining.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::error::Result;

const SEPARATOR: u8 = b'/';

/// Strip trailing `/` from the starting path, never shrinking it below one
/// character. `"foo//"` becomes `"foo"`, `"/"` and `"///"` become `"/"`.
pub fn normalize_root(raw: &OsStr) -> OsString {
    let len = trimmed_len(raw.as_encoded_bytes());
    from_prefix(raw, len)
}

fn trimmed_len(bytes: &[u8]) -> usize {
    let mut len = bytes.len();
    while len > 1 && bytes[len - 1] == SEPARATOR {
        len -= 1;
    }
    len
}

#[cfg(unix)]
fn from_prefix(raw: &OsStr, len: usize) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    OsStr::from_bytes(&raw.as_bytes()[..len]).to_os_string()
}

#[cfg(not(unix))]
fn from_prefix(raw: &OsStr, len: usize) -> OsString {
    // Only ASCII separators were dropped, so the lossy text has the same tail.
    let text = raw.to_string_lossy();
    let trim = raw.as_encoded_bytes().len() - len;
    OsString::from(&text[..text.len() - trim])
}

/// Join `parent` and `name` with exactly one separator between them.
///
/// No normalization happens: a parent of `"/"` yields `"//name"`. The buffer
/// is reserved up front so an allocation failure surfaces as
/// [`TreeError::OutOfMemory`](crate::TreeError::OutOfMemory).
pub fn join_child(parent: &OsStr, name: &OsStr) -> Result<PathBuf> {
    let mut joined = OsString::new();
    joined.try_reserve_exact(parent.len() + 1 + name.len())?;
    joined.push(parent);
    joined.push("/");
    joined.push(name);
    Ok(PathBuf::from(joined))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> OsString {
        normalize_root(OsStr::new(s))
    }

    #[test]
    fn test_normalize_strips_trailing_separators() {
        assert_eq!(norm("foo/"), "foo");
        assert_eq!(norm("foo///"), "foo");
        assert_eq!(norm("a/b/c/"), "a/b/c");
        assert_eq!(norm("/tmp/"), "/tmp");
    }

    #[test]
    fn test_normalize_keeps_single_character() {
        assert_eq!(norm("/"), "/");
        assert_eq!(norm("////"), "/");
        assert_eq!(norm("."), ".");
        assert_eq!(norm("./"), ".");
    }

    #[test]
    fn test_normalize_leaves_inner_separators() {
        assert_eq!(norm("a//b"), "a//b");
        assert_eq!(norm("foo"), "foo");
        assert_eq!(norm(""), "");
    }

    #[test]
    fn test_join_child() {
        let joined = join_child(OsStr::new("root"), OsStr::new("child")).unwrap();
        assert_eq!(joined, PathBuf::from("root/child"));

        let joined = join_child(OsStr::new("/"), OsStr::new("etc")).unwrap();
        assert_eq!(joined.as_os_str(), "//etc");
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_non_utf8() {
        use std::os::unix::ffi::OsStrExt;
        let raw = OsStr::from_bytes(b"caf\xe9//");
        assert_eq!(normalize_root(raw).as_bytes(), b"caf\xe9");
    }
}
