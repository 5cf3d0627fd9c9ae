//! Command-line argument scanning
//!
//! The surface is deliberately tiny: the last argument that does not start
//! with `-` names the directory, and any dash-prefixed argument (including a
//! bare `-` or `--`) asks for help.

use std::ffi::{OsStr, OsString};

pub const USAGE: &str = "dt -- print directory tree\nUsage: dt [dir] [--help]\n";

const DEFAULT_ROOT: &str = ".";

/// What the program was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Tree(OsString),
}

impl Invocation {
    /// Scan arguments (without the program name) in order. A dash-prefixed
    /// argument short-circuits to `Help` regardless of what precedes or
    /// follows it.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut root = OsString::from(DEFAULT_ROOT);
        for arg in args {
            if is_flag(&arg) {
                return Invocation::Help;
            }
            root = arg;
        }
        Invocation::Tree(root)
    }
}

fn is_flag(arg: &OsStr) -> bool {
    arg.as_encoded_bytes().first() == Some(&b'-')
}
