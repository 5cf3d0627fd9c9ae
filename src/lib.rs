//! dt - print a directory tree

pub mod cli;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use cli::{Invocation, USAGE};
pub use error::{SubtreeError, TreeError};
pub use output::{OutputConfig, TreeFormatter};
pub use tree::{SymlinkPolicy, TreeOutput, TreeWalker, WalkSummary, WalkerConfig};
