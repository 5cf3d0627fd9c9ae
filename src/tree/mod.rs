//! Directory tree walking logic
//!
//! `TreeWalker` visits the tree depth-first and pre-order, handing each entry
//! to a `TreeOutput` as soon as it is read. Memory use is O(depth).

mod config;
mod path;
mod walker;

pub use config::{SymlinkPolicy, WalkerConfig};
pub use path::{join_child, normalize_root};
pub use walker::{TreeOutput, TreeWalker, WalkSummary};
