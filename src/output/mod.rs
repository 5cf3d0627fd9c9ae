//! Output formatting for directory trees
//!
//! `TreeFormatter` implements [`TreeOutput`](crate::tree::TreeOutput) and
//! renders the walk as indented plain text.

mod config;
mod tree;

pub use config::OutputConfig;
pub use tree::{TreeFormatter, render_indent};
