//! Configuration types for the tree walker

/// How entries that are symbolic links are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymlinkPolicy {
    /// Print the link as a leaf and never descend through it.
    #[default]
    Leaf,
    /// Descend into links that resolve to directories. A directory already
    /// open further up the current branch is printed but not expanded again.
    Follow,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    pub symlinks: SymlinkPolicy,
}

impl WalkerConfig {
    pub fn follow_symlinks(&self) -> bool {
        self.symlinks == SymlinkPolicy::Follow
    }
}
