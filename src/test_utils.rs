//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Populate a balanced tree: `width` subdirectories and `width` files per
    /// directory, `depth` levels deep.
    pub fn populate(&self, width: usize, depth: usize) {
        fill(self.dir.path(), width, depth);
    }
}

fn fill(dir: &Path, width: usize, depth: usize) {
    for i in 0..width {
        fs::write(dir.join(format!("file_{}.txt", i)), "x").expect("Failed to write file");
    }
    if depth == 0 {
        return;
    }
    for i in 0..width {
        let sub = dir.join(format!("dir_{}", i));
        fs::create_dir(&sub).expect("Failed to create dir");
        fill(&sub, width, depth - 1);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
