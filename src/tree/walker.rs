//! TreeWalker - depth-first, pre-order directory walk

use std::ffi::OsStr;
use std::fs::{self, DirEntry, ReadDir};
use std::io;
use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::{Result, SubtreeError, TreeError};

use super::config::WalkerConfig;
use super::path::{join_child, normalize_root};

/// Callback for walk output - receives each line as it is discovered.
pub trait TreeOutput {
    /// The normalized root path, always the first call.
    fn output_root(&mut self, root: &OsStr) -> io::Result<()>;

    /// One entry at `level` (1 for direct children of the root).
    fn output_node(&mut self, name: &OsStr, level: usize, is_dir: bool) -> io::Result<()>;

    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()>;
}

/// What a completed walk saw. Counts exclude the root itself.
#[derive(Debug, Default)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
    /// Directories that were listed but could not be expanded.
    pub suppressed: Vec<SubtreeError>,
}

/// Outcome of expanding one directory: the outer `Result` aborts the walk,
/// the inner one only skips the subtree.
type Visit = std::result::Result<(), SubtreeError>;

/// Tree walker that streams entries to a [`TreeOutput`] in the order the
/// filesystem yields them. Entries are not sorted.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk the tree under `root`.
    ///
    /// Fails only if `root` itself cannot be opened as a directory (nothing is
    /// output in that case), on allocation failure, or when the output sink
    /// errors. Unreadable subdirectories are reported in the summary.
    pub fn walk<O: TreeOutput>(&self, root: &OsStr, output: &mut O) -> Result<WalkSummary> {
        let normalized = normalize_root(root);
        let entries = fs::read_dir(&normalized).map_err(|source| TreeError::OpenRoot {
            path: PathBuf::from(root),
            source,
        })?;

        output.output_root(&normalized)?;

        let mut traversal = Traversal {
            config: &self.config,
            output,
            summary: WalkSummary::default(),
            ancestors: Vec::new(),
        };
        if self.config.follow_symlinks() {
            if let Ok(canonical) = fs::canonicalize(&normalized) {
                traversal.ancestors.push(canonical);
            }
        }
        traversal.iter_dir(&normalized, entries, 1)?;

        let Traversal {
            output, summary, ..
        } = traversal;
        output.finish(&summary)?;
        Ok(summary)
    }
}

/// State for one walk. Each directory frame owns its own `ReadDir` handle and
/// child path; both are dropped before the frame returns.
struct Traversal<'a, O: TreeOutput> {
    config: &'a WalkerConfig,
    output: &'a mut O,
    summary: WalkSummary,
    /// Canonical paths of the directories on the current branch, only kept
    /// when following symlinks.
    ancestors: Vec<PathBuf>,
}

impl<O: TreeOutput> Traversal<'_, O> {
    fn iter_dir(&mut self, dir: &OsStr, entries: ReadDir, level: usize) -> Result<()> {
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(source) => {
                    self.suppress(SubtreeError::Read {
                        path: PathBuf::from(dir),
                        source,
                    });
                    break;
                }
            };

            let name = entry.file_name();
            if should_skip(&name) {
                continue;
            }

            if self.is_directory(&entry) {
                if let Err(e) = self.visit_dir(dir, &name, level)? {
                    self.suppress(e);
                }
            } else {
                self.output.output_node(&name, level, false)?;
                self.summary.files += 1;
            }
        }
        Ok(())
    }

    /// Print a directory entry, then expand it one level deeper.
    fn visit_dir(&mut self, parent: &OsStr, name: &OsStr, level: usize) -> Result<Visit> {
        let child = join_child(parent, name)?;

        self.output.output_node(name, level, true)?;
        self.summary.directories += 1;

        if !self.config.follow_symlinks() {
            let entries = match fs::read_dir(&child) {
                Ok(e) => e,
                Err(source) => return Ok(Err(SubtreeError::Open { path: child, source })),
            };
            trace!(path = %child.display(), level, "descending");
            self.iter_dir(child.as_os_str(), entries, level + 1)?;
            return Ok(Ok(()));
        }

        let canonical = match fs::canonicalize(&child) {
            Ok(c) => c,
            Err(source) => return Ok(Err(SubtreeError::Open { path: child, source })),
        };
        if self.ancestors.contains(&canonical) {
            return Ok(Err(SubtreeError::Cycle { path: child }));
        }
        let entries = match fs::read_dir(&child) {
            Ok(e) => e,
            Err(source) => return Ok(Err(SubtreeError::Open { path: child, source })),
        };

        trace!(path = %child.display(), level, "descending");
        self.ancestors.push(canonical);
        let walked = self.iter_dir(child.as_os_str(), entries, level + 1);
        self.ancestors.pop();
        walked?;
        Ok(Ok(()))
    }

    /// Classify an entry without following links unless configured to.
    /// Entries whose type cannot be determined are treated as leaves.
    fn is_directory(&self, entry: &DirEntry) -> bool {
        match entry.file_type() {
            Ok(ft) if ft.is_dir() => true,
            Ok(ft) if ft.is_symlink() && self.config.follow_symlinks() => {
                fs::metadata(entry.path()).is_ok_and(|m| m.is_dir())
            }
            _ => false,
        }
    }

    fn suppress(&mut self, error: SubtreeError) {
        debug!(%error, "subtree not expanded");
        self.summary.suppressed.push(error);
    }
}

fn should_skip(name: &OsStr) -> bool {
    name == "." || name == ".."
}
