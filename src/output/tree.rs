//! Plain-text tree formatter
//!
//! Writes one line per entry: the indentation prefix followed by the name.
//!
//! ```text
//! /r
//! |- x
//! |  |- y.txt
//! ```

use std::ffi::OsStr;
use std::io::{self, Write};

use crate::tree::{TreeOutput, WalkSummary};

use super::config::OutputConfig;

/// Render the prefix for an entry at `level`.
///
/// Level 0 is the root and gets no prefix. Level N gets N-1 continuation
/// markers followed by one branch marker.
pub fn render_indent(config: &OutputConfig, level: usize) -> String {
    if level == 0 {
        return String::new();
    }
    let mut prefix = config.continuation.repeat(level - 1);
    prefix.push_str(config.branch);
    prefix
}

/// Tree formatter that writes lines to any `Write` sink as the walk
/// produces them.
pub struct TreeFormatter<W: Write> {
    config: OutputConfig,
    writer: W,
}

impl<W: Write> TreeFormatter<W> {
    pub fn new(writer: W, config: OutputConfig) -> Self {
        Self { config, writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_name_line(&mut self, name: &OsStr) -> io::Result<()> {
        write_name(&mut self.writer, name)?;
        self.writer.write_all(b"\n")
    }
}

impl<W: Write> TreeOutput for TreeFormatter<W> {
    fn output_root(&mut self, root: &OsStr) -> io::Result<()> {
        self.write_name_line(root)
    }

    fn output_node(&mut self, name: &OsStr, level: usize, _is_dir: bool) -> io::Result<()> {
        let prefix = render_indent(&self.config, level);
        self.writer.write_all(prefix.as_bytes())?;
        self.write_name_line(name)
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(unix)]
fn write_name<W: Write>(writer: &mut W, name: &OsStr) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    writer.write_all(name.as_bytes())
}

#[cfg(not(unix))]
fn write_name<W: Write>(writer: &mut W, name: &OsStr) -> io::Result<()> {
    writer.write_all(name.to_string_lossy().as_bytes())
}
