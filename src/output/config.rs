//! Output configuration types

const CONTINUATION_MARKER: &str = "|  ";
const BRANCH_MARKER: &str = "|- ";

/// Markers used to draw the indentation in front of each entry.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Printed once per intermediate level above the entry.
    pub continuation: &'static str,
    /// Printed once, immediately before the entry name.
    pub branch: &'static str,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            continuation: CONTINUATION_MARKER,
            branch: BRANCH_MARKER,
        }
    }
}
