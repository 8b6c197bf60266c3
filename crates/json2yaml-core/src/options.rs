//! Resource limits for the JSON reader.

/// Default maximum container nesting depth, the same bound Go's
/// `encoding/json` scanner enforces.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Reader configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of arrays/objects open at once.
    pub max_depth: usize,
}

impl Options {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
