/// Deepest container nesting accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs for a single parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum container nesting. The root object is depth 1.
    pub max_depth: usize,
    /// Name shown in diagnostics.
    pub source_name: String,
    /// Fail when anything but whitespace follows the root object. Off by
    /// default: trailing input is ignored.
    pub reject_trailing_content: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            source_name: "input.json".to_string(),
            reject_trailing_content: false,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    #[must_use]
    pub fn with_reject_trailing_content(mut self, reject: bool) -> Self {
        self.reject_trailing_content = reject;
        self
    }
}
