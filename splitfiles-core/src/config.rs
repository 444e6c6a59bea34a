//! Configuration types for a split run

use crate::{sink::OverwritePolicy, splitter::PatternKind};

/// Everything needed to split one stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Text (or regular expression) separating chunks
    pub pattern: String,
    /// How `pattern` is interpreted
    pub pattern_kind: PatternKind,
    /// Filename template with at most one run of `?`
    pub template: String,
    /// Behaviour when a generated filename already exists
    pub overwrite: OverwritePolicy,
    /// Report line counts after each filename
    pub verbose: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            pattern_kind: PatternKind::Literal,
            template: "?".to_string(),
            overwrite: OverwritePolicy::Skip,
            verbose: false,
        }
    }
}

impl SplitConfig {
    /// Create a literal-pattern configuration
    pub fn new<P: Into<String>, T: Into<String>>(pattern: P, template: T) -> Self {
        Self {
            pattern: pattern.into(),
            template: template.into(),
            ..Self::default()
        }
    }

    /// Interpret the pattern as a regular expression
    pub fn regex(mut self, enabled: bool) -> Self {
        self.pattern_kind = if enabled {
            PatternKind::Regex
        } else {
            PatternKind::Literal
        };
        self
    }

    /// Overwrite existing files instead of skipping them
    pub fn force(mut self, enabled: bool) -> Self {
        self.overwrite = OverwritePolicy::from(enabled);
        self
    }

    /// Report line counts
    pub fn verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }
}
