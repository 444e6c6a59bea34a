//! Sequential filename generation from a numbered template
//!
//! A template contains at most one run of `?` characters. The run is replaced
//! by a zero-padded index whose minimum width equals the length of the run.

use crate::error::ConfigError;

/// Character marking the numeric field in a template
pub const PLACEHOLDER: char = '?';

/// Appended to templates that carry no placeholder run
const IMPLICIT_SUFFIX: &str = ".?";

/// Template compiled into a fixed prefix, padded field and suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFormat {
    prefix: String,
    width: usize,
    suffix: String,
}

impl CompiledFormat {
    /// Compile a template
    ///
    /// A template without placeholders is compiled as if `.?` had been
    /// appended to it.
    pub fn compile(template: &str) -> Result<Self, ConfigError> {
        let runs = placeholder_runs(template);
        match runs.as_slice() {
            [] => Self::compile(&format!("{template}{IMPLICIT_SUFFIX}")),
            [(start, end)] => Ok(Self {
                prefix: template[..*start].to_string(),
                width: end - start,
                suffix: template[*end..].to_string(),
            }),
            _ => Err(ConfigError::MultiplePlaceholderGroups {
                template: template.to_string(),
            }),
        }
    }

    /// Minimum number of digits in the rendered index
    pub fn width(&self) -> usize {
        self.width
    }

    /// Render the template for `index`
    ///
    /// Indices wider than the placeholder run are never truncated.
    pub fn render(&self, index: u64) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            index,
            self.suffix,
            width = self.width
        )
    }
}

/// Byte ranges of every run of consecutive placeholder characters
fn placeholder_runs(template: &str) -> Vec<(usize, usize)> {
    let mut runs: Vec<(usize, usize)> = Vec::new();

    for (pos, _) in template.match_indices(PLACEHOLDER) {
        match runs.last_mut() {
            Some((_, end)) if *end == pos => *end = pos + PLACEHOLDER.len_utf8(),
            _ => runs.push((pos, pos + PLACEHOLDER.len_utf8())),
        }
    }

    runs
}

/// Infinite stream of filenames rendered from one template
///
/// The cursor starts at 0 and is advanced before every render, so the first
/// filename uses index 1.
#[derive(Debug, Clone)]
pub struct FilenameSequencer {
    format: CompiledFormat,
    cursor: u64,
}

impl FilenameSequencer {
    /// Create a sequencer for `template`
    pub fn new(template: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            format: CompiledFormat::compile(template)?,
            cursor: 0,
        })
    }

    /// Advance the cursor and render the next filename
    pub fn next_filename(&mut self) -> String {
        self.cursor += 1;
        self.format.render(self.cursor)
    }

    /// Index used by the most recently generated filename (0 before the first)
    pub fn current_index(&self) -> u64 {
        self.cursor
    }
}

impl Iterator for FilenameSequencer {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_filename())
    }
}
