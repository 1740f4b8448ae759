//! Configuration for a diff run.

/// First codepoint of the Basic Multilingual Plane private use area.
pub const PRIVATE_USE_START: char = '\u{E000}';

/// Last codepoint of the Basic Multilingual Plane private use area.
pub const PRIVATE_USE_END: char = '\u{F8FF}';

/// The non-breaking space entity, pre-seeded by default.
pub const NBSP: &str = "&nbsp;";

/// Options for [`diff_html_with`](crate::diff_html_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    /// First placeholder codepoint. Must lie in the private use area.
    pub base: char,

    /// Entity literals collapsed to a single placeholder before diffing,
    /// in the order their placeholders are assigned.
    pub entities: Vec<String>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            base: PRIVATE_USE_START,
            entities: vec![NBSP.to_string()],
        }
    }
}

impl DiffOptions {
    /// Create default options: base `U+E000`, `&nbsp;` pre-seeded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first placeholder codepoint.
    pub fn base(mut self, base: char) -> Self {
        self.base = base;
        self
    }

    /// Pre-seed another entity literal, e.g. `&amp;`.
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.entities.push(entity.into());
        self
    }

    /// Do not pre-seed any entity, not even `&nbsp;`.
    pub fn no_entities(mut self) -> Self {
        self.entities.clear();
        self
    }
}
