//! What a diff run hands back: the HTML, plus what went wrong along the way.

use std::fmt::{self, Display};

/// Which of the two inputs something refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The original fragment.
    Left,
    /// The revised fragment.
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// A non-fatal problem observed during a diff run.
///
/// Every diagnostic is also logged at warn level when the `tracing` feature
/// is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A `<` with no closing `>`. Everything from the `<` on was left out
    /// of the comparison.
    UnterminatedTag {
        /// Input containing the dangling `<`.
        side: Side,
        /// Byte offset of the dangling `<`.
        offset: usize,
        /// Number of bytes dropped from the comparison.
        dropped: usize,
    },

    /// A placeholder with no table entry was found while decoding and was
    /// emitted as-is.
    UnmappedPlaceholder {
        /// The raw placeholder.
        ch: char,
    },

    /// The input already contained a character from the placeholder range.
    /// It is compared as-is, but may be mistaken for markup: if the table
    /// assigns the same codepoint to a tag or entity, the character is
    /// decoded as that token, so the output can contain markup neither input
    /// had at that position.
    ReservedCodepoint {
        /// Input containing the character.
        side: Side,
        /// Byte offset of the character.
        offset: usize,
        /// The character itself.
        ch: char,
    },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnterminatedTag {
                side,
                offset,
                dropped,
            } => write!(
                f,
                "{side} input: unterminated tag at byte {offset}, {dropped} bytes left out of the diff"
            ),
            Diagnostic::UnmappedPlaceholder { ch } => {
                write!(f, "unmapped placeholder U+{:04X} emitted as-is", *ch as u32)
            }
            Diagnostic::ReservedCodepoint { side, offset, ch } => write!(
                f,
                "{side} input: U+{:04X} at byte {offset} is inside the placeholder range",
                *ch as u32
            ),
        }
    }
}

/// Counters for one diff run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Segments the engine reported as unchanged.
    pub equal_segments: usize,
    /// Segments the engine reported as inserted.
    pub insert_segments: usize,
    /// Segments the engine reported as deleted.
    pub delete_segments: usize,
    /// Distinct tokens (tags and entities) in the symbol table.
    pub tokens: usize,
    /// Plain characters wrapped in `<ins>`, plus inserted entities.
    pub inserted_chars: usize,
    /// Plain characters wrapped in `<del>`, plus deleted entities.
    pub deleted_chars: usize,
}

/// Result of a full diff run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    /// The annotated HTML.
    pub html: String,
    /// Non-fatal problems, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
    /// Counters.
    pub stats: DiffStats,
}

impl DiffReport {
    /// Returns true if the run produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns true if the two inputs were found to differ in their text.
    pub fn has_changes(&self) -> bool {
        self.stats.inserted_chars > 0 || self.stats.deleted_chars > 0
    }
}
