//! Fatal errors for a diff run.

use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::report::Side;

/// A condition that stops a diff run.
///
/// Recoverable problems (malformed markup, unmapped placeholders) are not
/// errors: they are reported as [`Diagnostic`](crate::Diagnostic)s and the
/// run carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// More distinct tokens were seen than the placeholder range can hold.
    PlaceholdersExhausted {
        /// Number of placeholders available from the configured base.
        capacity: usize,
    },

    /// The configured base codepoint is outside the private use area.
    InvalidBase {
        /// The rejected base.
        base: char,
    },

    /// A configured entity literal cannot be used as a token.
    InvalidEntity {
        /// The rejected entity literal.
        entity: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A diff engine returned segments that do not rebuild its inputs.
    InconsistentSegments {
        /// The input the segments failed to reproduce.
        side: Side,
    },
}

impl Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffError::PlaceholdersExhausted { capacity } => write!(
                f,
                "too many distinct tags: the placeholder range only holds {capacity}"
            ),
            DiffError::InvalidBase { base } => write!(
                f,
                "base codepoint U+{:04X} is outside the private use area U+E000..=U+F8FF",
                *base as u32
            ),
            DiffError::InvalidEntity { entity, reason } => {
                write!(f, "invalid entity {entity:?}: {reason}")
            }
            DiffError::InconsistentSegments { side } => write!(
                f,
                "diff engine segments do not reproduce the {side} input"
            ),
        }
    }
}

impl Error for DiffError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = DiffError::InvalidBase { base: 'a' };
        assert_eq!(
            err.to_string(),
            "base codepoint U+0061 is outside the private use area U+E000..=U+F8FF"
        );

        let err = DiffError::InconsistentSegments { side: Side::Right };
        assert_eq!(
            err.to_string(),
            "diff engine segments do not reproduce the right input"
        );
    }
}
