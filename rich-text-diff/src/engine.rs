//! The sequence diff this crate sits on top of.
//!
//! Any character diff works as long as it honours the segment contract:
//! concatenating every non-delete segment gives back the right input, and
//! concatenating every non-insert segment gives back the left input. The
//! wrapping granularity of the final HTML depends on the engine merging
//! trivial single-character edits into word-sized spans, so an engine is
//! expected to run a semantic cleanup pass.

use dissimilar::Chunk;

use crate::report::Side;

/// What a segment does to the left input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Present in both inputs.
    Equal,
    /// Only in the right input.
    Insert,
    /// Only in the left input.
    Delete,
}

/// One `(operation, text)` unit of a diff, over encoded strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The operation.
    pub op: Operation,
    /// Encoded text, placeholders included.
    pub text: String,
}

impl Segment {
    /// Create a segment.
    pub fn new(op: Operation, text: impl Into<String>) -> Self {
        Self {
            op,
            text: text.into(),
        }
    }

    /// Text present in both inputs.
    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(Operation::Equal, text)
    }

    /// Text only in the right input.
    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(Operation::Insert, text)
    }

    /// Text only in the left input.
    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(Operation::Delete, text)
    }
}

/// A character-sequence diff with a semantic cleanup pass.
pub trait DiffEngine {
    /// Diff two encoded strings into ordered segments.
    fn diff(&self, left: &str, right: &str) -> Vec<Segment>;

    /// Merge insignificant edits into coherent spans, in place.
    ///
    /// The default only [`normalize`]s.
    fn cleanup_semantic(&self, segments: &mut Vec<Segment>) {
        normalize(segments);
    }
}

/// The default engine: diff-match-patch as implemented by [`dissimilar`],
/// whose `diff` already applies the semantic cleanup.
#[derive(Debug, Clone, Copy, Default)]
pub struct DissimilarEngine;

impl DiffEngine for DissimilarEngine {
    fn diff(&self, left: &str, right: &str) -> Vec<Segment> {
        dissimilar::diff(left, right)
            .into_iter()
            .map(|chunk| match chunk {
                Chunk::Equal(text) => Segment::equal(text),
                Chunk::Insert(text) => Segment::insert(text),
                Chunk::Delete(text) => Segment::delete(text),
            })
            .collect()
    }
}

/// Closures stand in for an engine, e.g. to replay fixed segments in tests.
impl<F> DiffEngine for F
where
    F: Fn(&str, &str) -> Vec<Segment>,
{
    fn diff(&self, left: &str, right: &str) -> Vec<Segment> {
        self(left, right)
    }
}

/// Drop empty segments and merge neighbours that share an operation.
pub fn normalize(segments: &mut Vec<Segment>) {
    let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments.drain(..) {
        if segment.text.is_empty() {
            continue;
        }
        match merged.last_mut() {
            Some(last) if last.op == segment.op => last.text.push_str(&segment.text),
            _ => merged.push(segment),
        }
    }
    *segments = merged;
}

/// Rebuild one side's input from segments.
pub fn reconstruct(segments: &[Segment], side: Side) -> String {
    let skipped = match side {
        Side::Left => Operation::Insert,
        Side::Right => Operation::Delete,
    };
    segments
        .iter()
        .filter(|segment| segment.op != skipped)
        .map(|segment| segment.text.as_str())
        .collect()
}

/// Rebuild the left input from segments.
pub fn reconstruct_left(segments: &[Segment]) -> String {
    reconstruct(segments, Side::Left)
}

/// Rebuild the right input from segments.
pub fn reconstruct_right(segments: &[Segment]) -> String {
    reconstruct(segments, Side::Right)
}
