//! Turning diff segments back into HTML, with `<ins>`/`<del>` around changed
//! text.
//!
//! Markers only ever wrap runs of plain characters. A tag inside an inserted
//! run is emitted between two markers, never inside one; a tag inside a
//! deleted run is dropped, because the tag no longer exists. A segment made
//! only of tag placeholders is markup-only and is emitted as-is, whatever its
//! operation.
//!
//! Entities such as `&nbsp;` are never wrapped either, but they are text: an
//! inserted entity is written out, a deleted one is dropped, and both count
//! as changed characters.

use crate::encode::decode_char;
use crate::engine::{Operation, Segment};
use crate::report::{Diagnostic, DiffStats};
use crate::symbols::SymbolTable;

/// The wrapper applied around changed plain-text runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `<ins>…</ins>`; tags in the run are kept.
    Ins,
    /// `<del>…</del>`; tags in the run are dropped.
    Del,
}

impl Marker {
    /// The marker for an operation, if it gets one.
    pub fn for_operation(op: Operation) -> Option<Self> {
        match op {
            Operation::Equal => None,
            Operation::Insert => Some(Marker::Ins),
            Operation::Delete => Some(Marker::Del),
        }
    }

    /// Opening tag.
    pub const fn open(self) -> &'static str {
        match self {
            Marker::Ins => "<ins>",
            Marker::Del => "<del>",
        }
    }

    /// Closing tag.
    pub const fn close(self) -> &'static str {
        match self {
            Marker::Ins => "</ins>",
            Marker::Del => "</del>",
        }
    }

    /// Whether tags found inside a wrapped run are written out.
    pub const fn keeps_markup(self) -> bool {
        matches!(self, Marker::Ins)
    }
}

/// Annotate a whole diff, in segment order.
pub fn annotate(
    segments: &[Segment],
    table: &SymbolTable,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    let mut stats = DiffStats::default();
    annotate_with_stats(segments, table, diagnostics, &mut stats)
}

pub(crate) fn annotate_with_stats(
    segments: &[Segment],
    table: &SymbolTable,
    diagnostics: &mut Vec<Diagnostic>,
    stats: &mut DiffStats,
) -> String {
    let capacity = segments.iter().map(|segment| segment.text.len()).sum();
    let mut html = String::with_capacity(capacity);
    for segment in segments {
        match segment.op {
            Operation::Equal => stats.equal_segments += 1,
            Operation::Insert => stats.insert_segments += 1,
            Operation::Delete => stats.delete_segments += 1,
        }
        let wrapped = annotate_into(segment, table, &mut html, diagnostics);
        match segment.op {
            Operation::Insert => stats.inserted_chars += wrapped,
            Operation::Delete => stats.deleted_chars += wrapped,
            Operation::Equal => {}
        }
    }
    html
}

/// Annotate a single segment.
pub fn annotate_segment(
    segment: &Segment,
    table: &SymbolTable,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    let mut html = String::with_capacity(segment.text.len());
    annotate_into(segment, table, &mut html, diagnostics);
    html
}

/// Returns the number of changed characters: plain characters that ended
/// up inside a marker, plus inserted or deleted entities.
fn annotate_into(
    segment: &Segment,
    table: &SymbolTable,
    html: &mut String,
    diagnostics: &mut Vec<Diagnostic>,
) -> usize {
    let marker = Marker::for_operation(segment.op);
    let markup_only = segment.text.chars().all(|ch| table.is_tag(ch));

    match marker {
        Some(marker) if !markup_only => wrap_runs(&segment.text, marker, table, html, diagnostics),
        _ => {
            if markup_only && marker.is_some() {
                trace!(op = ?segment.op, "markup-only segment, not marked");
            }
            for ch in segment.text.chars() {
                decode_char(ch, table, html, diagnostics);
            }
            0
        }
    }
}

/// Wrap each run of plain characters in `marker`. Placeholders close the
/// current run and are decoded or dropped depending on the marker.
fn wrap_runs(
    text: &str,
    marker: Marker,
    table: &SymbolTable,
    html: &mut String,
    diagnostics: &mut Vec<Diagnostic>,
) -> usize {
    let mut open = false;
    let mut wrapped = 0;

    for ch in text.chars() {
        if table.is_placeholder(ch) {
            if open {
                html.push_str(marker.close());
                open = false;
            }
            if marker.keeps_markup() {
                decode_char(ch, table, html, diagnostics);
            }
            if table.is_entity(ch) {
                wrapped += 1;
            }
        } else {
            if !open {
                html.push_str(marker.open());
                open = true;
            }
            html.push(ch);
            wrapped += 1;
        }
    }

    if open {
        html.push_str(marker.close());
    }
    wrapped
}
