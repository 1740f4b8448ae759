#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod tracing_macros;

mod annotate;
mod encode;
mod engine;
mod error;
mod options;
mod report;
mod symbols;

pub use annotate::{Marker, annotate, annotate_segment};
pub use encode::{decode, encode};
pub use engine::{
    DiffEngine, DissimilarEngine, Operation, Segment, normalize, reconstruct, reconstruct_left,
    reconstruct_right,
};
pub use error::DiffError;
pub use options::{DiffOptions, NBSP, PRIVATE_USE_END, PRIVATE_USE_START};
pub use report::{Diagnostic, DiffReport, DiffStats, Side};
pub use symbols::SymbolTable;

/// Diff two HTML fragments with the default options and engine.
///
/// Returns `right` with inserted text wrapped in `<ins>` and deleted text
/// from `left` wrapped in `<del>`. Markup is never wrapped.
///
/// ```
/// let html = rich_text_diff::diff_html("<p>Hello world</p>", "<p>Hello there world</p>")?;
/// assert_eq!(html, "<p>Hello <ins>there </ins>world</p>");
/// # Ok::<(), rich_text_diff::DiffError>(())
/// ```
pub fn diff_html(left: &str, right: &str) -> Result<String, DiffError> {
    diff_html_with(left, right, &DiffOptions::default(), &DissimilarEngine)
        .map(|report| report.html)
}

/// Diff two HTML fragments with explicit options and engine, returning the
/// full report.
///
/// Each call builds its own [`SymbolTable`]: the left input is encoded first,
/// so its tags get the lower placeholders.
pub fn diff_html_with(
    left: &str,
    right: &str,
    options: &DiffOptions,
    engine: &impl DiffEngine,
) -> Result<DiffReport, DiffError> {
    let mut table = SymbolTable::from_options(options)?;
    let mut diagnostics = Vec::new();

    let encoded_left = encode(left, Side::Left, &mut table, &mut diagnostics)?;
    let encoded_right = encode(right, Side::Right, &mut table, &mut diagnostics)?;

    let mut segments = engine.diff(&encoded_left, &encoded_right);
    engine.cleanup_semantic(&mut segments);
    debug!(count = segments.len(), "diff segments");
    for _segment in &segments {
        trace!(?_segment, "segment");
    }

    for (side, encoded) in [(Side::Left, &encoded_left), (Side::Right, &encoded_right)] {
        if reconstruct(&segments, side) != *encoded {
            return Err(DiffError::InconsistentSegments { side });
        }
    }

    let mut stats = DiffStats {
        tokens: table.len(),
        ..DiffStats::default()
    };
    let html = annotate::annotate_with_stats(&segments, &table, &mut diagnostics, &mut stats);

    Ok(DiffReport {
        html,
        diagnostics,
        stats,
    })
}
