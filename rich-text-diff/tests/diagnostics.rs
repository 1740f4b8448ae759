//! Non-fatal problems: reported in the `DiffReport` and logged at warn level.

use rich_text_diff::{
    Diagnostic, DiffError, DiffOptions, DissimilarEngine, Segment, Side, SymbolTable,
    annotate_segment, diff_html, diff_html_with, encode,
};
use rich_text_diff_testhelpers::{capture_warnings, setup};
use tracing::Level;

#[test]
fn unterminated_tag_is_truncated_and_logged() {
    setup();
    let mut table = SymbolTable::from_options(&DiffOptions::default()).unwrap();
    let mut diagnostics = Vec::new();

    let (encoded, events) =
        capture_warnings(|| encode("text <b", Side::Left, &mut table, &mut diagnostics));

    assert_eq!(encoded.unwrap(), "text ");
    assert_eq!(
        diagnostics,
        vec![Diagnostic::UnterminatedTag {
            side: Side::Left,
            offset: 5,
            dropped: 2,
        }]
    );

    assert_eq!(events.len(), 1, "{events:?}");
    assert_eq!(events[0].level, Level::WARN);
    assert_eq!(
        events[0].field("diagnostic"),
        Some("left input: unterminated tag at byte 5, 2 bytes left out of the diff")
    );
}

#[test]
fn malformed_input_still_produces_a_diff() {
    setup();
    let (report, events) = capture_warnings(|| {
        diff_html_with(
            "<p>intro</p> text <b",
            "<p>intro</p> text <b>bold</b>",
            &DiffOptions::default(),
            &DissimilarEngine,
        )
    });
    let report = report.unwrap();

    assert_eq!(report.html, "<p>intro</p> text <b><ins>bold</ins></b>");
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::UnterminatedTag {
            side: Side::Left,
            offset: 18,
            dropped: 2,
        }]
    );
    assert_eq!(events.len(), 1);
}

#[test]
fn unmapped_placeholder_is_emitted_and_logged() {
    setup();
    let table = SymbolTable::from_options(&DiffOptions::default()).unwrap();
    let mut diagnostics = Vec::new();

    let (html, events) = capture_warnings(|| {
        annotate_segment(&Segment::equal("x\u{E042}y"), &table, &mut diagnostics)
    });

    assert_eq!(html, "x\u{E042}y");
    assert_eq!(
        diagnostics,
        vec![Diagnostic::UnmappedPlaceholder { ch: '\u{E042}' }]
    );
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message, "placeholder has no table entry");
}

#[test]
fn reserved_codepoints_in_the_input_are_reported() {
    setup();
    let report = diff_html_with(
        "a\u{E000}b",
        "a b",
        &DiffOptions::default(),
        &DissimilarEngine,
    )
    .unwrap();
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::ReservedCodepoint {
            side: Side::Left,
            offset: 1,
            ch: '\u{E000}',
        }]
    );
}

#[test]
fn reserved_codepoint_can_decode_as_a_tag_from_the_other_side() {
    setup();
    let report =
        diff_html_with("a\u{E001}", "a<b>", &DiffOptions::default(), &DissimilarEngine).unwrap();

    // Both sides encode to the same string, so the left input's literal
    // character comes back as `<b>`.
    assert_eq!(report.html, "a<b>");
    assert!(!report.has_changes());
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::ReservedCodepoint {
            side: Side::Left,
            offset: 1,
            ch: '\u{E001}',
        }]
    );
}

#[test]
fn clean_runs_log_nothing() {
    setup();
    let (html, events) = capture_warnings(|| diff_html("<p>cat</p>", "<p>dog</p>"));
    assert_eq!(html.unwrap(), "<p><del>cat</del><ins>dog</ins></p>");
    assert!(events.is_empty(), "{events:?}");
}

#[test]
fn too_many_distinct_tags_is_an_error() {
    setup();
    let options = DiffOptions::new().no_entities().base('\u{F8F0}');
    let left: String = (0..10).map(|i| format!("<h{i}>")).collect();
    let right: String = (10..20).map(|i| format!("<h{i}>")).collect();

    assert_eq!(
        diff_html_with(&left, &right, &options, &DissimilarEngine),
        Err(DiffError::PlaceholdersExhausted { capacity: 16 })
    );
}
