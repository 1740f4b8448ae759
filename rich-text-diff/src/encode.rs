//! Turning HTML into a diffable string.
//!
//! Each tag, delimiters included, becomes one placeholder character, so a
//! character-level diff can never split a tag or report half of one as
//! changed. Configured entities in the text between tags collapse the same
//! way. Tags are opaque: `<p>` and `<p >` are different tokens.

use crate::error::DiffError;
use crate::report::{Diagnostic, Side};
use crate::symbols::SymbolTable;

/// Encode one input, recording newly seen tokens in `table`.
///
/// A `<` without a closing `>` ends the scan: the text before it is kept and
/// the rest is left out of the diffable string, with an
/// [`Diagnostic::UnterminatedTag`] pushed to `diagnostics`.
pub fn encode(
    html: &str,
    side: Side,
    table: &mut SymbolTable,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<String, DiffError> {
    let mut encoded = String::with_capacity(html.len());
    let mut offset = 0;

    while offset < html.len() {
        let rest = &html[offset..];
        let Some(tag_start) = rest.find('<') else {
            push_text(&mut encoded, rest, offset, side, table, diagnostics);
            break;
        };

        push_text(
            &mut encoded,
            &rest[..tag_start],
            offset,
            side,
            table,
            diagnostics,
        );

        let Some(tag_len) = rest[tag_start..].find('>').map(|end| end + 1) else {
            let diagnostic = Diagnostic::UnterminatedTag {
                side,
                offset: offset + tag_start,
                dropped: rest.len() - tag_start,
            };
            warn!(%diagnostic, "invalid HTML, truncating the diffable string");
            diagnostics.push(diagnostic);
            break;
        };

        let tag = &rest[tag_start..tag_start + tag_len];
        encoded.push(table.placeholder_for(tag)?);
        offset += tag_start + tag_len;
    }

    debug!(
        %side,
        bytes = html.len(),
        chars = encoded.chars().count(),
        tokens = table.len(),
        "encoded input"
    );
    Ok(encoded)
}

/// Copy text found between tags, collapsing entities to their placeholders.
fn push_text(
    encoded: &mut String,
    text: &str,
    offset: usize,
    side: Side,
    table: &SymbolTable,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut index = 0;
    while index < text.len() {
        let rest = &text[index..];
        if let Some((len, placeholder)) = table.entity_prefix(rest) {
            encoded.push(placeholder);
            index += len;
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        if table.is_placeholder(ch) {
            let diagnostic = Diagnostic::ReservedCodepoint {
                side,
                offset: offset + index,
                ch,
            };
            warn!(%diagnostic, "input collides with the placeholder range");
            diagnostics.push(diagnostic);
        }
        encoded.push(ch);
        index += ch.len_utf8();
    }
}

/// Expand every placeholder in `encoded` back to its token.
///
/// Placeholders missing from the table are emitted as-is, with a
/// [`Diagnostic::UnmappedPlaceholder`].
pub fn decode(encoded: &str, table: &SymbolTable, diagnostics: &mut Vec<Diagnostic>) -> String {
    let mut html = String::with_capacity(encoded.len());
    for ch in encoded.chars() {
        decode_char(ch, table, &mut html, diagnostics);
    }
    html
}

pub(crate) fn decode_char(
    ch: char,
    table: &SymbolTable,
    html: &mut String,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if !table.is_placeholder(ch) {
        html.push(ch);
        return;
    }

    match table.token_for(ch) {
        Some(token) => html.push_str(token),
        None => {
            let diagnostic = Diagnostic::UnmappedPlaceholder { ch };
            warn!(%diagnostic, "placeholder has no table entry");
            diagnostics.push(diagnostic);
            html.push(ch);
        }
    }
}
