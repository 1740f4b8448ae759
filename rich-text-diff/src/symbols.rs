//! The symbol table: markup tokens and the placeholders standing in for them.
//!
//! Every distinct token (a whole tag such as `<p class="x">`, or a configured
//! entity such as `&nbsp;`) gets one character from the private use area.
//! The n-th token seen gets `base + n`. Tokens are stored in one
//! insertion-ordered set, so the index of a token *is* its placeholder offset
//! and both directions are O(1).
//!
//! A table lives for exactly one diff run: it is filled while encoding the
//! left input then the right input, and only read while annotating.

use indexmap::IndexSet;

use crate::error::DiffError;
use crate::options::{DiffOptions, PRIVATE_USE_END, PRIVATE_USE_START};

/// Bidirectional mapping between markup tokens and placeholder characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    base: u32,
    capacity: usize,
    /// The first `entities` tokens are pre-seeded entity literals.
    entities: usize,
    tokens: IndexSet<String>,
}

impl SymbolTable {
    /// Create an empty table whose first placeholder is `base`.
    pub fn new(base: char) -> Result<Self, DiffError> {
        if !(PRIVATE_USE_START..=PRIVATE_USE_END).contains(&base) {
            return Err(DiffError::InvalidBase { base });
        }

        Ok(Self {
            base: base as u32,
            capacity: (PRIVATE_USE_END as u32 - base as u32 + 1) as usize,
            entities: 0,
            tokens: IndexSet::new(),
        })
    }

    /// Create a table from options, with the configured entities pre-seeded
    /// in order.
    pub fn from_options(options: &DiffOptions) -> Result<Self, DiffError> {
        let mut table = Self::new(options.base)?;
        for entity in &options.entities {
            table.seed_entity(entity)?;
        }
        Ok(table)
    }

    fn seed_entity(&mut self, entity: &str) -> Result<char, DiffError> {
        let reason = if entity.is_empty() {
            Some("entity is empty")
        } else if entity.contains(['<', '>']) {
            Some("entity contains an angle bracket")
        } else if self.tokens.contains(entity) {
            Some("entity is listed twice")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(DiffError::InvalidEntity {
                entity: entity.to_string(),
                reason,
            });
        }

        let placeholder = self.placeholder_for(entity)?;
        self.entities += 1;
        Ok(placeholder)
    }

    /// Return the placeholder for `token`, minting the next free one if the
    /// token has not been seen yet.
    pub fn placeholder_for(&mut self, token: &str) -> Result<char, DiffError> {
        if let Some(index) = self.tokens.get_index_of(token) {
            return self.placeholder_at(index);
        }

        let index = self.tokens.len();
        let placeholder = self.placeholder_at(index)?;
        self.tokens.insert(token.to_string());
        trace!(token, placeholder = %placeholder.escape_unicode(), "minted placeholder");
        Ok(placeholder)
    }

    fn placeholder_at(&self, index: usize) -> Result<char, DiffError> {
        let exhausted = DiffError::PlaceholdersExhausted {
            capacity: self.capacity,
        };
        if index >= self.capacity {
            return Err(exhausted);
        }
        char::from_u32(self.base + index as u32).ok_or(exhausted)
    }

    /// Look up the placeholder of a token without minting one.
    pub fn get(&self, token: &str) -> Option<char> {
        let index = self.tokens.get_index_of(token)?;
        self.placeholder_at(index).ok()
    }

    /// Look up the token a placeholder stands for.
    pub fn token_for(&self, ch: char) -> Option<&str> {
        if !self.is_placeholder(ch) {
            return None;
        }
        let index = (ch as u32 - self.base) as usize;
        self.tokens.get_index(index).map(String::as_str)
    }

    /// Returns true if `ch` lies in this table's placeholder range, whether
    /// or not it has been assigned yet.
    pub fn is_placeholder(&self, ch: char) -> bool {
        let ch = ch as u32;
        ch >= self.base && ((ch - self.base) as usize) < self.capacity
    }

    /// Returns true if `ch` is the placeholder of a pre-seeded entity.
    pub fn is_entity(&self, ch: char) -> bool {
        let ch = ch as u32;
        ch >= self.base && ((ch - self.base) as usize) < self.entities
    }

    /// Returns true if `ch` is a placeholder that stands for a tag rather
    /// than an entity. Unassigned placeholders count as tags.
    pub fn is_tag(&self, ch: char) -> bool {
        self.is_placeholder(ch) && !self.is_entity(ch)
    }

    /// If `text` starts with a pre-seeded entity, return the entity's length
    /// in bytes and its placeholder.
    pub(crate) fn entity_prefix(&self, text: &str) -> Option<(usize, char)> {
        self.tokens
            .iter()
            .take(self.entities)
            .enumerate()
            .find(|(_, entity)| text.starts_with(entity.as_str()))
            .and_then(|(index, entity)| Some((entity.len(), self.placeholder_at(index).ok()?)))
    }

    /// The first placeholder codepoint.
    pub fn base(&self) -> char {
        char::from_u32(self.base).unwrap_or(PRIVATE_USE_START)
    }

    /// How many placeholders the range holds in total.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of assigned placeholders, entities included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no placeholder has been assigned.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over `(placeholder, token)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter_map(|(index, token)| Some((self.placeholder_at(index).ok()?, token.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nbsp_is_seeded_at_the_base() {
        let table = SymbolTable::from_options(&DiffOptions::default()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("&nbsp;"), Some('\u{E000}'));
        assert_eq!(table.token_for('\u{E000}'), Some("&nbsp;"));
    }

    #[test]
    fn tokens_are_assigned_sequentially_and_reused() {
        let mut table = SymbolTable::from_options(&DiffOptions::default()).unwrap();
        let open = table.placeholder_for("<b>").unwrap();
        let close = table.placeholder_for("</b>").unwrap();
        assert_eq!(open, '\u{E001}');
        assert_eq!(close, '\u{E002}');

        assert_eq!(table.placeholder_for("<b>").unwrap(), open);
        assert_eq!(table.len(), 3);
        assert_eq!(table.token_for(close), Some("</b>"));
    }

    #[test]
    fn placeholder_predicate_covers_the_whole_range() {
        let table = SymbolTable::new('\u{E000}').unwrap();
        assert!(table.is_placeholder('\u{E000}'));
        assert!(table.is_placeholder('\u{F8FF}'));
        assert!(!table.is_placeholder('z'));
        assert!(!table.is_placeholder('\u{D7FF}'));
        assert!(!table.is_placeholder('\u{F900}'));

        // In range but not assigned yet.
        assert_eq!(table.token_for('\u{E123}'), None);
    }

    #[test]
    fn base_outside_private_use_area_is_rejected() {
        assert_eq!(
            SymbolTable::new('x'),
            Err(DiffError::InvalidBase { base: 'x' })
        );
        assert!(SymbolTable::new('\u{F900}').is_err());
    }

    #[test]
    fn exhausting_the_range_is_an_error() {
        let mut table = SymbolTable::new('\u{F8FE}').unwrap();
        assert_eq!(table.capacity(), 2);
        table.placeholder_for("<a>").unwrap();
        table.placeholder_for("<b>").unwrap();
        assert_eq!(
            table.placeholder_for("<c>"),
            Err(DiffError::PlaceholdersExhausted { capacity: 2 })
        );

        // Known tokens still resolve.
        assert_eq!(table.placeholder_for("<a>"), Ok('\u{F8FE}'));
    }

    #[test]
    fn bad_entities_are_rejected() {
        for entity in ["", "&lt<;", "&nbsp;"] {
            let options = DiffOptions::new().entity(entity);
            assert!(matches!(
                SymbolTable::from_options(&options),
                Err(DiffError::InvalidEntity { .. })
            ));
        }
    }

    #[test]
    fn entity_prefix_only_matches_seeded_entities() {
        let mut table = SymbolTable::from_options(&DiffOptions::new().entity("&amp;")).unwrap();
        table.placeholder_for("<i>").unwrap();

        assert_eq!(table.entity_prefix("&amp; more"), Some((5, '\u{E001}')));
        assert_eq!(table.entity_prefix("&nbsp;"), Some((6, '\u{E000}')));
        assert_eq!(table.entity_prefix("<i>"), None);
        assert_eq!(table.entity_prefix("plain"), None);
    }

    #[test]
    fn entities_and_tags_are_told_apart() {
        let mut table = SymbolTable::from_options(&DiffOptions::new().entity("&amp;")).unwrap();
        let tag = table.placeholder_for("<i>").unwrap();

        assert!(table.is_entity('\u{E000}'));
        assert!(table.is_entity('\u{E001}'));
        assert!(!table.is_entity(tag));
        assert!(!table.is_tag('\u{E000}'));
        assert!(table.is_tag(tag));
        assert!(table.is_tag('\u{E123}'));
        assert!(!table.is_tag('a'));
        assert!(!table.is_entity('a'));
    }

    #[test]
    fn iter_yields_assignment_order() {
        let mut table = SymbolTable::from_options(&DiffOptions::default()).unwrap();
        table.placeholder_for("<p>").unwrap();
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(pairs, vec![('\u{E000}', "&nbsp;"), ('\u{E001}', "<p>")]);
    }
}
