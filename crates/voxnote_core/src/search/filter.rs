//! Case-insensitive substring filter over note content.
//!
//! # Responsibility
//! - Implement the single list-filter predicate of the application.
//!
//! # Invariants
//! - Stateless; output order mirrors input order.
//! - Matching is case-insensitive on the full content body.

use crate::model::note::Note;

/// Returns the notes whose content contains `query`, case-insensitively.
///
/// An empty query returns the full input sequence unfiltered. Ordering is
/// preserved from the input (most-recent-first, inherited from store
/// order).
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    if query.is_empty() {
        return notes.iter().collect();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| note.content.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::filter_notes;
    use crate::model::note::Note;

    fn fixture() -> Vec<Note> {
        vec![
            Note::new("Call Mom"),
            Note::new("buy MILK"),
            Note::new("water the plants"),
        ]
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let notes = fixture();
        let hits = filter_notes(&notes, "");
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].content, "Call Mom");
        assert_eq!(hits[2].content, "water the plants");
    }

    #[test]
    fn match_is_case_insensitive_both_ways() {
        let notes = fixture();
        assert_eq!(filter_notes(&notes, "milk").len(), 1);
        assert_eq!(filter_notes(&notes, "MOM").len(), 1);
        assert_eq!(filter_notes(&notes, "Milk")[0].content, "buy MILK");
    }

    #[test]
    fn non_matching_query_returns_empty() {
        let notes = fixture();
        assert!(filter_notes(&notes, "groceries").is_empty());
    }

    #[test]
    fn every_hit_contains_the_query() {
        let notes = fixture();
        for hit in filter_notes(&notes, "a") {
            assert!(hit.content.to_lowercase().contains('a'));
        }
    }
}
