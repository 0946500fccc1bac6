//! Read-only note card projection.
//!
//! # Responsibility
//! - Project one note into the shape a card renderer needs: content plus
//!   a human-readable relative age.
//!
//! # Invariants
//! - Cards never mutate notes; deletion happens through the composition
//!   using the id the card exposes.

use crate::model::note::{Note, NoteId};

const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
const MS_PER_MONTH: i64 = 30 * MS_PER_DAY;
const MS_PER_YEAR: i64 = 365 * MS_PER_DAY;

/// Dismissible rendering data for one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    /// Id the delete affordance reports back to the composition.
    pub note_id: NoteId,
    /// Full note body.
    pub content: String,
    /// Relative creation time, e.g. `2 days ago`.
    pub age: String,
}

impl NoteCard {
    /// Projects a note into card data relative to `now_ms`.
    pub fn from_note(note: &Note, now_ms: i64) -> Self {
        Self {
            note_id: note.id,
            content: note.content.clone(),
            age: format_relative_time(note.created_at, now_ms),
        }
    }
}

/// Formats the distance between a creation time and now.
///
/// Clock skew can put `created_at_ms` in the future; such notes read as
/// `just now`.
pub fn format_relative_time(created_at_ms: i64, now_ms: i64) -> String {
    let elapsed = now_ms.saturating_sub(created_at_ms);
    if elapsed < MS_PER_MINUTE {
        return "just now".to_string();
    }

    let (amount, unit) = if elapsed < MS_PER_HOUR {
        (elapsed / MS_PER_MINUTE, "minute")
    } else if elapsed < MS_PER_DAY {
        (elapsed / MS_PER_HOUR, "hour")
    } else if elapsed < MS_PER_MONTH {
        (elapsed / MS_PER_DAY, "day")
    } else if elapsed < MS_PER_YEAR {
        (elapsed / MS_PER_MONTH, "month")
    } else {
        (elapsed / MS_PER_YEAR, "year")
    };

    if amount == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{amount} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::{format_relative_time, NoteCard, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};
    use crate::model::note::Note;

    #[test]
    fn fresh_timestamps_read_as_just_now() {
        assert_eq!(format_relative_time(1_000, 1_000), "just now");
        assert_eq!(format_relative_time(1_000, 1_000 + 59_999), "just now");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        assert_eq!(format_relative_time(10_000, 0), "just now");
    }

    #[test]
    fn singular_and_plural_units() {
        assert_eq!(format_relative_time(0, MS_PER_MINUTE), "1 minute ago");
        assert_eq!(format_relative_time(0, 5 * MS_PER_MINUTE), "5 minutes ago");
        assert_eq!(format_relative_time(0, 3 * MS_PER_HOUR), "3 hours ago");
        assert_eq!(format_relative_time(0, 2 * MS_PER_DAY), "2 days ago");
        assert_eq!(format_relative_time(0, 45 * MS_PER_DAY), "1 month ago");
        assert_eq!(format_relative_time(0, 800 * MS_PER_DAY), "2 years ago");
    }

    #[test]
    fn card_carries_note_identity_and_content() {
        let note = Note::new("water the plants");
        let card = NoteCard::from_note(&note, note.created_at);
        assert_eq!(card.note_id, note.id);
        assert_eq!(card.content, "water the plants");
        assert_eq!(card.age, "just now");
    }
}
