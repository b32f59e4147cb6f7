//! Policy filtering over host-supplied note listings.

use crate::model::note::{NoteRecord, SelectionPolicy, DAY_MS};

/// Returns the notes eligible under `policy`, borrowed from `all_notes`.
///
/// Rules:
/// - `AllNotes`: every input note.
/// - `CreatedWithinDays(days)`: `created_at_ms >= now_ms - days * DAY_MS`.
/// - `UnderDirectory(prefix)`: literal `str::starts_with`; no trailing-slash
///   normalization, no case folding, no segment boundary check.
///
/// A blank prefix is not rejected here; callers decide whether a directory
/// is configured.
pub fn filter_by_policy<'a>(
    all_notes: &'a [NoteRecord],
    policy: &SelectionPolicy,
    now_ms: i64,
) -> Vec<&'a NoteRecord> {
    match policy {
        SelectionPolicy::AllNotes => all_notes.iter().collect(),
        SelectionPolicy::CreatedWithinDays(days) => {
            let lower_bound = window_lower_bound_ms(*days, now_ms);
            all_notes
                .iter()
                .filter(|note| note.created_at_ms >= lower_bound)
                .collect()
        }
        SelectionPolicy::UnderDirectory(prefix) => all_notes
            .iter()
            .filter(|note| note.path.starts_with(prefix.as_str()))
            .collect(),
    }
}

/// Inclusive lower bound of a `days`-long window ending at `now_ms`.
///
/// Saturates at `i64::MIN` instead of overflowing.
pub fn window_lower_bound_ms(days: u32, now_ms: i64) -> i64 {
    now_ms.saturating_sub(i64::from(days).saturating_mul(DAY_MS))
}
