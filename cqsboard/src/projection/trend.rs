use crate::models::{history_key, HistoryMap, HistoryPoint};

/// History series for video `id`, or an empty slice when none was exported.
///
/// The series is returned exactly as the source ordered it.
pub fn history_for(history: &HistoryMap, id: i64) -> &[HistoryPoint] {
    history
        .get(&history_key(id))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
