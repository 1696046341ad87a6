use crate::history::MetricHistory;
use crate::models::{DailyMetricRecord, WindowToken};

/// Resolve a window token to the trailing slice of the history.
///
/// Returns the last `min(N, len)` records in order: a short history is
/// served as-is, never padded or extrapolated, and an empty history yields
/// an empty slice. Pure view over the store.
pub fn resolve_window(history: &MetricHistory, token: WindowToken) -> &[DailyMetricRecord] {
    let records = history.records();
    let take = token.days().min(records.len());
    &records[records.len() - take..]
}
