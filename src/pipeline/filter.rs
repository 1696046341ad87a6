use std::collections::BTreeMap;

use crate::models::{DailyMetricRecord, DerivedRow, Segment, SegmentSet};

/// Project a windowed slice through the active segment selection.
///
/// Emits exactly one row per input record, in order; an empty selection
/// still emits every row, with `selected_total` 0. Segment validity is
/// guaranteed by [`SegmentSet`] construction, so the projection is total.
pub fn apply_filter(slice: &[DailyMetricRecord], segments: &SegmentSet) -> Vec<DerivedRow> {
    slice.iter().map(|record| derive_row(record, segments)).collect()
}

fn derive_row(record: &DailyMetricRecord, segments: &SegmentSet) -> DerivedRow {
    let segment_values: BTreeMap<Segment, f64> = record
        .segment_values
        .iter()
        .filter(|(segment, _)| segments.contains(**segment))
        .map(|(segment, value)| (*segment, *value))
        .collect();

    DerivedRow {
        date: record.date,
        selected_total: segment_values.values().sum(),
        segment_values,
        conversion_rate: record.conversion_rate,
        revenue_per_user: record.revenue_per_user,
    }
}
