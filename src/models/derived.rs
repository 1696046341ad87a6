use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Segment;

/// One chart-ready row per day in the resolved window.
///
/// `segment_values` is restricted to the active selection (one trend line
/// per active segment); `conversion_rate` and `revenue_per_user` are carried
/// over from the underlying record because those KPIs are
/// segment-independent and must not be derived from the filtered total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedRow {
    pub date: NaiveDate,
    pub selected_total: f64,
    pub segment_values: BTreeMap<Segment, f64>,
    pub conversion_rate: f64,
    pub revenue_per_user: f64,
}

/// Percent change of the window's last total against its first, with the
/// zero-baseline case made explicit instead of leaking `inf`/`NaN` to the
/// client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum GrowthPercent {
    Percent(f64),
    /// First total was zero while the last was not; no finite percentage
    /// describes that change.
    Undefined,
}

impl GrowthPercent {
    pub const ZERO: GrowthPercent = GrowthPercent::Percent(0.0);

    pub fn as_percent(self) -> Option<f64> {
        match self {
            GrowthPercent::Percent(value) => Some(value),
            GrowthPercent::Undefined => None,
        }
    }
}

/// Scalar summary statistics for one window + segment selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub current_total: f64,
    pub growth_percent: GrowthPercent,
    pub average_conversion: f64,
    pub average_revenue_per_user: f64,
}

impl KpiSummary {
    /// The "no data in window" summary. Not an error: an empty window is a
    /// valid degenerate selection.
    pub fn zeroed() -> Self {
        Self {
            current_total: 0.0,
            growth_percent: GrowthPercent::ZERO,
            average_conversion: 0.0,
            average_revenue_per_user: 0.0,
        }
    }
}
