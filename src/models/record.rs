use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::InvalidSelectionError;

/// A tracked sub-population of users. The enumeration is closed: metric
/// records carry a value for every variant, and selections may only name
/// variants that exist here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Segment {
    Retail,
    #[serde(rename = "SME")]
    Sme,
    Enterprise,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Retail, Segment::Sme, Segment::Enterprise];

    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Retail => "Retail",
            Segment::Sme => "SME",
            Segment::Enterprise => "Enterprise",
        }
    }

    /// Parse a segment label as received from the dashboard client.
    pub fn parse(label: &str) -> Result<Self, InvalidSelectionError> {
        match label {
            "Retail" => Ok(Segment::Retail),
            "SME" => Ok(Segment::Sme),
            "Enterprise" => Ok(Segment::Enterprise),
            other => Err(InvalidSelectionError::UnknownSegment(other.to_string())),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of metrics across all segments.
///
/// `segment_values` must hold an entry for every [`Segment`]; a missing
/// entry is a data-integrity fault, not an implicit zero. Completeness and
/// value ranges are checked once when the record enters a
/// [`crate::MetricHistory`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetricRecord {
    pub date: NaiveDate,
    pub segment_values: BTreeMap<Segment, f64>,
    /// Fraction in [0, 1], segment-independent.
    pub conversion_rate: f64,
    /// Non-negative, segment-independent.
    pub revenue_per_user: f64,
}

impl DailyMetricRecord {
    /// Sum across every segment, regardless of any selection.
    pub fn total(&self) -> f64 {
        self.segment_values.values().sum()
    }
}
