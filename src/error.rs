use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Segment;

/// Data faults detected while constructing a [`crate::MetricHistory`].
///
/// These are raised once, at construction, and never recovered
/// automatically: the caller must supply corrected data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrityError {
    #[error("record {1} is not after {0}; history must be in ascending date order")]
    OutOfOrder(NaiveDate, NaiveDate),

    #[error("duplicate date {0} in history")]
    DuplicateDate(NaiveDate),

    #[error("record {date} is missing a value for segment {segment}")]
    MissingSegment { date: NaiveDate, segment: Segment },

    #[error("record {date} has negative value {value} for segment {segment}")]
    NegativeSegmentValue {
        date: NaiveDate,
        segment: Segment,
        value: f64,
    },

    #[error("record {date} has conversion rate {value} outside [0, 1]")]
    ConversionOutOfRange { date: NaiveDate, value: f64 },

    #[error("record {date} has negative revenue per user {value}")]
    NegativeRevenue { date: NaiveDate, value: f64 },
}

/// A selection request that names something outside the supported
/// enumerations. Raised at the string boundary and propagated unchanged;
/// the previous selection stays in effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSelectionError {
    #[error("unknown window token: {0}")]
    UnknownWindow(String),

    #[error("unknown segment: {0}")]
    UnknownSegment(String),
}
