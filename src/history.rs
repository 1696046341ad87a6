use log::debug;

use crate::error::IntegrityError;
use crate::models::{DailyMetricRecord, Segment};

/// The immutable, chronologically ordered metric history the engine reads
/// from. Validated once at construction; exposes no mutation.
#[derive(Debug, Clone)]
pub struct MetricHistory {
    records: Vec<DailyMetricRecord>,
}

impl MetricHistory {
    /// Validate and take ownership of a record sequence.
    ///
    /// Rejects unsorted input, duplicate dates, records missing a segment
    /// entry, and out-of-range metric values. An empty history is valid.
    pub fn new(records: Vec<DailyMetricRecord>) -> Result<Self, IntegrityError> {
        for pair in records.windows(2) {
            if pair[1].date == pair[0].date {
                return Err(IntegrityError::DuplicateDate(pair[0].date));
            }
            if pair[1].date < pair[0].date {
                return Err(IntegrityError::OutOfOrder(pair[0].date, pair[1].date));
            }
        }

        for record in &records {
            validate_record(record)?;
        }

        debug!("validated metric history of {} daily records", records.len());

        Ok(Self { records })
    }

    pub fn records(&self) -> &[DailyMetricRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate_record(record: &DailyMetricRecord) -> Result<(), IntegrityError> {
    for segment in Segment::ALL {
        match record.segment_values.get(&segment) {
            None => {
                return Err(IntegrityError::MissingSegment {
                    date: record.date,
                    segment,
                })
            }
            Some(&value) if value < 0.0 => {
                return Err(IntegrityError::NegativeSegmentValue {
                    date: record.date,
                    segment,
                    value,
                })
            }
            Some(_) => {}
        }
    }

    if !(0.0..=1.0).contains(&record.conversion_rate) {
        return Err(IntegrityError::ConversionOutOfRange {
            date: record.date,
            value: record.conversion_rate,
        });
    }

    if record.revenue_per_user < 0.0 {
        return Err(IntegrityError::NegativeRevenue {
            date: record.date,
            value: record.revenue_per_user,
        });
    }

    Ok(())
}
