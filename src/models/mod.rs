pub mod derived;
pub mod record;
pub mod selection;

pub use derived::{DerivedRow, GrowthPercent, KpiSummary};
pub use record::{DailyMetricRecord, Segment};
pub use selection::{SegmentSet, WindowToken};
