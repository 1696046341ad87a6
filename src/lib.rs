//! Pulseboard's KPI engine: the derivation layer between a daily,
//! multi-segment metric history and the dashboard that renders it.
//!
//! A validated [`MetricHistory`] goes in once; the
//! [`DashboardController`] then answers selection changes (window token,
//! segment subset) with chart-ready rows and scalar KPIs, caching results
//! per selection. Everything is synchronous and in-process; rendering,
//! data provisioning, and auth live elsewhere.

pub mod dashboard;
pub mod error;
pub mod history;
pub mod models;
pub mod pipeline;

pub use dashboard::{DashboardController, DashboardData, DashboardSnapshot, Selection};
pub use error::{IntegrityError, InvalidSelectionError};
pub use history::MetricHistory;
pub use models::{
    DailyMetricRecord, DerivedRow, GrowthPercent, KpiSummary, Segment, SegmentSet, WindowToken,
};
pub use pipeline::{apply_filter, resolve_window, summarize};
