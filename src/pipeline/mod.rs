//! The derivation pipeline: window resolution, segment filtering, and KPI
//! summarization. Every stage is a pure function over the validated
//! history; the [`crate::dashboard`] controller decides when to run it.

pub mod filter;
pub mod summarize;
pub mod window;

pub use filter::apply_filter;
pub use summarize::summarize;
pub use window::resolve_window;

use crate::history::MetricHistory;
use crate::models::{DerivedRow, KpiSummary, SegmentSet, WindowToken};

/// Run the full pipeline for one selection.
pub fn run(
    history: &MetricHistory,
    window: WindowToken,
    segments: &SegmentSet,
) -> (Vec<DerivedRow>, KpiSummary) {
    let slice = resolve_window(history, window);
    let rows = apply_filter(slice, segments);
    let summary = summarize(&rows);
    (rows, summary)
}
