use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::InvalidSelectionError;
use crate::history::MetricHistory;
use crate::models::{DerivedRow, KpiSummary, Segment, SegmentSet, WindowToken};
use crate::pipeline;

use super::Selection;

/// The rows and summary derived for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub rows: Vec<DerivedRow>,
    pub summary: KpiSummary,
}

impl Default for DashboardData {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            summary: KpiSummary::zeroed(),
        }
    }
}

/// Serializable view of the controller for handing to a frontend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub selection: Selection,
    pub rows: Vec<DerivedRow>,
    pub summary: KpiSummary,
}

/// Owns the history, the current selection, and a per-selection result
/// cache; reruns the pipeline on each selection change.
///
/// Recomputation is synchronous: each setter runs the pipeline to
/// completion before returning, so readers never observe a half-updated
/// state. The pipeline is deterministic over the immutable history, which
/// is what makes serving cached results equivalent to recomputing them.
/// The cache is unbounded; the selection space is 4 window tokens times 8
/// segment subsets, so it tops out at 32 entries per controller.
pub struct DashboardController {
    history: MetricHistory,
    selection: Selection,
    cache: HashMap<Selection, DashboardData>,
    current: DashboardData,
}

impl DashboardController {
    /// Build a controller over a validated history and eagerly derive the
    /// default selection (last 90 days, all segments).
    pub fn new(history: MetricHistory) -> Self {
        let mut controller = Self {
            history,
            selection: Selection::default(),
            cache: HashMap::new(),
            current: DashboardData::default(),
        };
        controller.recompute();
        controller
    }

    /// Set the window from a raw range token (`"30d"`, `"90d"`, `"180d"`,
    /// `"365d"`). An unknown token leaves the selection and outputs
    /// untouched.
    pub fn set_window(&mut self, token: &str) -> Result<(), InvalidSelectionError> {
        let window = WindowToken::parse(token)?;
        self.set_window_token(window);
        Ok(())
    }

    pub fn set_window_token(&mut self, window: WindowToken) {
        if self.selection.window != window {
            self.selection.window = window;
            self.recompute();
        }
    }

    /// Replace the active segment set from raw labels. Rejects unknown
    /// labels without applying any part of the request.
    pub fn set_segments<'a, I>(&mut self, labels: I) -> Result<(), InvalidSelectionError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let segments = SegmentSet::from_labels(labels)?;
        self.set_segment_set(segments);
        Ok(())
    }

    pub fn set_segment_set(&mut self, segments: SegmentSet) {
        if self.selection.segments != segments {
            self.selection.segments = segments;
            self.recompute();
        }
    }

    /// Flip one segment's membership, as the dashboard's filter chips do.
    pub fn toggle_segment(&mut self, label: &str) -> Result<(), InvalidSelectionError> {
        let segment = Segment::parse(label)?;
        self.selection.segments.toggle(segment);
        self.recompute();
        Ok(())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn history(&self) -> &MetricHistory {
        &self.history
    }

    /// One row per day in the resolved window, oldest first.
    pub fn current_rows(&self) -> &[DerivedRow] {
        &self.current.rows
    }

    pub fn current_summary(&self) -> &KpiSummary {
        &self.current.summary
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            selection: self.selection.clone(),
            rows: self.current.rows.clone(),
            summary: self.current.summary.clone(),
        }
    }

    fn recompute(&mut self) {
        if let Some(cached) = self.cache.get(&self.selection) {
            debug!(
                "cache hit for window={} segments={}",
                self.selection.window,
                self.selection.segments.len()
            );
            self.current = cached.clone();
            return;
        }

        let (rows, summary) =
            pipeline::run(&self.history, self.selection.window, &self.selection.segments);
        debug!(
            "derived {} rows for window={} segments={}",
            rows.len(),
            self.selection.window,
            self.selection.segments.len()
        );

        let data = DashboardData { rows, summary };
        self.cache.insert(self.selection.clone(), data.clone());
        self.current = data;
    }
}
