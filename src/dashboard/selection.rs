use serde::{Deserialize, Serialize};

use crate::models::{SegmentSet, WindowToken};

/// The dashboard's current filter state: one window token plus the active
/// segment subset. Doubles as the recomputation cache key; `SegmentSet` is
/// order-normalized, so two selections that toggled segments in different
/// orders compare and hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub window: WindowToken,
    pub segments: SegmentSet,
}

impl Selection {
    pub fn new(window: WindowToken, segments: SegmentSet) -> Self {
        Self { window, segments }
    }
}

impl Default for Selection {
    /// The dashboard's initial state: last 90 days, every segment active.
    fn default() -> Self {
        Self {
            window: WindowToken::default(),
            segments: SegmentSet::all(),
        }
    }
}
