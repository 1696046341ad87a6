use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidSelectionError;
use crate::models::Segment;

/// Supported trailing window lengths. A token resolves to "the last N
/// records of the history", capped at the available length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowToken {
    #[serde(rename = "30d")]
    Days30,
    #[serde(rename = "90d")]
    Days90,
    #[serde(rename = "180d")]
    Days180,
    #[serde(rename = "365d")]
    Days365,
}

impl WindowToken {
    pub const ALL: [WindowToken; 4] = [
        WindowToken::Days30,
        WindowToken::Days90,
        WindowToken::Days180,
        WindowToken::Days365,
    ];

    pub fn days(self) -> usize {
        match self {
            WindowToken::Days30 => 30,
            WindowToken::Days90 => 90,
            WindowToken::Days180 => 180,
            WindowToken::Days365 => 365,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WindowToken::Days30 => "30d",
            WindowToken::Days90 => "90d",
            WindowToken::Days180 => "180d",
            WindowToken::Days365 => "365d",
        }
    }

    /// Parse a range token as received from the dashboard client.
    pub fn parse(token: &str) -> Result<Self, InvalidSelectionError> {
        match token {
            "30d" => Ok(WindowToken::Days30),
            "90d" => Ok(WindowToken::Days90),
            "180d" => Ok(WindowToken::Days180),
            "365d" => Ok(WindowToken::Days365),
            other => Err(InvalidSelectionError::UnknownWindow(other.to_string())),
        }
    }
}

impl Default for WindowToken {
    fn default() -> Self {
        WindowToken::Days90
    }
}

impl fmt::Display for WindowToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of segments currently active in the dashboard filter. May be
/// empty. Backed by a `BTreeSet`, so equality and hashing ignore the order
/// segments were toggled in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SegmentSet(BTreeSet<Segment>);

impl SegmentSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every segment in the domain enumeration.
    pub fn all() -> Self {
        Self(Segment::ALL.into_iter().collect())
    }

    /// Build a set from raw labels, rejecting anything outside the
    /// enumeration. No partial set is produced on failure.
    pub fn from_labels<'a, I>(labels: I) -> Result<Self, InvalidSelectionError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = BTreeSet::new();
        for label in labels {
            set.insert(Segment::parse(label)?);
        }
        Ok(Self(set))
    }

    pub fn contains(&self, segment: Segment) -> bool {
        self.0.contains(&segment)
    }

    /// Insert the segment; returns whether it was newly added.
    pub fn insert(&mut self, segment: Segment) -> bool {
        self.0.insert(segment)
    }

    /// Flip the segment's membership (the dashboard's chip toggle).
    pub fn toggle(&mut self, segment: Segment) {
        if !self.0.insert(segment) {
            self.0.remove(&segment);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Segment> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Segment> for SegmentSet {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_tokens_round_trip() {
        for token in WindowToken::ALL {
            assert_eq!(WindowToken::parse(token.as_str()), Ok(token));
        }
    }

    #[test]
    fn unknown_window_token_is_rejected() {
        assert_eq!(
            WindowToken::parse("7d"),
            Err(InvalidSelectionError::UnknownWindow("7d".into()))
        );
    }

    #[test]
    fn set_equality_ignores_toggle_order() {
        let a = SegmentSet::from_labels(["Retail", "Enterprise"]).unwrap();
        let b = SegmentSet::from_labels(["Enterprise", "Retail"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_label_yields_no_partial_set() {
        let result = SegmentSet::from_labels(["Retail", "Wholesale"]);
        assert_eq!(
            result,
            Err(InvalidSelectionError::UnknownSegment("Wholesale".into()))
        );
    }

    #[test]
    fn toggle_flips_membership() {
        let mut set = SegmentSet::empty();
        set.toggle(Segment::Sme);
        assert!(set.contains(Segment::Sme));
        set.toggle(Segment::Sme);
        assert!(set.is_empty());
    }
}
