//! Expiry timestamps with an explicit "never" marker.
//!
//! The wire format this replaces used `-1` milliseconds as a sentinel for
//! "no expiry". Here that is a dedicated variant so the sentinel cannot be
//! mistaken for a real instant, with a total order in which [`Deadline::Never`]
//! is greater than every finite value.

use std::cmp::Ordering;

/// A point in time at which something expires, or never.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deadline {
    /// Milliseconds since the epoch.
    At(i64),
    /// The infinite future.
    Never,
}

impl Deadline {
    /// Converts from the wire representation, mapping any negative value
    /// to [`Deadline::Never`].
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        if millis < 0 { Deadline::Never } else { Deadline::At(millis) }
    }

    /// Converts to the wire representation (`-1` for never).
    #[must_use]
    pub fn to_millis(self) -> i64 {
        match self {
            Deadline::At(millis) => millis,
            Deadline::Never => -1,
        }
    }

    /// Returns true if this deadline never passes.
    #[must_use]
    pub fn is_never(self) -> bool {
        matches!(self, Deadline::Never)
    }

    /// Returns true if the deadline is at or before `now_millis`.
    #[must_use]
    pub fn has_passed(self, now_millis: i64) -> bool {
        match self {
            Deadline::At(millis) => millis <= now_millis,
            Deadline::Never => false,
        }
    }
}

impl Ord for Deadline {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Deadline::At(a), Deadline::At(b)) => a.cmp(b),
            (Deadline::At(_), Deadline::Never) => Ordering::Less,
            (Deadline::Never, Deadline::At(_)) => Ordering::Greater,
            (Deadline::Never, Deadline::Never) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Deadline {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
