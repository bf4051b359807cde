//! Kitchen display poll reconciliation.
//!
//! A display re-fetches the feed on a fixed interval and compares the active
//! ticket ids against every id it has seen since it started. New ids ring an
//! alert, except on the very first fetch and until an operator has armed
//! audio with an explicit gesture. Wait times are derived locally from each
//! ticket's creation time and never need a round trip.
//!
//! The kitchen page script and the `kitchen watch` command both follow this
//! contract.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use rustc_hash::FxHashSet;

use crate::domain::orders::models::OrderId;

/// Default interval between feed fetches.
pub const POLL_INTERVAL: SignedDuration = SignedDuration::from_secs(5);

/// Wait time at which a ticket is flagged as overdue.
pub const OVERDUE_AFTER: SignedDuration = SignedDuration::from_mins(15);

/// Result of reconciling one fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollOutcome {
    /// Ids not seen before, in feed order.
    pub new_ids: Vec<OrderId>,

    /// Whether the alert should sound once for this fetch.
    pub alert: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PollReconciler {
    seen: FxHashSet<OrderId>,
    loaded: bool,
    audio_armed: bool,
}

impl PollReconciler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the operator gesture that allows alerts to play.
    pub fn arm_audio(&mut self) {
        self.audio_armed = true;
    }

    #[must_use]
    pub fn is_audio_armed(&self) -> bool {
        self.audio_armed
    }

    /// Reconcile the active ticket ids of one fetch.
    pub fn observe<I>(&mut self, active: I) -> PollOutcome
    where
        I: IntoIterator<Item = OrderId>,
    {
        let new_ids: Vec<OrderId> = active
            .into_iter()
            .filter(|id| self.seen.insert(*id))
            .collect();

        let alert = !new_ids.is_empty() && self.loaded && self.audio_armed;

        self.loaded = true;

        PollOutcome { new_ids, alert }
    }
}

/// Elapsed time since a ticket was created, for display as `MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitTime {
    pub minutes: i64,
    pub seconds: i64,
    pub overdue: bool,
}

impl WaitTime {
    /// Clock skew that puts `created_at` in the future reads as `00:00`.
    #[must_use]
    pub fn between(created_at: Timestamp, now: Timestamp) -> Self {
        let elapsed = now.duration_since(created_at).max(SignedDuration::ZERO);
        let total_seconds = elapsed.as_secs();

        Self {
            minutes: total_seconds / 60,
            seconds: total_seconds % 60,
            overdue: elapsed >= OVERDUE_AFTER,
        }
    }
}

impl fmt::Display for WaitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}
