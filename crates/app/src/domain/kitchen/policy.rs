//! Kitchen feed policy.

use jiff::{SignedDuration, Timestamp};
use thiserror::Error;

/// Longest feed window accepted from configuration.
pub const MAX_WINDOW_HOURS: i64 = 24 * 366;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("kitchen window must be between 1 and {MAX_WINDOW_HOURS} hours, got {0}")]
pub struct InvalidWindow(pub i64);

/// How far back the feed looks and how many completed tickets it keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KitchenPolicy {
    pub window: SignedDuration,
    pub completed_limit: u32,
}

impl KitchenPolicy {
    /// Feed window of `hours`, which must be positive and at most [`MAX_WINDOW_HOURS`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidWindow`] for any other value.
    pub fn window_hours(hours: i64) -> Result<SignedDuration, InvalidWindow> {
        if !(1..=MAX_WINDOW_HOURS).contains(&hours) {
            return Err(InvalidWindow(hours));
        }

        SignedDuration::try_from_hours(hours).ok_or(InvalidWindow(hours))
    }

    /// Earliest `created_at` still shown at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the window reaches outside the supported timestamp range.
    pub fn window_start(&self, now: Timestamp) -> Result<Timestamp, jiff::Error> {
        now.checked_sub(self.window)
    }
}

impl Default for KitchenPolicy {
    fn default() -> Self {
        Self {
            window: SignedDuration::from_hours(24),
            completed_limit: 4,
        }
    }
}
