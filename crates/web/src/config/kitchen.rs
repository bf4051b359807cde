//! Kitchen Config

use clap::Args;
use jiff::SignedDuration;
use ovenline_app::domain::kitchen::policy::KitchenPolicy;

fn window_hours(value: &str) -> Result<SignedDuration, String> {
    let hours = value
        .trim()
        .parse::<i64>()
        .map_err(|error| format!("invalid hour count: {error}"))?;

    KitchenPolicy::window_hours(hours).map_err(|error| error.to_string())
}

/// Kitchen display settings.
#[derive(Debug, Args)]
pub struct KitchenConfig {
    /// Hours of orders shown on the kitchen feed
    #[arg(
        long = "kitchen-window-hours",
        env = "KITCHEN_WINDOW_HOURS",
        default_value = "24",
        value_parser = window_hours
    )]
    pub kitchen_window: SignedDuration,

    /// Recently completed tickets kept on the feed
    #[arg(long, env = "KITCHEN_COMPLETED_LIMIT", default_value_t = 4)]
    pub kitchen_completed_limit: u32,

    /// Seconds between kitchen display polls
    #[arg(long, env = "KITCHEN_POLL_INTERVAL_SECS", default_value_t = 5)]
    pub kitchen_poll_interval_secs: u64,
}

impl KitchenConfig {
    /// Feed policy built from these settings.
    #[must_use]
    pub fn policy(&self) -> KitchenPolicy {
        KitchenPolicy {
            window: self.kitchen_window,
            completed_limit: self.kitchen_completed_limit,
        }
    }
}
