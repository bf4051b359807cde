//! Idle cart pruning

use std::{sync::Arc, time::Duration};

use jiff::SignedDuration;
use tokio::{
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};
use tracing::{debug, info};

use crate::state::State;

const PRUNE_EVERY: Duration = Duration::from_secs(60);

/// Periodically forget carts nobody has touched for `max_idle`.
pub(crate) fn spawn(state: Arc<State>, max_idle: SignedDuration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(PRUNE_EVERY);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            match state.app.carts.prune_idle(max_idle).await {
                0 => debug!("no idle carts to prune"),
                pruned => info!(pruned, "pruned idle carts"),
            }
        }
    })
}
