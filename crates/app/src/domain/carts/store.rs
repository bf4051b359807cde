//! Session-scoped cart storage.

use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

use crate::domain::carts::models::{Cart, SessionId};

/// Longest idle time accepted from configuration.
pub const MAX_IDLE_MINUTES: i64 = 60 * 24 * 30;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cart idle time must be between 1 and {MAX_IDLE_MINUTES} minutes, got {0}")]
pub struct InvalidIdleTime(pub i64);

/// Idle time of `mins`, which must be positive and at most [`MAX_IDLE_MINUTES`].
///
/// # Errors
///
/// Returns [`InvalidIdleTime`] for any other value.
pub fn idle_minutes(mins: i64) -> Result<SignedDuration, InvalidIdleTime> {
    if !(1..=MAX_IDLE_MINUTES).contains(&mins) {
        return Err(InvalidIdleTime(mins));
    }

    SignedDuration::try_from_mins(mins).ok_or(InvalidIdleTime(mins))
}

/// Handle to one session's cart. Hold the lock for the whole mutation.
pub type SharedCart = Arc<Mutex<Cart>>;

/// In-memory carts keyed by session.
///
/// The map lock is only held long enough to find or insert an entry; each
/// cart has its own mutex so sessions never wait on each other.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: RwLock<FxHashMap<SessionId, SharedCart>>,
}

impl CartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's cart, created empty on first use.
    pub async fn cart(&self, session: SessionId) -> SharedCart {
        if let Some(cart) = self.existing(session).await {
            return cart;
        }

        let mut carts = self.carts.write().await;

        carts
            .entry(session)
            .or_insert_with(|| Arc::new(Mutex::new(Cart::new(Timestamp::now()))))
            .clone()
    }

    /// The session's cart if one has been created.
    pub async fn existing(&self, session: SessionId) -> Option<SharedCart> {
        self.carts.read().await.get(&session).cloned()
    }

    /// Drop carts untouched for longer than `max_idle`.
    ///
    /// Carts currently borrowed by a request are kept regardless of age, and a
    /// non-positive `max_idle` prunes nothing.
    pub async fn prune_idle(&self, now: Timestamp, max_idle: SignedDuration) -> usize {
        if !max_idle.is_positive() {
            return 0;
        }

        let mut carts = self.carts.write().await;
        let before = carts.len();

        carts.retain(|_, cart| {
            if Arc::strong_count(cart) > 1 {
                return true;
            }

            match cart.try_lock() {
                Ok(cart) => now.duration_since(cart.touched_at()) <= max_idle,
                Err(_locked) => true,
            }
        });

        before - carts.len()
    }

    pub async fn len(&self) -> usize {
        self.carts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.carts.read().await.is_empty()
    }
}
