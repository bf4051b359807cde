//! State

use std::sync::Arc;

use ovenline_app::{context::AppContext, domain::pricing::format_amount};

use crate::views::Views;

/// Presentation settings shared by every handler.
#[derive(Debug, Clone)]
pub(crate) struct ShopSettings {
    pub(crate) currency_symbol: String,
    pub(crate) poll_interval_secs: u64,
}

impl ShopSettings {
    /// Render minor units with the currency symbol, e.g. `RM37.80`.
    pub(crate) fn money(&self, minor: u64) -> String {
        format!("{}{}", self.currency_symbol, format_amount(minor))
    }
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "RM".to_string(),
            poll_interval_secs: 5,
        }
    }
}

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) views: Arc<Views>,
    pub(crate) shop: ShopSettings,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, views: Views, shop: ShopSettings) -> Self {
        Self {
            app,
            views: Arc::new(views),
            shop,
        }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, views: Views, shop: ShopSettings) -> Arc<Self> {
        Arc::new(Self::new(app, views, shop))
    }
}
