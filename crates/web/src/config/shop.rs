//! Shop Config

use clap::Args;
use jiff::SignedDuration;
use ovenline_app::domain::{
    carts::store::idle_minutes, orders::DEFAULT_CUSTOMER_NAME, pricing::TaxRate,
};

/// Pricing, checkout and cart settings.
#[derive(Debug, Args)]
pub struct ShopConfig {
    /// Tax rate applied to the cart subtotal, as a fraction
    #[arg(long, env = "TAX_RATE", default_value = "0.05")]
    pub tax_rate: TaxRate,

    /// Currency symbol shown before amounts
    #[arg(long, env = "CURRENCY_SYMBOL", default_value = "RM")]
    pub currency_symbol: String,

    /// Name recorded on orders placed through the counter
    #[arg(long, env = "DEFAULT_CUSTOMER_NAME", default_value = DEFAULT_CUSTOMER_NAME)]
    pub customer_name: String,

    /// Minutes a cart may sit untouched before it is forgotten
    #[arg(
        long = "cart-idle-minutes",
        env = "CART_IDLE_MINUTES",
        default_value = "240",
        value_parser = cart_idle_minutes
    )]
    pub cart_idle: SignedDuration,
}

fn cart_idle_minutes(value: &str) -> Result<SignedDuration, String> {
    let mins = value
        .trim()
        .parse::<i64>()
        .map_err(|error| format!("invalid minute count: {error}"))?;

    idle_minutes(mins).map_err(|error| error.to_string())
}
