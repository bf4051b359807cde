//! Cart fragment view.

use serde::Serialize;

use ovenline_app::domain::{carts::models::CartSnapshot, pricing::TaxRate};

use crate::state::ShopSettings;

#[derive(Debug, Serialize)]
pub(crate) struct CartView {
    is_empty: bool,
    lines: Vec<CartLineView>,
    subtotal: String,
    tax: String,
    tax_label: String,
    total: String,
}

#[derive(Debug, Serialize)]
struct CartLineView {
    name: String,
    options: String,
    line_total: String,
}

impl CartView {
    pub(crate) fn new(snapshot: &CartSnapshot, tax_rate: TaxRate, shop: &ShopSettings) -> Self {
        Self {
            is_empty: snapshot.is_empty(),
            lines: snapshot
                .lines
                .iter()
                .map(|line| CartLineView {
                    name: line.name.clone(),
                    options: line.options_label(),
                    line_total: shop.money(line.line_total()),
                })
                .collect(),
            subtotal: shop.money(snapshot.totals.subtotal),
            tax: shop.money(snapshot.totals.tax),
            tax_label: tax_rate.percent_label(),
            total: shop.money(snapshot.totals.total),
        }
    }
}
