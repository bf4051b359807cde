//! Cart Handlers

pub(crate) mod add;
pub(crate) mod clear;
pub(crate) mod show;

#[cfg(test)]
pub(crate) mod tests {
    use ovenline_app::domain::{
        carts::{
            models::{CartLine, CartSnapshot},
            options::{OptionKey, addon_total},
        },
        catalog::models::ProductId,
        pricing::{TaxRate, Totals},
    };

    pub(crate) fn make_line(
        id: i64,
        name: &str,
        base_price: u64,
        options: &[OptionKey],
    ) -> CartLine {
        CartLine {
            product_id: ProductId::from_i64(id),
            name: name.to_string(),
            base_price,
            options: options.iter().copied().collect(),
            addon_total: addon_total(options),
        }
    }

    pub(crate) fn make_snapshot(lines: Vec<CartLine>) -> CartSnapshot {
        let totals =
            Totals::from_line_totals(lines.iter().map(CartLine::line_total), TaxRate::default())
                .unwrap_or_default();

        CartSnapshot { lines, totals }
    }
}
