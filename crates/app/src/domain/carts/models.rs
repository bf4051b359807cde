//! Cart Models

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use uuid::Uuid;

use crate::domain::{
    carts::options::{OptionKeys, options_label},
    catalog::models::ProductId,
    pricing::{PricingError, TaxRate, Totals},
};

/// Opaque identity of one customer's browsing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(Uuid);

impl SessionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// CartLine Model
///
/// Name and prices are frozen when the line is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub base_price: u64,
    pub options: OptionKeys,
    pub addon_total: u64,
}

impl CartLine {
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.base_price.saturating_add(self.addon_total)
    }

    #[must_use]
    pub fn options_label(&self) -> String {
        options_label(&self.options)
    }
}

/// Cart Model
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    touched_at: Timestamp,
}

impl Cart {
    #[must_use]
    pub fn new(now: Timestamp) -> Self {
        Self {
            lines: Vec::new(),
            touched_at: now,
        }
    }

    pub fn push(&mut self, line: CartLine, now: Timestamp) {
        self.lines.push(line);
        self.touched_at = now;
    }

    pub fn clear(&mut self, now: Timestamp) {
        self.lines.clear();
        self.touched_at = now;
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn touched_at(&self) -> Timestamp {
        self.touched_at
    }

    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the figures do not fit in `u64`.
    pub fn totals(&self, rate: TaxRate) -> Result<Totals, PricingError> {
        Totals::from_line_totals(self.lines.iter().map(CartLine::line_total), rate)
    }

    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the figures do not fit in `u64`.
    pub fn snapshot(&self, rate: TaxRate) -> Result<CartSnapshot, PricingError> {
        Ok(CartSnapshot {
            lines: self.lines.clone(),
            totals: self.totals(rate)?,
        })
    }
}

/// Read-only view of a cart with its totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub totals: Totals,
}

impl CartSnapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;
    use testresult::TestResult;

    use crate::domain::carts::options::{OptionKey, Sweetness, Temperature};

    use super::*;

    fn line(name: &str, base_price: u64, options: OptionKeys) -> CartLine {
        let addon_total = options.iter().map(|key| key.surcharge()).sum();

        CartLine {
            product_id: ProductId::from_i64(1),
            name: name.to_string(),
            base_price,
            options,
            addon_total,
        }
    }

    #[test]
    fn snapshot_of_margherita_then_latte() -> TestResult {
        let now = Timestamp::now();
        let mut cart = Cart::new(now);

        cart.push(line("Margherita", 2600, OptionKeys::new()), now);

        let first = cart.snapshot(TaxRate::default())?;

        assert_eq!(first.totals.subtotal, 2600);
        assert_eq!(first.totals.tax, 130);
        assert_eq!(first.totals.total, 2730);

        cart.push(
            line(
                "Cafe Latte",
                1000,
                smallvec![
                    OptionKey::Temperature(Temperature::Ice),
                    OptionKey::Sweetness(Sweetness::LessSweet)
                ],
            ),
            now,
        );

        let second = cart.snapshot(TaxRate::default())?;

        assert_eq!(second.totals.subtotal, 3600);
        assert_eq!(second.totals.tax, 180);
        assert_eq!(second.totals.total, 3780);
        let latte = second.lines.get(1).ok_or("latte line missing")?;

        assert_eq!(latte.options_label(), "Ice, Less Sweet");

        Ok(())
    }

    #[test]
    fn line_total_includes_addons() {
        let line = line("Pizza A", 3500, smallvec![OptionKey::ExtraCheese]);

        assert_eq!(line.line_total(), 3800);
        assert_eq!(line.options_label(), "Extra Cheese");
    }

    #[test]
    fn clear_empties_lines_and_subtotal() -> TestResult {
        let now = Timestamp::now();
        let mut cart = Cart::new(now);

        cart.push(line("Margherita", 2600, OptionKeys::new()), now);
        cart.clear(now);

        let snapshot = cart.snapshot(TaxRate::default())?;

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.totals.subtotal, 0);

        Ok(())
    }

    #[test]
    fn insertion_order_is_preserved() {
        let now = Timestamp::now();
        let mut cart = Cart::new(now);

        for name in ["Margherita", "Carbonara", "Cafe Latte"] {
            cart.push(line(name, 1000, OptionKeys::new()), now);
        }

        let names: Vec<&str> = cart.lines().iter().map(|l| l.name.as_str()).collect();

        assert_eq!(names, ["Margherita", "Carbonara", "Cafe Latte"]);
    }

    #[test]
    fn session_id_parses_from_display() -> TestResult {
        let session = SessionId::new();

        assert_eq!(session.to_string().parse::<SessionId>()?, session);
        assert!("not-a-session".parse::<SessionId>().is_err());

        Ok(())
    }
}
