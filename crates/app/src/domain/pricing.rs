//! Pricing
//!
//! Amounts are integer minor units (sen for `RM`). Tax is applied once to the
//! subtotal and rounded half away from zero to a whole minor unit.

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use thiserror::Error;

/// Errors raised while computing totals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("tax rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    #[error("could not parse tax rate: {0}")]
    UnparseableRate(String),

    #[error("amount overflowed while computing totals")]
    Overflow,
}

/// Fractional sales tax rate, e.g. `0.05` for 5%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Build a rate from a fraction in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidRate`] when the fraction is out of range.
    pub fn new(rate: Decimal) -> Result<Self, PricingError> {
        if rate.is_sign_negative() || rate > Decimal::ONE {
            return Err(PricingError::InvalidRate(rate));
        }

        Ok(Self(rate))
    }

    #[must_use]
    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    /// Tax owed on `subtotal`, rounded to a whole minor unit.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the result does not fit in `u64`.
    pub fn tax_on(self, subtotal: u64) -> Result<u64, PricingError> {
        let applied = Decimal::from(subtotal)
            .checked_mul(self.0)
            .ok_or(PricingError::Overflow)?;

        applied
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .ok_or(PricingError::Overflow)
    }

    /// Percentage label for display, e.g. `5%`.
    #[must_use]
    pub fn percent_label(self) -> String {
        format!("{}%", (self.0 * Decimal::ONE_HUNDRED).normalize())
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self(Decimal::new(5, 2))
    }
}

impl FromStr for TaxRate {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rate = Decimal::from_str(s.trim())
            .map_err(|error| PricingError::UnparseableRate(error.to_string()))?;

        Self::new(rate)
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Subtotal, tax and grand total for a set of lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: u64,
    pub tax: u64,
    pub total: u64,
}

impl Totals {
    /// Compute totals for a subtotal.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if any figure does not fit in `u64`.
    pub fn from_subtotal(subtotal: u64, rate: TaxRate) -> Result<Self, PricingError> {
        let tax = rate.tax_on(subtotal)?;
        let total = subtotal.checked_add(tax).ok_or(PricingError::Overflow)?;

        Ok(Self {
            subtotal,
            tax,
            total,
        })
    }

    /// Compute totals for a sequence of line totals.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if any figure does not fit in `u64`.
    pub fn from_line_totals<I>(line_totals: I, rate: TaxRate) -> Result<Self, PricingError>
    where
        I: IntoIterator<Item = u64>,
    {
        let subtotal = line_totals
            .into_iter()
            .try_fold(0_u64, u64::checked_add)
            .ok_or(PricingError::Overflow)?;

        Self::from_subtotal(subtotal, rate)
    }
}

/// Render minor units as a fixed two-decimal major amount, e.g. `3780` as `37.80`.
#[must_use]
pub fn format_amount(minor: u64) -> String {
    format!("{}.{:02}", minor / 100, minor % 100)
}
