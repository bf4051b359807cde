//! Option keys
//!
//! Add-ons and drink variants a customer can attach to a cart line.

use std::{fmt, str::FromStr};

use smallvec::SmallVec;
use thiserror::Error;

use crate::domain::catalog::models::OptionsKind;

/// Inline capacity for option keys on one line; no form offers more than three.
pub type OptionKeys = SmallVec<[OptionKey; 3]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Temperature {
    Ice,
    Hot,
}

impl Temperature {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ice => "Ice",
            Self::Hot => "Hot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sweetness {
    Regular,
    LessSweet,
    LeastSweet,
}

impl Sweetness {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::LessSweet => "Less Sweet",
            Self::LeastSweet => "Least Sweet",
        }
    }
}

/// An unrecognised option value submitted by a client.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {field} option: {value:?}")]
pub struct UnknownOption {
    pub field: &'static str,
    pub value: String,
}

impl FromStr for Temperature {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ice" => Ok(Self::Ice),
            "Hot" => Ok(Self::Hot),
            other => Err(UnknownOption {
                field: "temperature",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Sweetness {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Regular" => Ok(Self::Regular),
            "Less Sweet" => Ok(Self::LessSweet),
            "Least Sweet" => Ok(Self::LeastSweet),
            other => Err(UnknownOption {
                field: "sweetness",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    ExtraCheese,
    ExtraTopping,
    ExtraPasta,
    Temperature(Temperature),
    Sweetness(Sweetness),
}

impl OptionKey {
    /// Fixed surcharge in minor units.
    #[must_use]
    pub fn surcharge(self) -> u64 {
        match self {
            Self::ExtraCheese | Self::ExtraPasta => 300,
            Self::ExtraTopping => 500,
            Self::Temperature(_) | Self::Sweetness(_) => 0,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ExtraCheese => "Extra Cheese",
            Self::ExtraTopping => "Extra Topping",
            Self::ExtraPasta => "Extra Pasta",
            Self::Temperature(temperature) => temperature.label(),
            Self::Sweetness(sweetness) => sweetness.label(),
        }
    }

    /// Whether a product with `kind` offers this option on its order form.
    #[must_use]
    pub fn offered_by(self, kind: OptionsKind) -> bool {
        matches!(
            (self, kind),
            (Self::ExtraCheese | Self::ExtraTopping, OptionsKind::PizzaOpt)
                | (Self::ExtraPasta, OptionsKind::PastaOpt)
                | (
                    Self::Temperature(_) | Self::Sweetness(_),
                    OptionsKind::CoffeeOpt
                )
        )
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The option fields of one "add to cart" form submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionSelection {
    pub extra_cheese: bool,
    pub extra_topping: bool,
    pub extra_pasta: bool,
    pub temperature: Option<Temperature>,
    pub sweetness: Option<Sweetness>,
}

impl OptionSelection {
    /// Selected keys in display order: add-ons, then temperature, then sweetness.
    #[must_use]
    pub fn keys(&self) -> OptionKeys {
        let mut keys = OptionKeys::new();

        if self.extra_cheese {
            keys.push(OptionKey::ExtraCheese);
        }

        if self.extra_topping {
            keys.push(OptionKey::ExtraTopping);
        }

        if self.extra_pasta {
            keys.push(OptionKey::ExtraPasta);
        }

        if let Some(temperature) = self.temperature {
            keys.push(OptionKey::Temperature(temperature));
        }

        if let Some(sweetness) = self.sweetness {
            keys.push(OptionKey::Sweetness(sweetness));
        }

        keys
    }
}

/// Sum of surcharges for a set of keys.
#[must_use]
pub fn addon_total(keys: &[OptionKey]) -> u64 {
    keys.iter().map(|key| key.surcharge()).sum()
}

/// Comma-joined labels, as stored on order items.
#[must_use]
pub fn options_label(keys: &[OptionKey]) -> String {
    keys.iter()
        .map(|key| key.label())
        .collect::<Vec<_>>()
        .join(", ")
}
