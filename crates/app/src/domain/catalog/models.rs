//! Catalog Models

use std::{fmt, str::FromStr};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<Product>;

/// Which option group a product's order form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OptionsKind {
    #[default]
    None,
    PizzaOpt,
    PastaOpt,
    CoffeeOpt,
}

impl OptionsKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PizzaOpt => "pizza_opt",
            Self::PastaOpt => "pasta_opt",
            Self::CoffeeOpt => "coffee_opt",
        }
    }
}

impl fmt::Display for OptionsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown options kind: {0}")]
pub struct UnknownOptionsKind(pub String);

impl FromStr for OptionsKind {
    type Err = UnknownOptionsKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "pizza_opt" => Ok(Self::PizzaOpt),
            "pasta_opt" => Ok(Self::PastaOpt),
            "coffee_opt" => Ok(Self::CoffeeOpt),
            other => Err(UnknownOptionsKind(other.to_string())),
        }
    }
}

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub category: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
    pub options_kind: OptionsKind,
    pub in_stock: bool,
}

/// Category Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub position: i32,
}

/// One category heading of the menu and its products.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub category: String,
    pub products: Vec<Product>,
}

/// Group products under their categories.
///
/// Sections follow category `position`; products inside a section keep
/// ascending id order. Categories without products are left out, and
/// products whose category is not listed trail in first-seen order.
#[must_use]
pub fn group_menu(categories: &[Category], products: Vec<Product>) -> Vec<MenuSection> {
    let mut ordered: Vec<&Category> = categories.iter().collect();
    ordered.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.name.cmp(&b.name)));

    let mut sections: Vec<MenuSection> = ordered
        .iter()
        .map(|category| MenuSection {
            category: category.name.clone(),
            products: Vec::new(),
        })
        .collect();

    let mut index: FxHashMap<String, usize> = sections
        .iter()
        .enumerate()
        .map(|(position, section)| (section.category.clone(), position))
        .collect();

    let mut products = products;
    products.sort_by_key(|product| product.id);

    for product in products {
        let position = match index.get(&product.category) {
            Some(position) => *position,
            None => {
                sections.push(MenuSection {
                    category: product.category.clone(),
                    products: Vec::new(),
                });

                let position = sections.len() - 1;
                index.insert(product.category.clone(), position);

                position
            }
        };

        if let Some(section) = sections.get_mut(position) {
            section.products.push(product);
        }
    }

    sections.retain(|section| !section.products.is_empty());

    sections
}
