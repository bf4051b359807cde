//! Menu Fragment Handler

use std::sync::Arc;

use salvo::{prelude::*, writing::Text};
use serde::Serialize;

use ovenline_app::domain::{
    carts::options::OptionKey,
    catalog::models::{MenuSection, Product},
};

use crate::{
    extensions::*,
    shop::errors::into_status_error,
    state::{ShopSettings, State},
};

#[derive(Debug, Serialize)]
pub(crate) struct MenuView {
    sections: Vec<SectionView>,
    extra_cheese: String,
    extra_topping: String,
    extra_pasta: String,
}

impl MenuView {
    fn new(sections: Vec<MenuSection>, shop: &ShopSettings) -> Self {
        Self {
            sections: sections
                .into_iter()
                .map(|section| SectionView::new(section, shop))
                .collect(),
            extra_cheese: shop.money(OptionKey::ExtraCheese.surcharge()),
            extra_topping: shop.money(OptionKey::ExtraTopping.surcharge()),
            extra_pasta: shop.money(OptionKey::ExtraPasta.surcharge()),
        }
    }
}

#[derive(Debug, Serialize)]
struct SectionView {
    title: String,
    products: Vec<ProductView>,
}

impl SectionView {
    fn new(section: MenuSection, shop: &ShopSettings) -> Self {
        Self {
            title: title_case(&section.category),
            products: section
                .products
                .into_iter()
                .map(|product| ProductView::new(product, shop))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ProductView {
    id: i64,
    name: String,
    description: String,
    price: String,
    image_url: String,
    options_kind: &'static str,
    in_stock: bool,
}

impl ProductView {
    fn new(product: Product, shop: &ShopSettings) -> Self {
        Self {
            id: product.id.into_i64(),
            price: shop.money(product.price),
            options_kind: product.options_kind.as_str(),
            name: product.name,
            description: product.description,
            image_url: product.image_url,
            in_stock: product.in_stock,
        }
    }
}

fn title_case(category: &str) -> String {
    let mut chars = category.chars();

    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Menu fragment grouped by category.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Text<String>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sections = state.app.catalog.menu().await.map_err(into_status_error)?;

    state
        .views
        .render("menu.html", &MenuView::new(sections, &state.shop))
}
