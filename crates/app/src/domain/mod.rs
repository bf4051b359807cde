//! Ovenline Domain Concerns

pub mod carts;
pub mod catalog;
pub mod kitchen;
pub mod orders;
pub mod pricing;
