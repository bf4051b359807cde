//! Kitchen

pub mod errors;
pub mod policy;
pub mod reconciler;
mod repository;
pub mod service;

pub use errors::KitchenServiceError;
pub use service::*;
