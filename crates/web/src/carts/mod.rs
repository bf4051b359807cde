//! Session cart fragments

pub(crate) mod errors;
pub(crate) mod handlers;
pub(crate) mod pruning;
pub(crate) mod view;

pub(crate) use handlers::*;
