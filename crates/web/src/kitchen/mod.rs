//! Kitchen display

pub(crate) mod handlers;
pub(crate) mod view;

pub(crate) use handlers::*;
