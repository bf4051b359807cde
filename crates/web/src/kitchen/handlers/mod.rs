//! Kitchen Handlers

pub(crate) mod feed;
pub(crate) mod page;
pub(crate) mod status;
