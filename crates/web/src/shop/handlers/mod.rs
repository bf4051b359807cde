//! Shop Handlers

pub(crate) mod home;
pub(crate) mod menu;
