//! Image Handlers

pub(crate) mod generate;
