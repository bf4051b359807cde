//! Order Handlers

pub(crate) mod checkout;
pub(crate) mod confirmation;
