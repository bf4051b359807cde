//! Ordering, checkout and kitchen display domain for a small food outlet.

pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod images;

#[cfg(test)]
mod test;
