//! Stock management for products: typed actions and their failure modes.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
