use thiserror::Error;

/// Errors raised by stock actions. Both leave the product unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Quantity overflow: cannot add {requested} to {current}")]
    QuantityOverflow { current: u32, requested: u32 },
}
