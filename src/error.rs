use thiserror::Error;

pub use crate::stock::ProductError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Invalid product selection: index {index}, {count} products available")]
    InvalidSelection { index: usize, count: usize },
}

/// Failures talking to the console. These are the only errors that end a session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
