use crate::domain::Product;
use super::actions::{StockAction, StockActionResult};
use super::error::ProductError;

impl Product {
    /// Increases the stock on hand by `amount` and returns the new quantity.
    ///
    /// # Errors
    /// Returns `QuantityOverflow` if the result would not fit in a `u32`.
    pub fn add_stock(&mut self, amount: u32) -> Result<u32, ProductError> {
        self.quantity = self
            .quantity
            .checked_add(amount)
            .ok_or(ProductError::QuantityOverflow {
                current: self.quantity,
                requested: amount,
            })?;
        Ok(self.quantity)
    }

    /// Decreases the stock on hand by `amount` and returns the new quantity.
    ///
    /// # Errors
    /// Returns `InsufficientStock` if `amount` exceeds the stock on hand.
    /// The quantity is left unchanged in that case.
    pub fn remove_stock(&mut self, amount: u32) -> Result<u32, ProductError> {
        if self.quantity >= amount {
            self.quantity -= amount;
            Ok(self.quantity)
        } else {
            Err(ProductError::InsufficientStock {
                requested: amount,
                available: self.quantity,
            })
        }
    }

    /// Handles stock actions.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current stock level
    /// - `AddStock(amount)`: Increments stock by the specified amount
    /// - `RemoveStock(amount)`: Decrements stock by the specified amount
    pub fn handle_action(&mut self, action: StockAction) -> Result<StockActionResult, ProductError> {
        match action {
            StockAction::CheckStock => Ok(StockActionResult::CheckStock(self.quantity)),
            StockAction::AddStock(amount) => self.add_stock(amount).map(StockActionResult::AddStock),
            StockAction::RemoveStock(amount) => {
                self.remove_stock(amount).map(StockActionResult::RemoveStock)
            }
        }
    }
}
