/// Stock actions that can be performed on a product.
///
/// These are the only operations that mutate a product after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    /// Reads the current stock level without modifying it.
    #[allow(dead_code)]
    CheckStock,
    /// Adds the given amount to the stock on hand.
    AddStock(u32),
    /// Removes the given amount from the stock on hand.
    ///
    /// # Errors
    /// Will fail, leaving stock untouched, if the amount exceeds available stock.
    RemoveStock(u32),
}

/// Results from StockActions - variants match 1:1 with StockAction.
/// Every variant carries the stock level after the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockActionResult {
    CheckStock(u32),
    AddStock(u32),
    RemoveStock(u32),
}

impl StockActionResult {
    pub fn quantity(self) -> u32 {
        match self {
            StockActionResult::CheckStock(quantity)
            | StockActionResult::AddStock(quantity)
            | StockActionResult::RemoveStock(quantity) => quantity,
        }
    }
}
