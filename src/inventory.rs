use tracing::{debug, info, instrument, warn};
use crate::domain::Product;
use crate::error::{InventoryError, ProductError};
use crate::stock::StockAction;

/// Outcome of a stock operation on one product.
///
/// `after` equals `before` when the product rejected the change; `rejection`
/// then says why.
#[derive(Debug, Clone, PartialEq)]
pub struct StockChange {
    pub name: String,
    pub before: u32,
    pub after: u32,
    pub rejection: Option<ProductError>,
}

impl StockChange {
    pub fn is_applied(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Ordered, owning collection of products, addressed by 0-based index.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a product at the end of the inventory.
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
        debug!(count = self.products.len(), "Product added");
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Product> {
        self.products.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter()
    }

    /// Yields `(position, name)` pairs with 1-based positions, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.products
            .iter()
            .enumerate()
            .map(|(index, product)| (index + 1, product.name.as_str()))
    }

    /// Combined value of all stock on hand.
    pub fn total_value(&self) -> f64 {
        self.iter().map(Product::total_value).sum()
    }

    /// Renders the details of the product at `index`.
    #[instrument(skip(self))]
    pub fn show_details(&self, index: usize) -> Result<String, InventoryError> {
        let product = self.resolve(index)?;
        debug!(product_name = %product.name, "Rendering product details");
        Ok(product.to_string())
    }

    /// Adds `amount` units to the product at `index`.
    #[instrument(skip(self))]
    pub fn add_stock(&mut self, index: usize, amount: u32) -> Result<StockChange, InventoryError> {
        self.apply(index, StockAction::AddStock(amount))
    }

    /// Removes `amount` units from the product at `index`.
    ///
    /// An over-removal is not an error at this level: the returned change
    /// reports the unchanged quantity and the rejection.
    #[instrument(skip(self))]
    pub fn remove_stock(&mut self, index: usize, amount: u32) -> Result<StockChange, InventoryError> {
        self.apply(index, StockAction::RemoveStock(amount))
    }

    fn resolve(&self, index: usize) -> Result<&Product, InventoryError> {
        self.get(index).ok_or_else(|| self.invalid_selection(index))
    }

    fn apply(&mut self, index: usize, action: StockAction) -> Result<StockChange, InventoryError> {
        let invalid = self.invalid_selection(index);
        let product = self.get_mut(index).ok_or(invalid)?;
        let before = product.quantity();

        let (after, rejection) = match product.handle_action(action) {
            Ok(result) => {
                info!(product_name = %product.name, before, after = result.quantity(), "Stock updated");
                (result.quantity(), None)
            }
            Err(e) => {
                warn!(product_name = %product.name, error = %e, "Stock change rejected");
                (before, Some(e))
            }
        };

        Ok(StockChange {
            name: product.name.clone(),
            before,
            after,
            rejection,
        })
    }

    fn invalid_selection(&self, index: usize) -> InventoryError {
        InventoryError::InvalidSelection {
            index,
            count: self.products.len(),
        }
    }
}

impl FromIterator<Product> for Inventory {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}
