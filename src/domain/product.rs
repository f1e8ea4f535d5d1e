use std::fmt;

/// Distinguishes plain stock from products that carry extra attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    General,
    /// Electronics carry a warranty period, fixed at creation.
    Electronics { warranty_months: u32 },
}

/// Represents a product in the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub(crate) quantity: u32,
    pub kind: ProductKind,
}

impl Product {
    /// Creates a plain product.
    ///
    /// # Arguments
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `quantity` - Initial stock quantity
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            kind: ProductKind::General,
        }
    }

    /// Creates an electronics product with a warranty period in months.
    pub fn electronics(
        name: impl Into<String>,
        price: f64,
        quantity: u32,
        warranty_months: u32,
    ) -> Self {
        Self {
            kind: ProductKind::Electronics { warranty_months },
            ..Self::new(name, price, quantity)
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn warranty_months(&self) -> Option<u32> {
        match self.kind {
            ProductKind::General => None,
            ProductKind::Electronics { warranty_months } => Some(warranty_months),
        }
    }

    /// Value of the stock on hand: `price * quantity`.
    pub fn total_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Detail rendering shown when a product is fetched from the console.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {}, Price: {}, Quantity: {}, Total Value: {}",
            self.name,
            self.price,
            self.quantity,
            self.total_value()
        )?;
        if let Some(months) = self.warranty_months() {
            write!(f, "\nWarranty Period: {} months", months)?;
        }
        Ok(())
    }
}
