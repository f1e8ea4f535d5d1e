use crate::domain::Product;
use crate::inventory::Inventory;

/// Builds the inventory the console starts with.
pub fn sample_inventory() -> Inventory {
    let mut inventory = Inventory::new();
    inventory.add(Product::new("Laptop", 800.0, 10));
    inventory.add(Product::electronics("Smartphone", 600.0, 5, 24));
    inventory.add(Product::new("Laptop Bag", 50.0, 15));
    inventory.add(Product::new("Wireless Mouse", 25.0, 20));
    inventory.add(Product::new("Mechanical Keyboard", 100.0, 8));
    inventory
}
