#[cfg(test)]
mod tests {
    use crate::app_system::SessionEnd;
    use crate::domain::Product;
    use crate::inventory::Inventory;
    use crate::app_system::sample_inventory;
    use crate::test_support::{run_raw_with, run_script, run_script_with};

    #[tokio::test]
    async fn test_exit_from_operations_menu() {
        let run = run_script(&["1", "4"]).await;

        assert_eq!(run.end, SessionEnd::Exited);
        assert!(run.output.contains("\n--- Available Products ---\n1. Laptop\n2. Smartphone\n3. Laptop Bag\n4. Wireless Mouse\n5. Mechanical Keyboard\n"));
        assert!(run.output.contains("\n--- Operations ---\n1. Fetch product data\n"));
        assert!(run.output.ends_with("Enter your choice: Exiting the program.\n"));
    }

    #[tokio::test]
    async fn test_fetch_details_for_electronics() {
        let run = run_script(&["2", "1", "1", "4"]).await;

        assert!(run.output.contains(
            "Product: Smartphone, Price: 600, Quantity: 5, Total Value: 3000\nWarranty Period: 24 months\n"
        ));
        assert_eq!(run.count("Warranty Period"), 1);
    }

    #[tokio::test]
    async fn test_add_stock_to_smartphone() {
        let run = run_script(&["2", "2", "5", "1", "4"]).await;

        assert!(run.output.contains("Stock added successfully! Updated Quantity of Smartphone: 10\n"));
        assert_eq!(run.inventory.get(1).unwrap().quantity(), 10);
    }

    #[tokio::test]
    async fn test_over_removal_is_rejected() {
        let run = run_script(&["1", "3", "100", "1", "4"]).await;

        assert!(run.output.contains("Not enough stock available!\nRemaining Quantity of Laptop: 10\n"));
        assert!(!run.output.contains("Stock removed successfully!"));
        assert_eq!(run.inventory.get(0).unwrap().quantity(), 10);
    }

    #[tokio::test]
    async fn test_remove_stock_within_available() {
        let run = run_script(&["5", "3", "8", "1", "4"]).await;

        assert!(run.output.contains("Stock removed successfully! Remaining Quantity of Mechanical Keyboard: 0\n"));
        assert_eq!(run.inventory.get(4).unwrap().quantity(), 0);
    }

    #[tokio::test]
    async fn test_zero_selection_rejected_before_menu() {
        let run = run_script(&["0"]).await;

        assert!(run.output.contains("Invalid product selection! Please select a valid product.\n"));
        assert_eq!(run.count("--- Operations ---"), 0);
        assert_eq!(run.count("--- Available Products ---"), 2);
        assert_eq!(run.end, SessionEnd::EndOfInput);
    }

    #[tokio::test]
    async fn test_out_of_range_selections_rejected() {
        let run = run_script(&["6", "-3", "99999999999", "1", "4"]).await;

        assert_eq!(run.count("Invalid product selection!"), 3);
        assert_eq!(run.count("--- Operations ---"), 1);
        assert_eq!(run.end, SessionEnd::Exited);
    }

    #[tokio::test]
    async fn test_unrecognised_choice_loops_back() {
        let run = run_script(&["1", "9", "1", "4"]).await;

        assert_eq!(run.count("Invalid choice! Please enter a valid option.\n"), 1);
        assert_eq!(run.count("--- Operations ---"), 2);
        assert_eq!(run.end, SessionEnd::Exited);
    }

    #[tokio::test]
    async fn test_non_numeric_input_is_reprompted() {
        let run = run_script(&["laptop", "4", "two", "2", "-1", "three", "3", "4", "4"]).await;

        assert_eq!(run.count("Invalid input! Please enter a whole number.\n"), 4);
        assert_eq!(run.count("Enter the number of products to add: "), 3);
        assert!(run.output.contains("Updated Quantity of Wireless Mouse: 23\n"));
        assert_eq!(run.inventory.get(3).unwrap().quantity(), 23);
        assert_eq!(run.end, SessionEnd::Exited);
    }

    #[tokio::test]
    async fn test_input_closing_mid_operation_ends_session() {
        let run = run_script(&["1", "2"]).await;

        assert_eq!(run.end, SessionEnd::EndOfInput);
        assert!(run.output.ends_with("Enter the number of products to add: "));
        assert_eq!(run.inventory.get(0).unwrap().quantity(), 10);
    }

    #[tokio::test]
    async fn test_stock_changes_persist_across_iterations() {
        let run = run_script(&["4", "3", "5", "4", "2", "2", "4", "1", "4"]).await;

        assert!(run.output.contains("Remaining Quantity of Wireless Mouse: 15\n"));
        assert!(run.output.contains("Updated Quantity of Wireless Mouse: 17\n"));
        assert!(run.output.contains("Product: Wireless Mouse, Price: 25, Quantity: 17, Total Value: 425\n"));
    }

    #[tokio::test]
    async fn test_empty_inventory_rejects_every_selection() {
        let run = run_script_with(Inventory::new(), &["1"]).await;

        assert!(run.output.starts_with("\n--- Available Products ---\n\nEnter the product number to select: "));
        assert_eq!(run.count("Invalid product selection!"), 1);
    }

    #[tokio::test]
    async fn test_custom_inventory_session() {
        let inventory: Inventory = vec![Product::electronics("Tablet", 300.0, 2, 12)].into_iter().collect();

        let run = run_script_with(inventory, &["1", "3", "2", "1", "4"]).await;

        assert!(run.output.contains("Remaining Quantity of Tablet: 0\n"));
        assert_eq!(run.inventory.total_value(), 0.0);
    }

    #[tokio::test]
    async fn test_undecodable_bytes_are_reprompted() {
        let run = run_raw_with(sample_inventory(), b"\xff\xfe\n1\n4\n").await;

        assert_eq!(run.end, SessionEnd::Exited);
        assert_eq!(run.count("Invalid input! Please enter a whole number.\n"), 1);
        assert_eq!(run.count("Enter the product number to select: "), 2);
        assert!(run.output.ends_with("Exiting the program.\n"));
    }
}
