/// Operations offered once a product is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchDetails,
    AddStock,
    RemoveStock,
    Exit,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::FetchDetails,
        Operation::AddStock,
        Operation::RemoveStock,
        Operation::Exit,
    ];

    /// Maps a menu number to its operation. Anything outside 1-4 is `None`.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Operation::FetchDetails),
            2 => Some(Operation::AddStock),
            3 => Some(Operation::RemoveStock),
            4 => Some(Operation::Exit),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::FetchDetails => "Fetch product data",
            Operation::AddStock => "Add new stock",
            Operation::RemoveStock => "Remove stock",
            Operation::Exit => "Exit",
        }
    }

    /// Renders the numbered operations menu.
    pub fn menu() -> String {
        let mut menu = String::from("\n--- Operations ---\n");
        for (number, operation) in (1..).zip(Self::ALL) {
            menu.push_str(&format!("{}. {}\n", number, operation.label()));
        }
        menu
    }
}
