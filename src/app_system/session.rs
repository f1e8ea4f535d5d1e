use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};
use crate::error::{ConsoleError, InventoryError};
use crate::inventory::{Inventory, StockChange};
use super::menu::Operation;

const SELECT_PROMPT: &str = "\nEnter the product number to select: ";
const CHOICE_PROMPT: &str = "Enter your choice: ";
const ADD_PROMPT: &str = "Enter the number of products to add: ";
const REMOVE_PROMPT: &str = "Enter the number of products to remove: ";

const INVALID_SELECTION: &str = "Invalid product selection! Please select a valid product.\n";
const INVALID_CHOICE: &str = "Invalid choice! Please enter a valid option.\n";
const INVALID_NUMBER: &str = "Invalid input! Please enter a whole number.\n";
const NOT_ENOUGH_STOCK: &str = "Not enough stock available!\n";
const EXIT_MESSAGE: &str = "Exiting the program.\n";

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked the exit operation.
    Exited,
    /// The input stream closed before the user exited.
    EndOfInput,
}

/// The interactive loop: list products, take a selection, run one operation, repeat.
///
/// Owns the inventory for the lifetime of the session. Input and output are
/// generic so the same loop runs against stdin/stdout or in-memory buffers.
pub struct Session<R, W> {
    inventory: Inventory,
    input: R,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (Inventory, W) {
        (self.inventory, self.output)
    }

    /// Runs until the user exits or input ends.
    ///
    /// # Errors
    /// Only console read/write failures are returned; invalid input is reported
    /// to the user and the loop continues.
    #[instrument(name = "console_session", skip(self))]
    pub async fn run(&mut self) -> Result<SessionEnd, ConsoleError> {
        info!(products = self.inventory.len(), "Session starting");
        if self.inventory.is_empty() {
            warn!("Inventory is empty, every selection will be rejected");
        }

        let end = loop {
            if let Some(end) = self.step().await? {
                break end;
            }
        };

        info!(?end, total_value = self.inventory.total_value(), "Session ended");
        Ok(end)
    }

    /// One pass through the loop. Returns `Some` when the session should stop.
    async fn step(&mut self) -> Result<Option<SessionEnd>, ConsoleError> {
        let list = self.product_list();
        self.write(&list).await?;

        let Some(position) = self.prompt_number::<i64>(SELECT_PROMPT).await? else {
            return Ok(Some(SessionEnd::EndOfInput));
        };
        let Some(index) = self.index_for(position) else {
            warn!(position, count = self.inventory.len(), "Invalid product selection");
            self.write(INVALID_SELECTION).await?;
            return Ok(None);
        };

        self.write(&Operation::menu()).await?;
        let Some(choice) = self.prompt_number::<i64>(CHOICE_PROMPT).await? else {
            return Ok(Some(SessionEnd::EndOfInput));
        };

        match Operation::from_choice(choice) {
            Some(Operation::FetchDetails) => {
                let text = match self.inventory.show_details(index) {
                    Ok(details) => format!("{}\n", details),
                    Err(e) => Self::selection_failed(e),
                };
                self.write(&text).await?;
            }
            Some(Operation::AddStock) => {
                let Some(amount) = self.prompt_number::<u32>(ADD_PROMPT).await? else {
                    return Ok(Some(SessionEnd::EndOfInput));
                };
                let text = match self.inventory.add_stock(index, amount) {
                    Ok(change) => Self::added_text(&change),
                    Err(e) => Self::selection_failed(e),
                };
                self.write(&text).await?;
            }
            Some(Operation::RemoveStock) => {
                let Some(amount) = self.prompt_number::<u32>(REMOVE_PROMPT).await? else {
                    return Ok(Some(SessionEnd::EndOfInput));
                };
                let text = match self.inventory.remove_stock(index, amount) {
                    Ok(change) => Self::removed_text(&change),
                    Err(e) => Self::selection_failed(e),
                };
                self.write(&text).await?;
            }
            Some(Operation::Exit) => {
                self.write(EXIT_MESSAGE).await?;
                return Ok(Some(SessionEnd::Exited));
            }
            None => {
                debug!(choice, "Unrecognised operation");
                self.write(INVALID_CHOICE).await?;
            }
        }

        Ok(None)
    }

    fn product_list(&self) -> String {
        let mut list = String::from("\n--- Available Products ---\n");
        for (position, name) in self.inventory.names() {
            list.push_str(&format!("{}. {}\n", position, name));
        }
        list
    }

    /// Converts a 1-based position typed by the user into a checked 0-based index.
    fn index_for(&self, position: i64) -> Option<usize> {
        let index = usize::try_from(position.checked_sub(1)?).ok()?;
        (index < self.inventory.len()).then_some(index)
    }

    fn added_text(change: &StockChange) -> String {
        debug!(product_name = %change.name, before = change.before, after = change.after, "Reporting stock change");
        match &change.rejection {
            None => format!(
                "Stock added successfully! Updated Quantity of {}: {}\n",
                change.name, change.after
            ),
            Some(e) => format!("{}\nUpdated Quantity of {}: {}\n", e, change.name, change.after),
        }
    }

    fn removed_text(change: &StockChange) -> String {
        debug!(product_name = %change.name, before = change.before, after = change.after, "Reporting stock change");
        if change.is_applied() {
            format!(
                "Stock removed successfully! Remaining Quantity of {}: {}\n",
                change.name, change.after
            )
        } else {
            format!(
                "{}Remaining Quantity of {}: {}\n",
                NOT_ENOUGH_STOCK, change.name, change.after
            )
        }
    }

    fn selection_failed(e: InventoryError) -> String {
        warn!(error = %e, "Selection no longer resolves");
        INVALID_SELECTION.to_string()
    }

    /// Prompts until the reply parses as `T`. Returns `None` once input is exhausted.
    async fn prompt_number<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>, ConsoleError> {
        loop {
            self.write(prompt).await?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf).await? == 0 {
                debug!("Input closed");
                return Ok(None);
            }

            // Undecodable bytes are bad input, not a console failure.
            let parsed = std::str::from_utf8(&buf)
                .ok()
                .and_then(|line| line.trim().parse().ok());
            match parsed {
                Some(value) => return Ok(Some(value)),
                None => {
                    let shown = String::from_utf8_lossy(&buf);
                    debug!(input = shown.trim(), "Rejected non-numeric input");
                    self.write(INVALID_NUMBER).await?;
                }
            }
        }
    }

    async fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}
