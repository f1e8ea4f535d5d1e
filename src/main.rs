mod domain;
mod error;
mod inventory;
mod stock;

mod app_system;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod integration_tests;

use tokio::io::BufReader;
use tracing::{error, info};
use crate::app_system::{sample_inventory, setup_tracing, Session};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting inventory console");

    // The one inventory for this run, handed to the session by value
    let inventory = sample_inventory();
    let stdin = BufReader::new(tokio::io::stdin());
    let mut session = Session::new(inventory, stdin, tokio::io::stdout());

    let end = session.run().await.map_err(|e| {
        error!(error = %e, "Console session failed");
        e.to_string()
    })?;

    info!(?end, "Application completed successfully");
    Ok(())
}
