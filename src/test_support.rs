//! # Session test support
//!
//! Drives a [`Session`] from a scripted list of input lines and captures
//! everything it prints, so end-to-end flows can be asserted without a terminal.

use crate::app_system::{sample_inventory, Session, SessionEnd};
use crate::inventory::Inventory;

/// Everything a scripted session left behind.
pub struct ScriptedRun {
    pub end: SessionEnd,
    pub output: String,
    pub inventory: Inventory,
}

impl ScriptedRun {
    /// Number of times `needle` appears in the captured output.
    pub fn count(&self, needle: &str) -> usize {
        self.output.matches(needle).count()
    }
}

/// Runs a session over the sample inventory, feeding it `lines` one per prompt.
pub async fn run_script(lines: &[&str]) -> ScriptedRun {
    run_script_with(sample_inventory(), lines).await
}

/// Runs a session over `inventory`, feeding it `lines` one per prompt.
pub async fn run_script_with(inventory: Inventory, lines: &[&str]) -> ScriptedRun {
    let mut script = lines.join("\n");
    if !script.is_empty() {
        script.push('\n');
    }

    run_raw_with(inventory, script.as_bytes()).await
}

/// Runs a session over `inventory`, feeding it `input` byte for byte.
pub async fn run_raw_with(inventory: Inventory, input: &[u8]) -> ScriptedRun {
    let mut session = Session::new(inventory, input, Vec::new());
    let end = session.run().await.expect("in-memory console never fails");
    let (inventory, output) = session.into_parts();

    ScriptedRun {
        end,
        output: String::from_utf8(output).expect("session writes UTF-8"),
        inventory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_script_ends_at_first_prompt() {
        let run = run_script(&[]).await;

        assert_eq!(run.end, SessionEnd::EndOfInput);
        assert_eq!(run.count("Enter the product number to select: "), 1);
        assert_eq!(run.inventory.len(), 5);
    }
}
