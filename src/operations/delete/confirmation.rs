//! Confirmation for the delete operation
//!
//! The guard asks a [`Confirm`] implementation instead of reading the terminal
//! itself, so non-interactive callers and tests can supply their own policy.

use console::Style;
use inquire::InquireError;

use crate::error::Result;

/// Yes/no confirmation capability
pub trait Confirm {
    /// Ask once; `true` only on an affirmative answer
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Interactive confirmation on the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        match inquire::Confirm::new(prompt)
            .with_default(false)
            .with_help_message("Type 'y' to delete, anything else cancels")
            .prompt()
        {
            Ok(answer) => Ok(answer),
            // Esc and Ctrl-C are a refusal, not a failure
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Prompt text naming exactly the packages about to be deleted
pub fn confirmation_prompt(packages: &[String]) -> String {
    match packages {
        [single] => format!("Delete package '{single}'?"),
        many => format!("Delete {} packages: {}?", many.len(), many.join(", ")),
    }
}

/// Print the packages about to be deleted ahead of the prompt
pub fn print_deletion_summary(packages: &[String]) {
    println!("\nThe following package(s) will be deleted:");
    for name in packages {
        println!("  - {}", Style::new().bold().yellow().apply_to(name));
    }
    println!();
}
