use dialoguer::{Confirm, Password};

use crate::Result;

/// Interactive questions asked during key generation.
///
/// Both calls block until the user answers. Behind a trait so tests can
/// script answers instead of driving a terminal.
pub trait Prompter {
    /// Yes/no confirmation with a default answer.
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;

    /// Masked text entry; an empty answer is allowed.
    fn password(&self, message: &str) -> Result<String>;
}

/// Prompter backed by dialoguer on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        let choice = Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()?;
        Ok(choice)
    }

    fn password(&self, message: &str) -> Result<String> {
        let entry = Password::new()
            .with_prompt(message)
            .allow_empty_password(true)
            .interact()?;
        Ok(entry)
    }
}
