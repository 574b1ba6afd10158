//! User interaction for forgebaker.
//! The only question the generator asks is whether to replace an existing file.

use crate::error::{Error, Result};
use dialoguer::Confirm;

/// Source of yes/no answers, so generation can run without a terminal.
pub trait Prompter {
    /// Asks `prompt`, returning `true` right away when `skip` is set.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }

        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_skipped() {
        let prompter = DialoguerPrompter::new();
        assert!(prompter.confirm(true, "Overwrite?".to_string()).unwrap());
    }
}
