use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

use crate::error::{LambdaRunError, Result};

/// Asks the user to pick one entry from an ordered list.
pub trait Prompt {
    /// `Ok(None)` means the user dismissed the prompt without choosing.
    fn select(&self, label: &str, choices: &[String]) -> Result<Option<String>>;
}

/// Arrow-key selection on the controlling terminal.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn select(&self, label: &str, choices: &[String]) -> Result<Option<String>> {
        if choices.is_empty() {
            return Err(LambdaRunError::no_choices(label));
        }
        let picked = Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(choices)
            .default(0)
            .interact_opt()?;
        Ok(picked.and_then(|idx| choices.get(idx).cloned()))
    }
}
