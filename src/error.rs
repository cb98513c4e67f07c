use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LambdaRunError {
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Nothing to choose for '{label}'")]
    NoChoices { label: String },

    #[error("Lambda filename is required")]
    HandlerRequired,

    #[error("Failed to write {}: {source}", .path.display())]
    WriteBootstrap {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Command line is empty")]
    EmptyCommand,

    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("'{program}' exited unsuccessfully ({status})")]
    ExitStatus { program: String, status: ExitStatus },
}

impl LambdaRunError {
    pub fn no_choices(label: impl Into<String>) -> Self {
        Self::NoChoices {
            label: label.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LambdaRunError>;
