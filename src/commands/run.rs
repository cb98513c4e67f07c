use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::bootstrap::{self, BOOTSTRAP_FILENAME};
use crate::config::RunnerConfig;
use crate::docker;
use crate::error::{LambdaRunError, Result};
use crate::listing;
use crate::output;
use crate::prompt::Prompt;
use crate::runner;

pub const EVENT_LABEL: &str = "Filename event";
pub const HANDLER_LABEL: &str = "Filename lambda";

/// Project directory the lambda lives in.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn current() -> Self {
        Self::new(".")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn events_dir(&self) -> PathBuf {
        self.root.join("events")
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    pub fn dockerfile(&self) -> PathBuf {
        self.root.join("Dockerfile")
    }

    pub fn bootstrap_path(&self) -> PathBuf {
        self.src_dir().join(BOOTSTRAP_FILENAME)
    }
}

/// Event path handed to the container, relative to its working directory.
/// Empty when no event was picked.
pub fn container_event_path(event: Option<&str>) -> String {
    event.map(|name| format!("events/{name}")).unwrap_or_default()
}

fn select_event(project: &Project, prompt: &dyn Prompt) -> Option<String> {
    let events = listing::list_filenames(&project.events_dir());
    if events.is_empty() {
        info!("no events found, running with an empty event");
        return None;
    }
    match prompt.select(EVENT_LABEL, &events) {
        Ok(choice) => choice,
        Err(e) => {
            warn!("event selection failed, continuing without one: {e}");
            None
        }
    }
}

fn select_handler(project: &Project, prompt: &dyn Prompt) -> Result<String> {
    let sources = listing::list_filenames(&project.src_dir());
    let handlers = listing::handler_candidates(&sources);

    match prompt.select(HANDLER_LABEL, &handlers) {
        Ok(Some(handler)) if !handler.is_empty() => Ok(handler),
        Ok(_) => Err(LambdaRunError::HandlerRequired),
        Err(e) => {
            output::print_error(&LambdaRunError::HandlerRequired.to_string());
            Err(e)
        }
    }
}

pub fn run(project: &Project, config: &RunnerConfig, prompt: &dyn Prompt) -> Result<()> {
    let event = select_event(project, prompt);
    let handler = select_handler(project, prompt)?;
    info!(handler = %handler, event = ?event, "selected");

    let image = docker::resolve_image(&project.dockerfile(), &config.default_image);
    let command = docker::run_command(config, &image, &container_event_path(event.as_deref()));
    output::print_command(&command);

    let script = bootstrap::generate(&handler);
    runner::run_with_bootstrap(&project.bootstrap_path(), &script, &command, project.root())
}
