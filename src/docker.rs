use std::path::Path;

use tracing::{debug, info};

use crate::bootstrap::BOOTSTRAP_FILENAME;
use crate::config::RunnerConfig;

/// Token looked for, case-insensitively, on the base image line.
pub const BASE_IMAGE_MARKER: &str = "FROM";

/// Where the project directory is mounted inside the container.
pub const CONTAINER_WORKDIR: &str = "/app";

/// Position of the image tag in [`run_command`]'s output.
pub const IMAGE_INDEX: usize = 9;
/// Position of the event path, always the last element.
pub const EVENT_INDEX: usize = 14;
pub const COMMAND_LEN: usize = EVENT_INDEX + 1;

/// Base image of the project's Dockerfile, or `default` when it has none.
///
/// The first line containing `FROM` (any case) that has a second field wins;
/// the tag itself is not validated.
pub fn resolve_image(dockerfile: &Path, default: &str) -> String {
    let content = match std::fs::read(dockerfile) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("cannot read {}: {e}", dockerfile.display());
            return default.to_string();
        }
    };

    for line in String::from_utf8_lossy(&content).lines() {
        if !line.to_uppercase().contains(BASE_IMAGE_MARKER) {
            continue;
        }
        if let Some(image) = line.split_whitespace().nth(1) {
            info!("using base image {image} from {}", dockerfile.display());
            return image.to_string();
        }
    }

    debug!("no base image in {}, using {default}", dockerfile.display());
    default.to_string()
}

/// Command line that runs the generated bootstrap under `nodemon` inside the
/// base image, passing `event_path` through as its only argument.
///
/// `event_path` is appended even when empty; the bootstrap treats an empty
/// argument as "no event".
pub fn run_command(config: &RunnerConfig, image: &str, event_path: &str) -> Vec<String> {
    let watched = format!("ts-node -r tsconfig-paths/register src/{BOOTSTRAP_FILENAME}");
    let command: [String; COMMAND_LEN] = [
        config.engine.clone(),
        "run".into(),
        "-it".into(),
        "--network".into(),
        config.network.clone(),
        "-v".into(),
        format!(".:{CONTAINER_WORKDIR}"),
        "-w".into(),
        CONTAINER_WORKDIR.into(),
        image.to_string(),
        "npx".into(),
        "nodemon".into(),
        "--exec".into(),
        watched,
        event_path.to_string(),
    ];
    command.into()
}
