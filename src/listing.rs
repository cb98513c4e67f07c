use std::path::Path;

use tracing::debug;

pub const HANDLER_SUFFIX: &str = ".ts";

/// Support files in `src/` that are never offered as handlers.
pub const IGNORED_SOURCES: &[&str] = &[
    "index.ts",
    "lambda-runner.ts",
    "environment.d.ts",
    "cli.ts",
    "bootstrap.ts",
];

/// Names of the immediate entries of `path`, files and directories alike.
///
/// Never fails: an unresolvable or unreadable directory lists as empty, so a
/// project without `events/` still reaches handler selection.
pub fn list_filenames(path: &Path) -> Vec<String> {
    let absolute = match std::path::absolute(path) {
        Ok(p) => p,
        Err(e) => {
            debug!("cannot resolve {}: {e}", path.display());
            return Vec::new();
        }
    };

    let entries = match std::fs::read_dir(&absolute) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("cannot list {}: {e}", absolute.display());
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| match entry.file_name().into_string() {
            Ok(name) => Some(name),
            Err(raw) => {
                debug!("skipping non UTF-8 entry {raw:?} in {}", absolute.display());
                None
            }
        })
        .collect()
}

pub fn is_handler_source(name: &str) -> bool {
    name.ends_with(HANDLER_SUFFIX) && !IGNORED_SOURCES.contains(&name)
}

pub fn handler_candidates(names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter(|name| is_handler_source(name))
        .cloned()
        .collect()
}
