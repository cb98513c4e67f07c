use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, warn};

use crate::error::{LambdaRunError, Result};

pub const TIMEZONE: (&str, &str) = ("TZ", "UTC");

/// A generated file that is deleted when the guard goes out of scope.
#[derive(Debug)]
pub struct BootstrapFile {
    path: PathBuf,
}

impl BootstrapFile {
    pub fn write(path: impl Into<PathBuf>, contents: &str) -> Result<Self> {
        let path = path.into();
        std::fs::write(&path, contents).map_err(|source| LambdaRunError::WriteBootstrap {
            path: path.clone(),
            source,
        })?;
        debug!("wrote {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for BootstrapFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("removed {}", self.path.display()),
            Err(e) => warn!("could not remove {}: {e}", self.path.display()),
        }
    }
}

/// Runs `command` in `cwd` attached to this process's stdio and waits for it.
pub fn execute(command: &[String], cwd: &Path) -> Result<()> {
    let (program, args) = command.split_first().ok_or(LambdaRunError::EmptyCommand)?;

    info!("spawning {program} in {}", cwd.display());
    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .env(TIMEZONE.0, TIMEZONE.1)
        .status()
        .map_err(|source| LambdaRunError::Spawn {
            program: program.clone(),
            source,
        })?;

    if !status.success() {
        return Err(LambdaRunError::ExitStatus {
            program: program.clone(),
            status,
        });
    }
    Ok(())
}

/// Writes the bootstrap, runs `command`, then removes the bootstrap whatever
/// the outcome.
pub fn run_with_bootstrap(
    bootstrap_path: &Path,
    contents: &str,
    command: &[String],
    cwd: &Path,
) -> Result<()> {
    let bootstrap = BootstrapFile::write(bootstrap_path, contents)?;
    let result = execute(command, cwd);
    debug!("run finished, dropping {}", bootstrap.path().display());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn guard_removes_file_on_drop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lambda-runner.ts");
        {
            let guard = BootstrapFile::write(&path, "console.log('hi')").unwrap();
            assert_eq!(guard.path(), path.as_path());
            assert_eq!(fs::read_to_string(&path).unwrap(), "console.log('hi')");
        }
        assert!(!path.exists());
    }

    #[test]
    fn guard_tolerates_file_already_gone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lambda-runner.ts");
        let guard = BootstrapFile::write(&path, "").unwrap();
        fs::remove_file(&path).unwrap();
        drop(guard);
        assert!(!path.exists());
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("src").join("lambda-runner.ts");
        let err = BootstrapFile::write(&path, "").unwrap_err();
        assert!(matches!(err, LambdaRunError::WriteBootstrap { .. }));
    }

    #[test]
    fn empty_command_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = execute(&[], dir.path()).unwrap_err();
        assert!(matches!(err, LambdaRunError::EmptyCommand));
    }

    #[test]
    fn unknown_program_fails_to_spawn() {
        let dir = TempDir::new().unwrap();
        let err = execute(&args(&["lambda-run-no-such-engine"]), dir.path()).unwrap_err();
        assert!(matches!(err, LambdaRunError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_is_propagated() {
        let dir = TempDir::new().unwrap();
        assert!(execute(&args(&["sh", "-c", "exit 0"]), dir.path()).is_ok());

        let err = execute(&args(&["sh", "-c", "exit 3"]), dir.path()).unwrap_err();
        match err {
            LambdaRunError::ExitStatus { program, status } => {
                assert_eq!(program, "sh");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn child_runs_in_cwd_with_utc() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("marker"), "").unwrap();
        let check = args(&["sh", "-c", "test -f marker && test \"$TZ\" = UTC"]);
        assert!(execute(&check, dir.path()).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn bootstrap_lives_exactly_as_long_as_the_run() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lambda-runner.ts");

        let sees_file = args(&["sh", "-c", "test -f lambda-runner.ts"]);
        run_with_bootstrap(&path, "x", &sees_file, dir.path()).unwrap();
        assert!(!path.exists());

        let fails = args(&["sh", "-c", "exit 1"]);
        assert!(run_with_bootstrap(&path, "x", &fails, dir.path()).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn bootstrap_removed_when_spawn_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lambda-runner.ts");
        let missing = args(&["lambda-run-no-such-engine"]);
        assert!(run_with_bootstrap(&path, "x", &missing, dir.path()).is_err());
        assert!(!path.exists());
    }
}
