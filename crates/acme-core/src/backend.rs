//! Command channel to the appliance backend daemon.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use acme_config::config::Config;
use tracing::{debug, trace};

use crate::{
    error::{AcmeError, ErrorContext},
    AcmeResult,
};

/// Synchronous channel that runs a backend command and returns its output.
pub trait Backend {
    /// Runs `command` (e.g. `"firmware local"`) and returns what it printed.
    fn configd_run(&self, command: &str) -> AcmeResult<String>;
}

/// [`Backend`] that runs commands through the `configctl` client.
#[derive(Debug, Clone)]
pub struct ConfigdBackend {
    program: PathBuf,
}

impl ConfigdBackend {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &Config) -> AcmeResult<Self> {
        Ok(Self::new(config.configctl_path()?))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Backend for ConfigdBackend {
    fn configd_run(&self, command: &str) -> AcmeResult<String> {
        debug!(
            program = %self.program.display(),
            command = command,
            "running backend command"
        );

        let output = Command::new(&self.program)
            .args(command.split_whitespace())
            .output()
            .with_context(|| format!("executing {} {}", self.program.display(), command))?;

        if !output.status.success() {
            return Err(AcmeError::CommandFailed {
                command: command.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        trace!(bytes = stdout.len(), "backend command finished");
        Ok(stdout)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn test_configd_run_passes_command_words() {
        let backend = ConfigdBackend::new("echo");
        let output = backend.configd_run("firmware   local").unwrap();
        assert_eq!(output, "firmware local\n");
    }

    #[test]
    fn test_configd_run_empty_output() {
        let backend = ConfigdBackend::new("true");
        assert_eq!(backend.configd_run("firmware local").unwrap(), "");
    }

    #[test]
    fn test_configd_run_non_zero_exit() {
        let backend = ConfigdBackend::new("false");
        let result = backend.configd_run("firmware local");

        match result {
            Err(AcmeError::CommandFailed { command, code, .. }) => {
                assert_eq!(command, "firmware local");
                assert_eq!(code, Some(1));
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_configd_run_missing_program() {
        let backend = ConfigdBackend::new("/nonexistent/acme/configctl");
        let result = backend.configd_run("firmware local");
        assert!(matches!(result, Err(AcmeError::IoError { .. })));
    }

    #[test]
    #[serial]
    fn test_from_config_uses_configured_path() {
        std::env::remove_var("ACME_CONFIGCTL");
        let mut config = Config::default_config();
        config.backend.configctl_path = Some("/opt/acme/configctl".to_string());

        let backend = ConfigdBackend::from_config(&config).unwrap();
        assert_eq!(backend.program(), Path::new("/opt/acme/configctl"));
    }
}
