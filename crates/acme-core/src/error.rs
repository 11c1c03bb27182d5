//! Error types for acme-core.

use acme_config::error::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

/// Core error type for the ACME client model.
#[derive(Error, Diagnostic, Debug)]
pub enum AcmeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Error while {action}")]
    #[diagnostic(
        code(acme::io),
        help("Check that the configctl path is correct and executable")
    )]
    IoError {
        action: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Backend command '{command}' failed with {}: {stderr}", exit_status(.code))]
    #[diagnostic(
        code(acme::backend_command),
        help("Check that the backend daemon (configd) is running")
    )]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Certificate '{0}' not found")]
    #[diagnostic(
        code(acme::certificate_not_found),
        help("Check the certificate id in your configuration")
    )]
    CertificateNotFound(String),

    #[error("Action '{0}' not found")]
    #[diagnostic(
        code(acme::action_not_found),
        help("Check the action uuid in your configuration")
    )]
    ActionNotFound(String),
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code".to_string(),
    }
}

/// Trait for adding context to IO errors.
pub trait ErrorContext<T> {
    fn with_context<C>(self, context: C) -> std::result::Result<T, AcmeError>
    where
        C: FnOnce() -> String;
}

impl<T> ErrorContext<T> for std::io::Result<T> {
    fn with_context<C>(self, context: C) -> std::result::Result<T, AcmeError>
    where
        C: FnOnce() -> String,
    {
        self.map_err(|err| {
            AcmeError::IoError {
                action: context(),
                source: err,
            }
        })
    }
}
