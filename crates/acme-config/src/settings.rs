use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};

use crate::de::{default_true, flexible_bool};

/// Global settings of the ACME client service.
#[derive(Clone, Debug, Deserialize, Serialize, Documented, DocumentedFields)]
pub struct Settings {
    /// Enables the ACME client service.
    /// Default: false
    #[serde(default, deserialize_with = "flexible_bool")]
    pub enabled: bool,

    /// ACME environment to issue certificates from: "production" or "staging".
    /// Default: "staging"
    #[serde(default)]
    pub environment: Environment,

    /// Renew certificates automatically when they are due.
    /// Default: true
    #[serde(default = "default_true", deserialize_with = "flexible_bool")]
    pub auto_renewal: bool,

    /// Local port used by the HTTP-01 challenge responder.
    /// Default: 43580
    #[serde(default = "default_challenge_port")]
    pub challenge_port: u16,

    /// Seconds to wait for restart actions to finish.
    /// Default: 600
    #[serde(default = "default_restart_timeout")]
    pub restart_timeout: u64,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production CA, issues trusted certificates
    Production,
    /// Staging CA, for testing without rate limits
    #[default]
    Staging,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Staging => write!(f, "staging"),
        }
    }
}

fn default_challenge_port() -> u16 {
    43580
}

fn default_restart_timeout() -> u64 {
    600
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: false,
            environment: Environment::default(),
            auto_renewal: true,
            challenge_port: default_challenge_port(),
            restart_timeout: default_restart_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults_from_empty_table() {
        let settings: Settings = toml::from_str("").unwrap();

        assert!(!settings.enabled);
        assert_eq!(settings.environment, Environment::Staging);
        assert!(settings.auto_renewal);
        assert_eq!(settings.challenge_port, 43580);
        assert_eq!(settings.restart_timeout, 600);
    }

    #[test]
    fn test_settings_string_flags() {
        let settings: Settings = toml::from_str(
            r#"
            enabled = "1"
            auto_renewal = "0"
            environment = "production"
            "#,
        )
        .unwrap();

        assert!(settings.enabled);
        assert!(!settings.auto_renewal);
        assert_eq!(settings.environment, Environment::Production);
        assert_eq!(settings.environment.to_string(), "production");
    }

    #[test]
    fn test_settings_invalid_environment() {
        let result: Result<Settings, _> = toml::from_str(r#"environment = "testing""#);
        assert!(result.is_err());
    }
}
