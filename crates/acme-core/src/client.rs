//! The ACME client model: configuration lookups plus plugin state.

use acme_config::{action::Action, certificate::Certificate, config::Config};

use crate::{
    backend::{Backend, ConfigdBackend},
    error::AcmeError,
    plugin::{self, PluginInventory},
    AcmeResult,
};

/// Read-only view of the ACME client configuration and the host it runs on.
pub struct AcmeClient<B: Backend = ConfigdBackend> {
    config: Config,
    backend: B,
}

impl AcmeClient<ConfigdBackend> {
    /// Builds a client that reaches the backend through the configured `configctl`.
    pub fn from_config(config: Config) -> AcmeResult<Self> {
        let backend = ConfigdBackend::from_config(&config)?;
        Ok(Self::new(config, backend))
    }
}

impl<B: Backend> AcmeClient<B> {
    pub fn new(config: Config, backend: B) -> Self {
        Self {
            config,
            backend,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn get_by_certificate_id(&self, certificate_id: &str) -> Option<&Certificate> {
        self.config.get_by_certificate_id(certificate_id)
    }

    pub fn get_by_action_id(&self, uuid: &str) -> Option<&Action> {
        self.config.get_by_action_id(uuid)
    }

    pub fn is_enabled(&self, check_certificates: bool) -> bool {
        self.config.is_enabled(check_certificates)
    }

    /// Restart actions of the certificate `certificate_id`, in their configured order.
    pub fn restart_actions(&self, certificate_id: &str) -> AcmeResult<Vec<&Action>> {
        let certificate = self
            .get_by_certificate_id(certificate_id)
            .ok_or_else(|| AcmeError::CertificateNotFound(certificate_id.to_string()))?;
        Ok(self.config.restart_actions(certificate))
    }

    /// Checks the local package inventory for the plugin package `name`.
    pub fn is_plugin_installed(&self, name: &str) -> AcmeResult<bool> {
        plugin::is_plugin_installed(&self.backend, name)
    }

    pub fn installed_plugins(&self) -> AcmeResult<PluginInventory> {
        PluginInventory::fetch_local(&self.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticBackend(&'static str);

    impl Backend for StaticBackend {
        fn configd_run(&self, _command: &str) -> AcmeResult<String> {
            Ok(self.0.to_string())
        }
    }

    const CONFIG: &str = r#"
[settings]
enabled = "1"

[[certificates]]
id = "1"
name = "fw.example.com"
restart_actions = ["b", "a"]

[[actions]]
uuid = "a"
name = "restart web ui"

[[actions]]
uuid = "b"
name = "reload haproxy"
"#;

    fn client(inventory: &'static str) -> AcmeClient<StaticBackend> {
        let mut config: Config = toml::from_str(CONFIG).unwrap();
        config.resolve().unwrap();
        AcmeClient::new(config, StaticBackend(inventory))
    }

    #[test]
    fn test_lookups_delegate_to_config() {
        let client = client("");

        assert_eq!(
            client.get_by_certificate_id("1").unwrap().name,
            "fw.example.com"
        );
        assert!(client.get_by_certificate_id("2").is_none());
        assert_eq!(client.get_by_action_id("a").unwrap().name, "restart web ui");
        assert!(client.get_by_action_id("c").is_none());
        assert!(client.is_enabled(false));
        assert!(client.is_enabled(true));
    }

    #[test]
    fn test_restart_actions() {
        let client = client("");

        let actions = client.restart_actions("1").unwrap();
        let uuids: Vec<&str> = actions.iter().map(|a| a.uuid.as_str()).collect();
        assert_eq!(uuids, vec!["b", "a"]);

        let missing = client.restart_actions("9");
        assert!(matches!(missing, Err(AcmeError::CertificateNotFound(id)) if id == "9"));
    }

    #[test]
    fn test_is_plugin_installed() {
        let client = client(
            "os-acme-client|||3.20|||ACME Client|||1.2MiB|||0|||BSD2CLAUSE\n\
             acme.sh|||3.0.7|||ACME shell client|||1MiB|||0|||GPLv3",
        );

        assert!(client.is_plugin_installed("os-acme-client").unwrap());
        assert!(!client.is_plugin_installed("acme.sh").unwrap());
        assert!(!client.is_plugin_installed("os-haproxy").unwrap());
        assert_eq!(client.installed_plugins().unwrap().len(), 1);
    }
}
