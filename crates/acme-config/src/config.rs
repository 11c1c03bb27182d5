use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::{LazyLock, RwLock},
};

use acme_utils::path::{resolve_path, xdg_config_home};
use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;
use tracing::{debug, info, warn};

use crate::{
    action::Action,
    annotations::{annotate_toml_array_of_tables, annotate_toml_table},
    backend::{BackendSettings, DEFAULT_CONFIGCTL_PATH},
    certificate::Certificate,
    display::DisplaySettings,
    error::{ConfigError, Result},
    settings::Settings,
};

/// ACME client configuration
#[derive(Clone, Debug, Deserialize, Serialize, Documented, DocumentedFields)]
pub struct Config {
    /// Certificates managed by the client, in configuration order.
    #[serde(default)]
    pub certificates: Vec<Certificate>,

    /// Actions that can be run after a certificate was renewed.
    #[serde(default)]
    pub actions: Vec<Action>,

    /// Global service settings.
    #[serde(default)]
    pub settings: Settings,

    /// Backend command channel.
    #[serde(default)]
    pub backend: BackendSettings,

    /// CLI display settings.
    pub display: Option<DisplaySettings>,
}

pub static CONFIG_PATH: LazyLock<RwLock<PathBuf>> = LazyLock::new(|| {
    RwLock::new(match std::env::var("ACME_CONFIG") {
        Ok(path_str) => PathBuf::from(path_str),
        Err(_) => xdg_config_home().join("acme-client").join("config.toml"),
    })
});

/// Returns the configuration file path currently in effect.
pub fn config_path() -> PathBuf {
    CONFIG_PATH
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .to_path_buf()
}

pub fn set_config_path(path: PathBuf) {
    let mut config_path = CONFIG_PATH
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *config_path = path;
}

impl Config {
    pub fn default_config() -> Self {
        Self {
            certificates: Vec::new(),
            actions: Vec::new(),
            settings: Settings::default(),
            backend: BackendSettings {
                configctl_path: Some(DEFAULT_CONFIGCTL_PATH.to_string()),
            },
            display: Some(DisplaySettings {
                icons: Some(true),
            }),
        }
    }

    /// Loads the configuration from [`CONFIG_PATH`].
    /// If the configuration file is not found, the default configuration is used.
    pub fn new() -> Result<Self> {
        let config_path = config_path();

        let mut config = match fs::read_to_string(&config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(
                    "no configuration at {}, using defaults",
                    config_path.display()
                );
                Self::default_config()
            }
            Err(err) => return Err(ConfigError::IoError(err)),
        };

        config.resolve()?;

        Ok(config)
    }

    /// Loads the configuration from an explicit file, which must exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::ConfigNotFound(path.display().to_string()));
            }
            Err(err) => return Err(ConfigError::IoError(err)),
        };

        let mut config: Config = toml::from_str(&content)?;
        config.resolve()?;

        Ok(config)
    }

    pub fn resolve(&mut self) -> Result<()> {
        match self.backend.configctl_path.as_deref() {
            Some(path) if path.trim().is_empty() => return Err(ConfigError::EmptyConfigctlPath),
            Some(_) => {}
            None => self.backend.configctl_path = Some(DEFAULT_CONFIGCTL_PATH.to_string()),
        }

        let mut seen_certificates = HashSet::new();
        for certificate in &self.certificates {
            if !seen_certificates.insert(certificate.id.as_str()) {
                warn!(
                    "Duplicate certificate id '{}', lookups return the first one",
                    certificate.id
                );
            }
        }

        let mut seen_actions = HashSet::new();
        for action in &self.actions {
            if !seen_actions.insert(action.uuid.as_str()) {
                warn!(
                    "Duplicate action uuid '{}', lookups return the first one",
                    action.uuid
                );
            }
        }

        for certificate in &self.certificates {
            for uuid in &certificate.restart_actions {
                if !seen_actions.contains(uuid.as_str()) {
                    warn!(
                        "Certificate '{}' references unknown restart action '{}'",
                        certificate.id, uuid
                    );
                }
            }
        }

        Ok(())
    }

    /// Returns the first certificate whose id equals `certificate_id`.
    pub fn get_by_certificate_id(&self, certificate_id: &str) -> Option<&Certificate> {
        self.certificates
            .iter()
            .find(|certificate| certificate.id == certificate_id)
    }

    /// Returns the first action whose uuid equals `uuid`.
    pub fn get_by_action_id(&self, uuid: &str) -> Option<&Action> {
        self.actions.iter().find(|action| action.uuid == uuid)
    }

    /// Whether the service is enabled.
    ///
    /// With `check_certificates`, at least one enabled certificate is required as well.
    pub fn is_enabled(&self, check_certificates: bool) -> bool {
        if !self.settings.enabled {
            return false;
        }

        !check_certificates
            || self
                .certificates
                .iter()
                .any(|certificate| certificate.enabled)
    }

    /// Resolves the restart actions of `certificate` in their configured order.
    /// Unknown uuids are skipped.
    pub fn restart_actions<'a>(&'a self, certificate: &'a Certificate) -> Vec<&'a Action> {
        certificate
            .restart_actions
            .iter()
            .filter_map(|uuid| {
                let action = self.get_by_action_id(uuid);
                if action.is_none() {
                    warn!(
                        "Skipping unknown restart action '{}' of certificate '{}'",
                        uuid, certificate.id
                    );
                }
                action
            })
            .collect()
    }

    pub fn configctl_path(&self) -> Result<PathBuf> {
        if let Ok(env_path) = std::env::var("ACME_CONFIGCTL") {
            return Ok(resolve_path(&env_path)?);
        }
        let path = self
            .backend
            .configctl_path
            .as_deref()
            .unwrap_or(DEFAULT_CONFIGCTL_PATH);
        Ok(resolve_path(path)?)
    }

    pub fn display(&self) -> DisplaySettings {
        self.display.clone().unwrap_or_default()
    }

    pub fn to_annotated_document(&self) -> Result<DocumentMut> {
        let toml_string = toml::to_string_pretty(self)?;
        let mut doc = toml_string.parse::<DocumentMut>()?;

        annotate_toml_table::<Config>(doc.as_table_mut(), true)?;

        if let Some(table) = doc.get_mut("settings").and_then(|item| item.as_table_mut()) {
            annotate_toml_table::<Settings>(table, false)?;
        }

        if let Some(table) = doc.get_mut("backend").and_then(|item| item.as_table_mut()) {
            annotate_toml_table::<BackendSettings>(table, false)?;
        }

        if let Some(table) = doc.get_mut("display").and_then(|item| item.as_table_mut()) {
            annotate_toml_table::<DisplaySettings>(table, false)?;
        }

        if let Some(array) = doc
            .get_mut("certificates")
            .and_then(|item| item.as_array_of_tables_mut())
        {
            annotate_toml_array_of_tables::<Certificate>(array)?;
        }

        if let Some(array) = doc
            .get_mut("actions")
            .and_then(|item| item.as_array_of_tables_mut())
        {
            annotate_toml_array_of_tables::<Action>(array)?;
        }

        Ok(doc)
    }
}

pub fn generate_default_config() -> Result<()> {
    let config_path = config_path();

    if config_path.exists() {
        return Err(ConfigError::ConfigAlreadyExists);
    }

    let def_config = Config::default_config();
    let annotated_doc = def_config.to_annotated_document()?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&config_path, annotated_doc.to_string())?;
    info!(
        "Default configuration file generated with documentation at: {}",
        config_path.display()
    );
    Ok(())
}
