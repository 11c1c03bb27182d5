use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};

use crate::de::{default_true, flexible_bool, string_or_number};

/// A certificate issued and renewed by the ACME client.
#[derive(Clone, Debug, Deserialize, Serialize, Documented, DocumentedFields)]
pub struct Certificate {
    /// Certificate identifier. Compared as a string, numbers are accepted.
    #[serde(alias = "certificateid", deserialize_with = "string_or_number")]
    pub id: String,

    /// Whether this certificate is active.
    /// Default: true
    #[serde(default = "default_true", deserialize_with = "flexible_bool")]
    pub enabled: bool,

    /// Common name of the certificate.
    #[serde(default)]
    pub name: String,

    /// Free-form description.
    pub description: Option<String>,

    /// Additional subject alternative names.
    #[serde(default)]
    pub alt_names: Vec<String>,

    /// Name of the ACME account used to issue the certificate.
    pub account: Option<String>,

    /// Name of the challenge validation method.
    pub validation_method: Option<String>,

    /// Key type and length, e.g. "key_4096" or "key_ec256".
    /// Default: "key_4096"
    #[serde(default = "default_key_length")]
    pub key_length: String,

    /// Renew this certificate automatically.
    /// Default: true
    #[serde(default = "default_true", deserialize_with = "flexible_bool")]
    pub auto_renewal: bool,

    /// Days between renewals.
    /// Default: 60
    #[serde(default = "default_renew_interval")]
    pub renew_interval: u32,

    /// UUIDs of the actions to run after the certificate was renewed.
    #[serde(default)]
    pub restart_actions: Vec<String>,
}

fn default_key_length() -> String {
    "key_4096".to_string()
}

fn default_renew_interval() -> u32 {
    60
}

impl Certificate {
    /// All names covered by the certificate, common name first.
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.alt_names.iter().map(String::as_str))
            .filter(|name| !name.is_empty())
    }
}
