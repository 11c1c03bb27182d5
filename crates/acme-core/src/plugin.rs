//! Installed plugin lookup.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    backend::Backend,
    constants::FIRMWARE_LOCAL_COMMAND,
    firmware::{parse_local_inventory, PackageRecord},
    AcmeResult,
};

/// Plugin packages of the local inventory, keyed by full package name.
///
/// Only local package data is queried, the remote repository is never consulted.
#[derive(Debug, Default, Clone)]
pub struct PluginInventory {
    plugins: BTreeMap<String, PackageRecord>,
}

impl PluginInventory {
    /// Keeps the plugin packages of `records`. A later record replaces an earlier one of the
    /// same name.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PackageRecord>,
    {
        let plugins = records
            .into_iter()
            .filter(PackageRecord::is_plugin)
            .map(|record| (record.name.clone(), record))
            .collect();

        Self {
            plugins,
        }
    }

    /// Queries the backend for the local inventory.
    pub fn fetch_local<B: Backend + ?Sized>(backend: &B) -> AcmeResult<Self> {
        let output = backend.configd_run(FIRMWARE_LOCAL_COMMAND)?;
        let inventory = Self::from_records(parse_local_inventory(&output));
        debug!(plugins = inventory.len(), "read local plugin inventory");
        Ok(inventory)
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.plugins
            .get(name)
            .is_some_and(|record| record.installed)
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.plugins.get(name)
    }

    /// Plugins ordered by package name.
    pub fn iter(&self) -> impl Iterator<Item = &PackageRecord> {
        self.plugins.values()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

/// Whether the plugin package `name` is installed locally.
pub fn is_plugin_installed<B: Backend + ?Sized>(backend: &B, name: &str) -> AcmeResult<bool> {
    Ok(PluginInventory::fetch_local(backend)?.is_installed(name))
}
