//! Constants used throughout acme-core.

/// Backend command listing the locally installed packages.
pub const FIRMWARE_LOCAL_COMMAND: &str = "firmware local";

/// Field delimiter of the package inventory records.
pub const INVENTORY_FIELD_DELIMITER: &str = "|||";

/// Number of fields in a package inventory record.
pub const INVENTORY_FIELD_COUNT: usize = 6;

/// First `-` delimited name segments that mark a package as a plugin.
pub const PLUGIN_PREFIXES: [&str; 2] = ["os", "ospriv"];
