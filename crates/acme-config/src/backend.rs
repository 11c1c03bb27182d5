use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIGCTL_PATH: &str = "/usr/local/sbin/configctl";

/// Settings for the backend command channel.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Documented, DocumentedFields)]
pub struct BackendSettings {
    /// Path to the configctl client used to reach the backend daemon.
    /// Default: "/usr/local/sbin/configctl"
    pub configctl_path: Option<String>,
}
