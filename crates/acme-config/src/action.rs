use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};

use crate::de::{default_true, flexible_bool};

/// An action run after a certificate was issued or renewed.
#[derive(Clone, Debug, Deserialize, Serialize, Documented, DocumentedFields)]
pub struct Action {
    /// Unique identifier referenced from `restart_actions`.
    pub uuid: String,

    /// Whether this action runs.
    /// Default: true
    #[serde(default = "default_true", deserialize_with = "flexible_bool")]
    pub enabled: bool,

    /// Short name of the action.
    #[serde(default)]
    pub name: String,

    /// Free-form description.
    pub description: Option<String>,

    /// Type of action, e.g. "restart_gui" or "configd".
    #[serde(rename = "type")]
    pub action_type: Option<String>,

    /// Backend command for actions of type "configd".
    pub command: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parse() {
        let action: Action = toml::from_str(
            r#"
            uuid = "0c4a3c1e-6d0f-4b2e-9f3a-2b8f5d1e7a90"
            name = "restart web ui"
            type = "restart_gui"
            "#,
        )
        .unwrap();

        assert_eq!(action.uuid, "0c4a3c1e-6d0f-4b2e-9f3a-2b8f5d1e7a90");
        assert!(action.enabled);
        assert_eq!(action.action_type.as_deref(), Some("restart_gui"));
        assert!(action.command.is_none());
    }

    #[test]
    fn test_action_type_key() {
        let action: Action = toml::from_str("uuid = \"a\"\ntype = \"configd\"").unwrap();
        assert_eq!(action.action_type.as_deref(), Some("configd"));

        let serialized = toml::to_string(&action).unwrap();
        assert!(serialized.contains("type = \"configd\""));
    }

    #[test]
    fn test_action_requires_uuid() {
        let result: Result<Action, _> = toml::from_str(r#"name = "nameless""#);
        assert!(result.is_err());
    }
}
