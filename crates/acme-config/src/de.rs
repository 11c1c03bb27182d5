//! Deserialization helpers for configuration values.
//!
//! Flags in the appliance configuration are traditionally written as the strings `"1"` and
//! `"0"`. They are parsed into `bool` here, once, when the configuration is loaded.

use serde::{de, Deserialize, Deserializer};

/// Internal enum for deserializing boolean values that may be strings or integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum FlexiBool {
    Bool(bool),
    Integer(i64),
    String(String),
}

/// Internal enum for identifiers that may be written as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Integer(i64),
}

pub fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match FlexiBool::deserialize(deserializer)? {
        FlexiBool::Bool(b) => Ok(b),
        FlexiBool::Integer(1) => Ok(true),
        FlexiBool::Integer(0) => Ok(false),
        FlexiBool::Integer(n) => {
            Err(de::Error::invalid_value(
                de::Unexpected::Signed(n),
                &"a valid boolean (1/0)",
            ))
        }
        FlexiBool::String(s) => {
            match s.to_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(true),
                "false" | "no" | "0" => Ok(false),
                _ => {
                    Err(de::Error::invalid_value(
                        de::Unexpected::Str(&s),
                        &"a valid boolean (true/false, yes/no, 1/0)",
                    ))
                }
            }
        }
    }
}

pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => Ok(s),
        StringOrNumber::Integer(n) => Ok(n.to_string()),
    }
}

pub(crate) fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Flag {
        #[serde(deserialize_with = "flexible_bool")]
        enabled: bool,
    }

    #[derive(Deserialize)]
    struct Id {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
    }

    fn flag(input: &str) -> Result<bool, toml::de::Error> {
        toml::from_str::<Flag>(input).map(|f| f.enabled)
    }

    #[test]
    fn test_flexible_bool_strings() {
        assert!(flag(r#"enabled = "1""#).unwrap());
        assert!(!flag(r#"enabled = "0""#).unwrap());
        assert!(flag(r#"enabled = "yes""#).unwrap());
        assert!(!flag(r#"enabled = "False""#).unwrap());
    }

    #[test]
    fn test_flexible_bool_native_and_integer() {
        assert!(flag("enabled = true").unwrap());
        assert!(!flag("enabled = false").unwrap());
        assert!(flag("enabled = 1").unwrap());
        assert!(!flag("enabled = 0").unwrap());
    }

    #[test]
    fn test_flexible_bool_rejects_garbage() {
        assert!(flag(r#"enabled = "maybe""#).is_err());
        assert!(flag(r#"enabled = """#).is_err());
        assert!(flag("enabled = 2").is_err());
    }

    #[test]
    fn test_string_or_number() {
        let id: Id = toml::from_str(r#"id = "abc""#).unwrap();
        assert_eq!(id.id, "abc");

        let id: Id = toml::from_str("id = 42").unwrap();
        assert_eq!(id.id, "42");
    }
}
