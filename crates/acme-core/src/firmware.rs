//! Parser for the local package inventory printed by the backend.
//!
//! The inventory is line oriented. Every line is one record made of exactly six fields joined
//! by a literal `|||`:
//!
//! ```text
//! record  = name "|||" version "|||" comment "|||" flatsize "|||" locked "|||" license
//! output  = record *( "\n" record )
//! ```
//!
//! Surrounding ASCII whitespace (space, tab, CR, LF, NUL, vertical tab) of the whole output is
//! ignored; single lines are taken as they are.
//! Lines that do not split into exactly six fields are skipped.

use tracing::trace;

use crate::constants::{INVENTORY_FIELD_COUNT, INVENTORY_FIELD_DELIMITER, PLUGIN_PREFIXES};

const OUTPUT_TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// One package of the local inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    pub comment: String,
    pub flatsize: String,
    pub locked: bool,
    pub license: String,
    /// Set for every record read from the local inventory.
    pub installed: bool,
}

impl PackageRecord {
    /// Parses a single inventory line, `None` if the field count does not match.
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(INVENTORY_FIELD_DELIMITER).collect();
        let [name, version, comment, flatsize, locked, license] = fields.as_slice() else {
            return None;
        };

        Some(Self {
            name: name.to_string(),
            version: version.to_string(),
            comment: comment.to_string(),
            flatsize: flatsize.to_string(),
            locked: *locked == "1",
            license: license.to_string(),
            installed: true,
        })
    }

    /// Whether the package follows the `os-<plugin>` / `ospriv-<plugin>` naming.
    pub fn is_plugin(&self) -> bool {
        is_plugin_name(&self.name)
    }
}

pub fn is_plugin_name(name: &str) -> bool {
    name.split('-')
        .next()
        .is_some_and(|prefix| PLUGIN_PREFIXES.contains(&prefix))
}

/// Parses the complete output of the local inventory command.
pub fn parse_local_inventory(output: &str) -> Vec<PackageRecord> {
    output
        .trim_matches(OUTPUT_TRIM_CHARS)
        .split('\n')
        .filter_map(|line| {
            let record = PackageRecord::parse_line(line);
            if record.is_none() {
                trace!(
                    line = line,
                    "skipping inventory line without {} fields",
                    INVENTORY_FIELD_COUNT
                );
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let record = PackageRecord::parse_line(
            "os-acme-client|||3.20|||ACME Client|||1.2MiB|||0|||BSD2CLAUSE",
        )
        .unwrap();

        assert_eq!(record.name, "os-acme-client");
        assert_eq!(record.version, "3.20");
        assert_eq!(record.comment, "ACME Client");
        assert_eq!(record.flatsize, "1.2MiB");
        assert!(!record.locked);
        assert_eq!(record.license, "BSD2CLAUSE");
        assert!(record.installed);
        assert!(record.is_plugin());
    }

    #[test]
    fn test_parse_line_locked() {
        let record = PackageRecord::parse_line("pkg|||1.20|||Package manager|||30MiB|||1|||BSD2CLAUSE")
            .unwrap();
        assert!(record.locked);
        assert!(!record.is_plugin());
    }

    #[test]
    fn test_parse_line_wrong_field_count() {
        assert!(PackageRecord::parse_line("").is_none());
        assert!(PackageRecord::parse_line("os-acme-client").is_none());
        assert!(PackageRecord::parse_line("os-acme-client|||3.20|||ACME|||1MiB|||0").is_none());
        assert!(PackageRecord::parse_line(
            "os-acme-client|||3.20|||ACME|||1MiB|||0|||BSD2CLAUSE|||extra"
        )
        .is_none());
    }

    #[test]
    fn test_parse_line_single_pipes_are_content() {
        let record =
            PackageRecord::parse_line("os-x|||1.0|||a | b || c|||1MiB|||0|||MIT").unwrap();
        assert_eq!(record.comment, "a | b || c");
    }

    #[test]
    fn test_parse_line_empty_fields() {
        let record = PackageRecord::parse_line("||||||||||||||||").unwrap();
        assert_eq!(record.name, "");
        assert!(!record.is_plugin());
    }

    #[test]
    fn test_is_plugin_name() {
        assert!(is_plugin_name("os-acme-client"));
        assert!(is_plugin_name("ospriv-internal"));
        assert!(is_plugin_name("os"));
        assert!(!is_plugin_name("opnsense"));
        assert!(!is_plugin_name("osx-tool"));
        assert!(!is_plugin_name("py311-os-thing"));
        assert!(!is_plugin_name("OS-acme-client"));
        assert!(!is_plugin_name(""));
    }

    #[test]
    fn test_parse_local_inventory_skips_malformed() {
        let output = "\n\
            os-acme-client|||3.20|||ACME Client|||1.2MiB|||0|||BSD2CLAUSE\n\
            garbage line\n\
            \n\
            curl|||8.5.0|||HTTP client|||3.1MiB|||0|||MIT\n\
            os-haproxy|||4.2|||HAProxy|||900KiB|||0\n\
            ospriv-secret|||1.0|||Private|||1KiB|||1|||BSD2CLAUSE\n";

        let records = parse_local_inventory(output);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["os-acme-client", "curl", "ospriv-secret"]);
    }

    #[test]
    fn test_parse_local_inventory_empty() {
        assert!(parse_local_inventory("").is_empty());
        assert!(parse_local_inventory("   \n\n").is_empty());
    }

    #[test]
    fn test_parse_local_inventory_keeps_inner_whitespace() {
        let records = parse_local_inventory(
            "  os-a|||1|||c|||1|||0|||MIT\n os-b|||1|||c|||1|||0|||MIT  ",
        );

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["os-a", " os-b"]);
        assert_eq!(records[1].license, "MIT");
    }

    #[test]
    fn test_parse_local_inventory_trims_ascii_whitespace_only() {
        let records = parse_local_inventory("\u{a0}os-a|||1|||c|||1|||0|||MIT\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "\u{a0}os-a");
        assert!(!records[0].is_plugin());

        let records = parse_local_inventory("\0\x0B\tos-b|||1|||c|||1|||0|||MIT\r\n\0");
        assert_eq!(records[0].name, "os-b");
        assert_eq!(records[0].license, "MIT");
    }
}
