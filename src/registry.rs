use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::errors::Result;
use crate::models::PluginRecord;

/// The registry file: a top-level `plugins` array of raw records.
///
/// Records stay untyped here so the validator can report missing and
/// malformed fields itself instead of surfacing deserialization errors.
#[derive(Debug, Deserialize)]
pub struct Registry {
    pub plugins: Vec<Value>,
}

impl Registry {
    /// Convert raw records into typed [`PluginRecord`]s.
    ///
    /// Intended for use after local validation has passed; a record that
    /// fails validation may also fail this conversion.
    pub fn records(&self) -> Result<Vec<PluginRecord>> {
        self.plugins
            .iter()
            .map(|raw| Ok(serde_json::from_value(raw.clone())?))
            .collect()
    }
}

/// Read and parse a registry JSON file.
pub fn read_registry(path: &Path) -> Result<Registry> {
    let content = fs::read_to_string(path)?;
    let registry = serde_json::from_str(&content)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    use crate::models::Variant;

    const SAMPLE: &str = r#"{
        "plugins": [
            {
                "name": "hello-npm",
                "variant": "npm",
                "description": "An npm plugin",
                "submittedAt": "2025-01-19 10:00:00",
                "homepage": "https://example.com",
                "license": { "name": "MIT", "url": "https://mit-license.org" },
                "authors": [{ "name": "Jane", "homepage": "https://jane.dev" }],
                "repositories": [
                    { "kind": "npm", "url": "https://www.npmjs.com/package/hello-npm", "branch": "" }
                ]
            }
        ]
    }"#;

    #[test]
    fn read_registry_parses_plugins() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plugins.json");
        fs::write(&path, SAMPLE).unwrap();
        let registry = read_registry(&path).unwrap();
        assert_eq!(registry.plugins.len(), 1);
        assert_eq!(registry.plugins[0]["name"], "hello-npm");
    }

    #[test]
    fn read_registry_missing_file_is_io_error() {
        let result = read_registry(Path::new("/nonexistent/plugins.json"));
        assert!(matches!(result, Err(crate::RegistryError::Io(_))));
    }

    #[test]
    fn read_registry_invalid_json_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plugins.json");
        fs::write(&path, "{ not json }").unwrap();
        let result = read_registry(&path);
        assert!(matches!(result, Err(crate::RegistryError::Json(_))));
    }

    #[test]
    fn read_registry_without_plugins_field_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plugins.json");
        fs::write(&path, r#"{ "entries": [] }"#).unwrap();
        let result = read_registry(&path);
        assert!(matches!(result, Err(crate::RegistryError::Json(_))));
    }

    #[test]
    fn records_produces_typed_entries() {
        let registry: Registry = serde_json::from_str(SAMPLE).unwrap();
        let records = registry.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "hello-npm");
        assert_eq!(records[0].variant, Variant::Npm);
    }

    #[test]
    fn records_rejects_malformed_entry() {
        let registry = Registry {
            plugins: vec![serde_json::json!({ "name": "broken" })],
        };
        assert!(registry.records().is_err());
    }
}
