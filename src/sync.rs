use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::errors::{RegistryError, Result};
use crate::registry::read_registry;

/// Copy the registry's `plugins` array into the target manifest.
///
/// Pure data transfer: the target is read, its `plugins` field overwritten
/// with the source's, and the file rewritten pretty-printed. No validation
/// happens here; the validator is expected to have run first. Returns the
/// number of plugins copied.
pub fn sync_manifest(registry_path: &Path, manifest_path: &Path) -> Result<usize> {
    let registry = read_registry(registry_path)?;

    let content = fs::read_to_string(manifest_path)?;
    let mut manifest: Value = serde_json::from_str(&content)?;
    let Some(object) = manifest.as_object_mut() else {
        return Err(RegistryError::Sync {
            message: format!("manifest {} is not a JSON object", manifest_path.display()),
        });
    };

    let count = registry.plugins.len();
    object.insert("plugins".to_string(), Value::Array(registry.plugins));

    let mut output = serde_json::to_string_pretty(&manifest)?;
    output.push('\n');
    fs::write(manifest_path, output)?;
    Ok(count)
}
