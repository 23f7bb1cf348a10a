use std::collections::HashSet;

use serde_json::Value;

use crate::checks::{is_valid_timestamp, is_valid_url};
use crate::errors::ValidationError;

/// Known plugin distribution kinds.
pub const VARIANTS: &[&str] = &["npm", "git", "app"];

/// Known repository hosting platforms.
pub const REPO_KINDS: &[&str] = &["github", "gitee", "gitcode", "gitlab", "npm"];

/// Maximum `description` length in characters.
pub const MAX_DESCRIPTION_LEN: usize = 50;

/// Fields every record must carry with a non-empty value.
const REQUIRED_FIELDS: &[&str] = &[
    "name",
    "variant",
    "description",
    "license",
    "submittedAt",
    "homepage",
    "authors",
    "repositories",
];

/// Validate a full plugin collection.
///
/// Runs the cross-record uniqueness check first (cheapest, most globally
/// impactful), then per-record validation in declaration order. Fail-fast:
/// the first violated rule aborts the run and is returned as the sole
/// diagnostic.
pub fn validate(plugins: &[Value]) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for record in plugins {
        if let Some(name) = record.get("name").and_then(Value::as_str) {
            if !seen.insert(name) {
                return Err(ValidationError::DuplicateName {
                    name: name.to_string(),
                });
            }
        }
    }

    for record in plugins {
        validate_record(record)?;
    }
    Ok(())
}

/// Validate one record: structural completeness, field formats, author and
/// repository entries, then variant-specific rules.
///
/// The input is untyped on purpose; no prior schema enforcement is assumed.
pub fn validate_record(record: &Value) -> Result<(), ValidationError> {
    let plugin = plugin_name(record);

    for &field in REQUIRED_FIELDS {
        if !record.get(field).is_some_and(is_truthy) {
            return Err(ValidationError::MissingField { plugin, field });
        }
    }

    let submitted_at = str_field(record, "submittedAt");
    if !is_valid_timestamp(submitted_at) {
        return Err(ValidationError::InvalidTimestamp {
            plugin,
            value: submitted_at.to_string(),
        });
    }

    let description = str_field(record, "description");
    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong { plugin, length });
    }

    validate_license(&plugin, &record["license"])?;
    validate_authors(&plugin, &record["authors"])?;
    validate_repositories(&plugin, &record["repositories"])?;

    let variant = str_field(record, "variant");
    if !VARIANTS.contains(&variant) {
        return Err(ValidationError::InvalidVariant {
            plugin,
            value: variant.to_string(),
        });
    }

    let homepage = str_field(record, "homepage");
    if !is_valid_url(homepage) {
        return Err(ValidationError::InvalidHomepage {
            plugin,
            value: homepage.to_string(),
        });
    }

    validate_variant_payload(&plugin, variant, record)
}

/// `license` must carry a non-empty `name` and a valid `url`.
fn validate_license(plugin: &str, license: &Value) -> Result<(), ValidationError> {
    let name = license.get("name").and_then(Value::as_str).unwrap_or("");
    let url = license.get("url").and_then(Value::as_str).unwrap_or("");
    if name.is_empty() || url.is_empty() || !is_valid_url(url) {
        return Err(ValidationError::InvalidLicense {
            plugin: plugin.to_string(),
        });
    }
    Ok(())
}

/// Each author needs a non-empty `name` and a valid-URL `homepage`.
/// Iteration follows declared order; the first violation wins.
fn validate_authors(plugin: &str, authors: &Value) -> Result<(), ValidationError> {
    // A non-array value is not a sequence of authors at all.
    let Some(authors) = authors.as_array() else {
        return Err(ValidationError::MissingField {
            plugin: plugin.to_string(),
            field: "authors",
        });
    };
    for author in authors {
        let name = author.get("name").and_then(Value::as_str).unwrap_or("");
        if name.is_empty() {
            return Err(ValidationError::MissingAuthorName {
                plugin: plugin.to_string(),
            });
        }
        let homepage = author.get("homepage").and_then(Value::as_str).unwrap_or("");
        if homepage.is_empty() || !is_valid_url(homepage) {
            return Err(ValidationError::InvalidAuthorHomepage {
                plugin: plugin.to_string(),
                value: homepage.to_string(),
            });
        }
    }
    Ok(())
}

/// Each repository needs a known `kind`, a valid `url`, and a `branch`
/// consistent with the kind: empty for `npm`, non-empty for everything
/// else.
fn validate_repositories(plugin: &str, repositories: &Value) -> Result<(), ValidationError> {
    let Some(repositories) = repositories.as_array() else {
        return Err(ValidationError::MissingField {
            plugin: plugin.to_string(),
            field: "repositories",
        });
    };
    for repo in repositories {
        let kind = repo.get("kind").and_then(Value::as_str).unwrap_or("");
        if !REPO_KINDS.contains(&kind) {
            return Err(ValidationError::InvalidRepoKind {
                plugin: plugin.to_string(),
                value: kind.to_string(),
            });
        }
        let url = repo.get("url").and_then(Value::as_str).unwrap_or("");
        if url.is_empty() || !is_valid_url(url) {
            return Err(ValidationError::InvalidRepoUrl {
                plugin: plugin.to_string(),
                value: url.to_string(),
            });
        }
        let branch = repo.get("branch").and_then(Value::as_str).unwrap_or("");
        if kind == "npm" {
            if !branch.is_empty() {
                return Err(ValidationError::UnexpectedBranch {
                    plugin: plugin.to_string(),
                    url: url.to_string(),
                });
            }
        } else if branch.is_empty() {
            return Err(ValidationError::MissingBranch {
                plugin: plugin.to_string(),
                url: url.to_string(),
            });
        }
    }
    Ok(())
}

/// Variant-specific rules: `app` plugins must list direct download links,
/// each a valid URL. `files` on an `npm` or `git` plugin is unused, not an
/// error.
fn validate_variant_payload(
    plugin: &str,
    variant: &str,
    record: &Value,
) -> Result<(), ValidationError> {
    match variant {
        "app" => {
            let files = record
                .get("files")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            if files.is_empty() {
                return Err(ValidationError::MissingFiles {
                    plugin: plugin.to_string(),
                });
            }
            for file in files {
                let url = file.as_str().unwrap_or("");
                if !is_valid_url(url) {
                    return Err(ValidationError::InvalidFileUrl {
                        plugin: plugin.to_string(),
                        value: url.to_string(),
                    });
                }
            }
            Ok(())
        }
        "npm" | "git" => Ok(()),
        // Defensive; the membership check above already rejects this.
        other => Err(ValidationError::InvalidVariant {
            plugin: plugin.to_string(),
            value: other.to_string(),
        }),
    }
}

/// A string field's value, or `""` when absent or not a string.
fn str_field<'a>(record: &'a Value, field: &str) -> &'a str {
    record.get(field).and_then(Value::as_str).unwrap_or("")
}

/// The record's `name` for diagnostics, or `unknown` when unusable.
fn plugin_name(record: &Value) -> String {
    record
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("unknown")
        .to_string()
}

/// Presence semantics for required fields: strings must be non-empty,
/// arrays non-empty, objects and other scalars non-null.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Bool(b) => *b,
        Value::Number(_) | Value::Object(_) => true,
    }
}
