//! Remote cross-validation of declared repositories.
//!
//! Each repository entry is probed for a well-known manifest file
//! (`package.json`, or the npm registry document for npm-kind entries).
//! The network dependency is isolated behind the [`Fetch`] trait so local
//! validation stays testable offline.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::errors::ValidationError;
use crate::models::{PluginRecord, RepoKind, Repository};

/// Manifest file probed on git-hosting repositories.
const MANIFEST_FILE: &str = "package.json";

/// Base URL of the npm registry.
const NPM_REGISTRY: &str = "https://registry.npmjs.org";

/// Bound on each fetch so a dead host cannot hang the run.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch capability used by the remote checks.
///
/// Returns the response body on success; transport failures, timeouts,
/// and non-success statuses are reported as the error string.
pub trait Fetch {
    fn fetch(&self, url: &str) -> std::result::Result<String, String>;
}

/// `ureq`-backed fetcher with a bounded global timeout.
pub struct HttpFetch {
    agent: ureq::Agent,
}

impl HttpFetch {
    #[must_use]
    pub fn new() -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(FETCH_TIMEOUT))
            .build();
        Self {
            agent: config.into(),
        }
    }
}

impl Default for HttpFetch {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetch {
    fn fetch(&self, url: &str) -> std::result::Result<String, String> {
        let mut response = self.agent.get(url).call().map_err(|e| e.to_string())?;
        response
            .body_mut()
            .read_to_string()
            .map_err(|e| e.to_string())
    }
}

/// Derive the manifest URL to probe for one repository entry.
///
/// Branch rules are asserted here, before any network call: npm entries
/// must have an empty branch, everything else a non-empty one.
pub fn manifest_url(record: &PluginRecord, repo: &Repository) -> Result<String, ValidationError> {
    match repo.kind {
        RepoKind::Npm => {
            if !repo.branch.is_empty() {
                return Err(ValidationError::UnexpectedBranch {
                    plugin: record.name.clone(),
                    url: repo.url.clone(),
                });
            }
            Ok(format!("{NPM_REGISTRY}/{}", record.name))
        }
        RepoKind::Github => {
            require_branch(record, repo)?;
            let path = repo_path(record, repo)?;
            Ok(format!(
                "https://raw.githubusercontent.com/{path}/{}/{MANIFEST_FILE}",
                repo.branch
            ))
        }
        RepoKind::Gitee | RepoKind::Gitlab | RepoKind::Gitcode => {
            require_branch(record, repo)?;
            let base = repo.url.trim_end_matches('/');
            Ok(format!("{base}/raw/{}/{MANIFEST_FILE}", repo.branch))
        }
    }
}

/// Verify every repository of one record, sequentially in declared order.
pub fn verify_record(record: &PluginRecord, fetch: &dyn Fetch) -> Result<(), ValidationError> {
    for repo in &record.repositories {
        let probe_url = manifest_url(record, repo)?;
        let body = fetch
            .fetch(&probe_url)
            .map_err(|reason| ValidationError::RemoteFetchFailed {
                plugin: record.name.clone(),
                url: repo.url.clone(),
                reason,
            })?;
        if !manifest_complete(&body) {
            return Err(ValidationError::RemoteManifestIncomplete {
                plugin: record.name.clone(),
                url: repo.url.clone(),
            });
        }
    }
    Ok(())
}

/// Verify every record of the collection. First failure aborts the run.
pub fn verify_registry(records: &[PluginRecord], fetch: &dyn Fetch) -> Result<(), ValidationError> {
    for record in records {
        verify_record(record, fetch)?;
    }
    Ok(())
}

fn require_branch(record: &PluginRecord, repo: &Repository) -> Result<(), ValidationError> {
    if repo.branch.is_empty() {
        return Err(ValidationError::MissingBranch {
            plugin: record.name.clone(),
            url: repo.url.clone(),
        });
    }
    Ok(())
}

/// The `owner/repo` path of a hosting URL, without leading slash or a
/// trailing `.git` suffix.
fn repo_path(record: &PluginRecord, repo: &Repository) -> Result<String, ValidationError> {
    let parsed = Url::parse(&repo.url).map_err(|_| ValidationError::InvalidRepoUrl {
        plugin: record.name.clone(),
        value: repo.url.clone(),
    })?;
    let path = parsed
        .path()
        .trim_matches('/')
        .trim_end_matches(".git")
        .to_string();
    if path.is_empty() {
        return Err(ValidationError::InvalidRepoUrl {
            plugin: record.name.clone(),
            value: repo.url.clone(),
        });
    }
    Ok(path)
}

/// A fetched manifest is complete when it parses as JSON carrying
/// non-empty string `name` and `version` fields.
fn manifest_complete(body: &str) -> bool {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return false;
    };
    let has = |field: &str| {
        value
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty())
    };
    has("name") && has("version")
}
