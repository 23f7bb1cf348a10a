use serde::{Deserialize, Serialize};

/// Hosting platform for a plugin's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoKind {
    Github,
    Gitee,
    Gitcode,
    Gitlab,
    Npm,
}

impl RepoKind {
    /// The lowercase wire name of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitee => "gitee",
            Self::Gitcode => "gitcode",
            Self::Gitlab => "gitlab",
            Self::Npm => "npm",
        }
    }
}

/// One source repository declaration.
///
/// `branch` must be non-empty for every kind except `npm`, where it must
/// be exactly the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub kind: RepoKind,
    pub url: String,
    #[serde(default)]
    pub branch: String,
}

/// License name and link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub url: String,
}

/// One plugin author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub homepage: String,
}

/// Distribution kind with its variant-specific payload.
///
/// Modeled as a tagged union so an `npm` or `git` plugin cannot carry
/// `files` at the type level; only `app` plugins have direct download
/// links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum Variant {
    Npm,
    Git,
    App { files: Vec<String> },
}

/// One validated entry of the plugin registry.
///
/// The validator works on raw JSON records (the boundary input is
/// untyped); this typed form is produced only after local validation
/// passes and feeds the remote cross-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRecord {
    pub name: String,
    #[serde(flatten)]
    pub variant: Variant,
    pub description: String,
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,
    pub homepage: String,
    pub license: License,
    pub authors: Vec<Author>,
    pub repositories: Vec<Repository>,
}
