use thiserror::Error;

/// A single violated validation rule.
///
/// Validation is fail-fast: the first violation aborts the run and is
/// surfaced as the sole diagnostic. Every message names the offending
/// plugin (`unknown` when the record has no usable `name`); remote-check
/// errors additionally carry the repository URL and transport reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent, null, or empty.
    #[error("plugin '{plugin}': missing required field `{field}`")]
    MissingField {
        plugin: String,
        field: &'static str,
    },

    /// `submittedAt` is not a valid `YYYY-MM-DD HH:mm:ss` date-time.
    #[error("plugin '{plugin}': invalid timestamp '{value}', expected YYYY-MM-DD HH:mm:ss")]
    InvalidTimestamp { plugin: String, value: String },

    /// `description` exceeds 50 characters.
    #[error("plugin '{plugin}': description exceeds 50 characters ({length})")]
    DescriptionTooLong { plugin: String, length: usize },

    /// `license` lacks a non-empty name or a valid URL.
    #[error("plugin '{plugin}': license must have a non-empty name and a valid url")]
    InvalidLicense { plugin: String },

    /// An author entry has an empty name.
    #[error("plugin '{plugin}': author name must not be empty")]
    MissingAuthorName { plugin: String },

    /// An author homepage is empty or not a valid URL.
    #[error("plugin '{plugin}': invalid author homepage '{value}'")]
    InvalidAuthorHomepage { plugin: String, value: String },

    /// A repository kind is outside the known hosting platforms.
    #[error("plugin '{plugin}': invalid repository kind '{value}'")]
    InvalidRepoKind { plugin: String, value: String },

    /// A repository URL is empty or not a valid URL.
    #[error("plugin '{plugin}': invalid repository url '{value}'")]
    InvalidRepoUrl { plugin: String, value: String },

    /// A non-npm repository entry has an empty branch.
    #[error("plugin '{plugin}': repository '{url}' requires a non-empty branch")]
    MissingBranch { plugin: String, url: String },

    /// An npm repository entry has a non-empty branch.
    #[error("plugin '{plugin}': npm repository '{url}' must have an empty branch")]
    UnexpectedBranch { plugin: String, url: String },

    /// `variant` is outside the known distribution kinds.
    #[error("plugin '{plugin}': invalid variant '{value}', expected npm, git, or app")]
    InvalidVariant { plugin: String, value: String },

    /// `homepage` is not a valid URL.
    #[error("plugin '{plugin}': invalid homepage '{value}'")]
    InvalidHomepage { plugin: String, value: String },

    /// An `app` file link is not a valid URL.
    #[error("plugin '{plugin}': invalid file url '{value}'")]
    InvalidFileUrl { plugin: String, value: String },

    /// An `app` plugin has no file links.
    #[error("plugin '{plugin}': app plugins must list at least one file url")]
    MissingFiles { plugin: String },

    /// Two records share the same name.
    #[error("duplicate plugin name '{name}'")]
    DuplicateName { name: String },

    /// A remote manifest fetch failed (transport error, bad status, timeout).
    #[error("plugin '{plugin}': fetch of '{url}' failed: {reason}")]
    RemoteFetchFailed {
        plugin: String,
        url: String,
        reason: String,
    },

    /// A fetched manifest does not carry a package name and version.
    #[error("plugin '{plugin}': manifest at '{url}' is missing name or version")]
    RemoteManifestIncomplete { plugin: String, url: String },
}

impl ValidationError {
    /// Stable machine-readable name for the violated rule.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "MissingField",
            Self::InvalidTimestamp { .. } => "InvalidTimestamp",
            Self::DescriptionTooLong { .. } => "DescriptionTooLong",
            Self::InvalidLicense { .. } => "InvalidLicense",
            Self::MissingAuthorName { .. } => "MissingAuthorName",
            Self::InvalidAuthorHomepage { .. } => "InvalidAuthorHomepage",
            Self::InvalidRepoKind { .. } => "InvalidRepoKind",
            Self::InvalidRepoUrl { .. } => "InvalidRepoUrl",
            Self::MissingBranch { .. } => "MissingBranch",
            Self::UnexpectedBranch { .. } => "UnexpectedBranch",
            Self::InvalidVariant { .. } => "InvalidVariant",
            Self::InvalidHomepage { .. } => "InvalidHomepage",
            Self::InvalidFileUrl { .. } => "InvalidFileUrl",
            Self::MissingFiles { .. } => "MissingFiles",
            Self::DuplicateName { .. } => "DuplicateName",
            Self::RemoteFetchFailed { .. } => "RemoteFetchFailed",
            Self::RemoteManifestIncomplete { .. } => "RemoteManifestIncomplete",
        }
    }
}

/// Errors that can occur during registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Registry validation found a problem.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Manifest synchronization error.
    #[error("sync error: {message}")]
    Sync { message: String },
}

/// Convenience alias for `Result<T, RegistryError>`.
pub type Result<T> = std::result::Result<T, RegistryError>;
