pub mod checks;
pub mod errors;
pub mod models;
pub mod registry;
pub mod remote;
pub mod sync;
pub mod validator;

// Re-export key types at crate root for convenience.
pub use checks::{is_valid_timestamp, is_valid_url};
pub use errors::{RegistryError, Result, ValidationError};
pub use models::{Author, License, PluginRecord, RepoKind, Repository, Variant};
pub use registry::{read_registry, Registry};
pub use remote::{verify_record, verify_registry, Fetch, HttpFetch};
pub use sync::sync_manifest;
pub use validator::{validate, validate_record};
