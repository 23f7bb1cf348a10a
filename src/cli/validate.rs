use std::path::Path;

use plugreg::{HttpFetch, RegistryError, ValidationError};

pub(crate) fn run(registry_path: &Path, remote: bool, format: super::Format) {
    let registry = match plugreg::read_registry(registry_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("cannot read registry {}: {e}", registry_path.display());
            std::process::exit(1);
        }
    };

    let count = registry.plugins.len();
    if let Err(e) = check(&registry, remote) {
        match e {
            RegistryError::Validation(v) => report_failure(&v, format),
            other => eprintln!("{other}"),
        }
        std::process::exit(1);
    }

    match format {
        super::Format::Text => eprintln!("ok: {count} plugins validated"),
        super::Format::Json => {
            let json = serde_json::json!({ "status": "ok", "plugins": count });
            println!("{json}");
        }
    }
}

/// Local validation, then the optional remote cross-check.
fn check(registry: &plugreg::Registry, remote: bool) -> Result<(), RegistryError> {
    plugreg::validate(&registry.plugins)?;

    if remote {
        let records = registry.records()?;
        plugreg::verify_registry(&records, &HttpFetch::new())?;
    }
    Ok(())
}

fn report_failure(error: &ValidationError, format: super::Format) {
    match format {
        super::Format::Text => eprintln!("{error}"),
        super::Format::Json => {
            let json = serde_json::json!({
                "status": "error",
                "kind": error.kind(),
                "message": error.to_string(),
            });
            println!("{json}");
        }
    }
}
