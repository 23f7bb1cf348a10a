use std::path::Path;

pub(crate) fn run(registry_path: &Path, manifest_path: &Path) {
    match plugreg::sync_manifest(registry_path, manifest_path) {
        Ok(count) => eprintln!("synced {count} plugins into {}", manifest_path.display()),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
