use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=MEDIDOCS_ROOT_HINT");

    if let Ok(raw_hint) = env::var("MEDIDOCS_ROOT_HINT") {
        let candidate = PathBuf::from(raw_hint);
        let canonical = candidate.canonicalize().unwrap_or(candidate);

        println!("cargo:rustc-env=MEDIDOCS_ROOT_HINT={}", canonical.display());
    }
}
