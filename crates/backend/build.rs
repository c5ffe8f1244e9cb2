use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// Places the workspace config.toml next to the compiled binary so the
// exe-relative lookup in shared::config finds it.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let source = workspace_root().join("config.toml");
    if !source.exists() {
        println!(
            "cargo:warning=no config.toml at {:?}, the binary will use its embedded defaults",
            source
        );
        return;
    }

    let dest = profile_dir().join("config.toml");
    fs::copy(&source, &dest)
        .unwrap_or_else(|e| panic!("Failed to copy config.toml to {:?}: {}", dest, e));
}

/// target/debug or target/release, resolved from OUT_DIR
/// (OUT_DIR looks like target/<profile>/build/backend-xxx/out).
fn profile_dir() -> PathBuf {
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();
    Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory")
        .to_path_buf()
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root")
        .to_path_buf()
}
