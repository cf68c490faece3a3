use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=static");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // OUT_DIR is target/<profile>/build/backend-xxx/out, the binary lands in target/<profile>
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    if source_config.exists() {
        fs::copy(&source_config, target_dir.join("config.toml"))
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }

    // Fixtures are served and used as seed data from next to the binary
    let static_src = manifest_dir.join("static");
    let static_dest = target_dir.join("static");
    fs::create_dir_all(&static_dest)
        .unwrap_or_else(|e| panic!("Failed to create {:?}: {}", static_dest, e));
    for entry in fs::read_dir(&static_src).expect("static directory is missing") {
        let path = entry.expect("unreadable static entry").path();
        if let Some(name) = path.file_name() {
            fs::copy(&path, static_dest.join(name))
                .unwrap_or_else(|e| panic!("Failed to copy {:?}: {}", path, e));
        }
    }
}
