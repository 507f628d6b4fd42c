use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR missing"));
    let resources_root = manifest_dir.join("resources");

    if !resources_root.exists() {
        panic!("Resources directory not found: {}", resources_root.display());
    }

    let mut resource_paths = Vec::new();
    collect_resource_files(&resources_root, &mut resource_paths);
    resource_paths.sort();

    println!("cargo:rerun-if-changed={}", resources_root.display());
    for path in &resource_paths {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    let generated = generate_resources_rs(&resources_root, &resource_paths);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR missing"));
    fs::write(out_dir.join("generated_resources.rs"), generated)
        .expect("Failed to write generated_resources.rs");
}

fn collect_resource_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|err| panic!("Failed to read dir {}: {}", dir.display(), err));

    for entry in entries {
        let entry = entry.unwrap_or_else(|err| panic!("Failed to read dir entry: {}", err));
        let path = entry.path();

        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        if path.is_dir() {
            collect_resource_files(&path, out);
            continue;
        }

        out.push(path);
    }
}

fn generate_resources_rs(resources_root: &Path, resource_paths: &[PathBuf]) -> String {
    let mut out = String::new();
    out.push_str("pub static BUNDLED_RESOURCES: &[(&str, &[u8])] = &[\n");

    for path in resource_paths {
        let key = key_for_path(resources_root, path);

        out.push_str("    (\"");
        out.push_str(&escape_rust_string(&key));
        out.push_str("\", include_bytes!(\"");
        out.push_str(&escape_rust_string(&path.display().to_string()));
        out.push_str("\")),\n");
    }

    out.push_str("];\n");
    out
}

fn key_for_path(resources_root: &Path, path: &Path) -> String {
    let relative = path
        .strip_prefix(resources_root)
        .unwrap_or_else(|_| panic!("Resource path is not under resources: {}", path.display()));

    relative.to_string_lossy().replace('\\', "/")
}

fn escape_rust_string(input: &str) -> String {
    input.replace('\\', "\\\\").replace('"', "\\\"")
}
