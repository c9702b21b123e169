// Shared build-script helper for rendering crate READMEs as rustdoc.
// Pulled into each crate's build.rs via: include!("../build_common.rs");
//
// The including file must import:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Rewrite a crate's README.md so it can be served as the crate-level docs.
///
/// Source links of the form `](src/foo.rs)` become `](foo)` so rustdoc
/// resolves them as module links, and relative links back to the workspace
/// README are rewritten to the repository URL from the root manifest.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let readme_path = Path::new(crate_dir).join("README.md");
    let Ok(content) = fs::read_to_string(&readme_path) else {
        return; // No README, nothing to generate
    };

    let mut rustdoc = content.replace("](src/", "](").replace(".rs)", ")");
    if let Some(url) = workspace_repo_url(crate_dir) {
        rustdoc = rustdoc.replace("](../../README.md", &format!("]({url}"));
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    fs::write(Path::new(&out_dir).join("README_GENERATED.md"), rustdoc).unwrap();
}

/// Repository URL from the workspace manifest, if declared.
fn workspace_repo_url(crate_dir: &str) -> Option<String> {
    let manifest = Path::new(crate_dir).parent()?.parent()?.join("Cargo.toml");
    let content = fs::read_to_string(manifest).ok()?;

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with("repository")
            && line.contains('=')
            && let Some(start) = line.find('"')
            && let Some(end) = line.rfind('"')
            && start < end
        {
            return Some(line[start + 1..end].to_string());
        }
    }
    None
}
