// Shared build script helper: turns a crate README into its rustdoc front page.
// Include it in build.rs with: include!("../build_common.rs");
//
// The including file needs:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Rewrite a crate's README.md so its links resolve inside rustdoc.
///
/// `](src/foo.rs)` becomes `](foo)` so module links point at module pages.
/// The result is written to `$OUT_DIR/README_GENERATED.md`.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");

    let readme_path = Path::new(crate_dir).join("README.md");
    let content = fs::read_to_string(&readme_path).unwrap_or_default();

    let rustdoc_content = content.replace("](src/", "](").replace(".rs)", ")");

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let dest_path = Path::new(&out_dir).join("README_GENERATED.md");
    fs::write(dest_path, rustdoc_content).expect("OUT_DIR is writable");
}
