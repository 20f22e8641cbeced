fn main() {
    #[cfg(feature = "headers")]
    generate_headers();
}

#[cfg(feature = "headers")]
fn generate_headers() {
    let crate_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by Cargo");
    cbindgen::Builder::new()
        .with_crate(crate_dir)
        .with_language(cbindgen::Language::C)
        .generate()
        .expect("Unable to generate C bindings")
        .write_to_file("include/headtail.h");
}
