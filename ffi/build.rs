//! Generate `lakehouse_ffi.h` from the `extern "C"` surface into `OUT_DIR`.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src");

    let (Some(crate_dir), Some(out_dir)) = (
        env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from),
        env::var_os("OUT_DIR").map(PathBuf::from),
    ) else {
        println!("cargo:warning=CARGO_MANIFEST_DIR or OUT_DIR unset; header not generated");
        return;
    };
    let header = out_dir.join("lakehouse_ffi.h");

    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("LAKEHOUSE_FFI_H")
        .with_cpp_compat(true)
        .generate()
    {
        Ok(bindings) => {
            bindings.write_to_file(&header);
            println!("cargo:rustc-env=LAKEHOUSE_FFI_HEADER={}", header.display());
        }
        Err(err) => println!("cargo:warning=header not generated: {err}"),
    }
}
