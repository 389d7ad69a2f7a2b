use std::env;

#[allow(dead_code)]
#[path = "src/sgx_mode.rs"]
mod sgx_mode;

use sgx_mode::SgxMode;

fn main() {
    println!("cargo:rerun-if-env-changed=SGX_SDK");
    println!("cargo:rerun-if-env-changed=SGX_MODE");

    // Host-only builds (unit tests, docs) do not link against the SDK.
    if env::var_os("CARGO_FEATURE_SGX").is_none() {
        return;
    }

    let sdk_dir = env::var("SGX_SDK").unwrap_or_else(|_| "/opt/intel/sgxsdk".to_string());
    let mode = match env::var("SGX_MODE") {
        Ok(value) => SgxMode::parse(&value).unwrap_or_else(|| {
            println!(
                "cargo:warning=SGX_MODE was set to '{}', should be one of HW, SW or SIM; defaulting to SIM",
                value
            );
            SgxMode::DEFAULT
        }),
        Err(_) => SgxMode::DEFAULT,
    };

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    println!("cargo:rustc-link-search=native={}/../lib", manifest_dir);
    println!("cargo:rustc-link-lib=static=Enclave_u");
    println!("cargo:rustc-link-search=native={}/lib64", sdk_dir);

    for lib in mode.link_libraries().iter() {
        println!("cargo:rustc-link-lib=dylib={}", lib);
    }
}
