use std::os::raw::c_int;
use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::Parser;

/// Loads the add-2 test enclave and calls into it once.
#[derive(Debug, Clone, Parser)]
#[command(name = "app", version)]
pub struct Config {
    /// Signed enclave image to load.
    #[arg(long, env = "ENCLAVE_FILE", default_value = "enclave.signed.so")]
    pub enclave: PathBuf,

    /// Launch the enclave in debug mode. `SGX_DEBUG` takes the SDK's 0/1 values.
    #[arg(long, env = "SGX_DEBUG", value_parser = FalseyValueParser::new())]
    pub debug: bool,

    /// Value handed to the enclave.
    #[arg(default_value_t = 40, allow_negative_numbers = true)]
    pub input: c_int,
}
