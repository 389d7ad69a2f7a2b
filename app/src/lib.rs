pub mod config;
pub mod error;
pub mod sgx_mode;

#[cfg(feature = "sgx")]
pub mod enclave;

pub use config::Config;
pub use error::{AppError, Result};
pub use sgx_mode::SgxMode;

#[cfg(feature = "sgx")]
pub use enclave::TestEnclave;
