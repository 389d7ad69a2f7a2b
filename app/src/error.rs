use sgx_types::sgx_status_t;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create enclave from {path}: {}", .status.as_str())]
    Create { path: String, status: sgx_status_t },

    #[error("{ecall} failed: {}", .status.as_str())]
    Ecall {
        ecall: &'static str,
        status: sgx_status_t,
    },

    /// The enclave aborted; it cannot take further calls.
    #[error("enclave crashed during {0}")]
    EnclaveCrashed(&'static str),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Turns the status returned by an untrusted bridge function into a `Result`.
pub fn check_status(ecall: &'static str, status: sgx_status_t) -> Result<()> {
    match status {
        sgx_status_t::SGX_SUCCESS => Ok(()),
        sgx_status_t::SGX_ERROR_ENCLAVE_CRASHED => Err(AppError::EnclaveCrashed(ecall)),
        status => Err(AppError::Ecall { ecall, status }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_ok() {
        assert!(check_status("ecall_add_2", sgx_status_t::SGX_SUCCESS).is_ok());
    }

    #[test]
    fn crash_is_reported_as_crash() {
        let err = check_status("ecall_add_2", sgx_status_t::SGX_ERROR_ENCLAVE_CRASHED).unwrap_err();
        assert!(matches!(err, AppError::EnclaveCrashed("ecall_add_2")));
        assert_eq!(err.to_string(), "enclave crashed during ecall_add_2");
    }

    #[test]
    fn other_status_is_kept() {
        let err = check_status("ecall_add_2", sgx_status_t::SGX_ERROR_INVALID_ENCLAVE_ID).unwrap_err();
        match err {
            AppError::Ecall { ecall, status } => {
                assert_eq!(ecall, "ecall_add_2");
                assert_eq!(status, sgx_status_t::SGX_ERROR_INVALID_ENCLAVE_ID);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
