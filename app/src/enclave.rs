use std::os::raw::c_int;
use std::path::Path;

use log::{debug, info};
use sgx_types::*;
use sgx_urts::SgxEnclave;

use crate::error::{check_status, AppError, Result};

extern "C" {
    fn ecall_add_2(eid: sgx_enclave_id_t, input: c_int, sum: *mut c_int) -> sgx_status_t;
}

/// A loaded add-2 enclave. Destroyed on drop.
pub struct TestEnclave {
    enclave: SgxEnclave,
}

impl TestEnclave {
    pub fn create<P: AsRef<Path>>(path: P, debug: bool) -> Result<Self> {
        let path = path.as_ref();
        let mut launch_token: sgx_launch_token_t = [0; 1024];
        let mut launch_token_updated: i32 = 0;
        let mut misc_attr = sgx_misc_attribute_t {
            secs_attr: sgx_attributes_t { flags: 0, xfrm: 0 },
            misc_select: 0,
        };

        let enclave = SgxEnclave::create(
            path,
            debug as i32,
            &mut launch_token,
            &mut launch_token_updated,
            &mut misc_attr,
        )
        .map_err(|status| AppError::Create {
            path: path.display().to_string(),
            status,
        })?;

        info!("[+] Init Enclave Successful {}!", enclave.geteid());
        debug!("enclave image {}, debug launch {}", path.display(), debug);
        Ok(TestEnclave { enclave })
    }

    pub fn eid(&self) -> sgx_enclave_id_t {
        self.enclave.geteid()
    }

    /// Runs `ecall_add_2` on `sum`, which must hold zero for a debug enclave.
    ///
    /// If the enclave aborts, `AppError::EnclaveCrashed` is returned and the
    /// enclave is unusable afterwards.
    pub fn add_2(&self, input: c_int, sum: &mut c_int) -> Result<()> {
        let status = unsafe { ecall_add_2(self.eid(), input, sum) };
        check_status("ecall_add_2", status)?;
        debug!("ecall_add_2({}) -> {}", input, sum);
        Ok(())
    }
}
