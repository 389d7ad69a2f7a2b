#![cfg_attr(feature = "sgx", no_std)]

#[cfg(feature = "sgx")]
extern crate sgx_types;
#[cfg(feature = "sgx")]
extern crate sgx_tstd as std;
#[cfg(feature = "sgx")]
extern crate sgx_trts;

pub mod add;

pub use add::{add_2, EcallError, TrustedMemory};

#[cfg(feature = "sgx")]
pub use add::Enclave;

#[cfg(feature = "sgx")]
use sgx_types::c_int;

/// Adds 2 to `input` and stores it in `*sum`.
///
/// `sum` must point into enclave memory and hold zero; anything else aborts
/// the enclave. The trusted bridge generated from `Enclave.edl` copies the
/// host's slot in and out, so host-driven calls always satisfy the bounds check.
#[cfg(feature = "sgx")]
#[no_mangle]
pub extern "C" fn ecall_add_2(input: c_int, sum: *mut c_int) {
    if unsafe { add::add_2(&Enclave, input, sum) }.is_err() {
        sgx_trts::trts::rsgx_abort();
    }
}
