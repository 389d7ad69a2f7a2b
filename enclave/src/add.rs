//! The checked add behind `ecall_add_2`.

use core::ffi::c_int;
use core::fmt;
use core::mem;

/// Answers whether a byte range lies inside trusted memory.
pub trait TrustedMemory {
    /// Returns `true` only if all of `[addr, addr + size)` is trusted.
    fn contains(&self, addr: *const u8, size: usize) -> bool;
}

/// The enclave's own address space, as reported by the trusted runtime.
#[cfg(feature = "sgx")]
#[derive(Clone, Copy, Debug, Default)]
pub struct Enclave;

#[cfg(feature = "sgx")]
impl TrustedMemory for Enclave {
    fn contains(&self, addr: *const u8, size: usize) -> bool {
        sgx_trts::trts::rsgx_raw_is_within_enclave(addr, size)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EcallError {
    /// The result slot is null or not entirely inside trusted memory.
    OutsideEnclave,
    /// The result slot held a value other than zero.
    SlotNotZero(c_int),
}

impl fmt::Display for EcallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcallError::OutsideEnclave => write!(f, "result slot is outside the enclave"),
            EcallError::SlotNotZero(v) => write!(f, "result slot must be zero, found {}", v),
        }
    }
}

/// Writes `input + 2` into `*sum`.
///
/// The slot is checked against `memory` before it is touched. In debug builds
/// the slot must also read zero; release builds skip that read. On error
/// nothing is written.
///
/// # Safety
///
/// If `memory` reports the slot as trusted, `sum` must be valid for reads and
/// writes of one `c_int`.
pub unsafe fn add_2<M: TrustedMemory + ?Sized>(
    memory: &M,
    input: c_int,
    sum: *mut c_int,
) -> Result<(), EcallError> {
    if sum.is_null() || !memory.contains(sum as *const u8, mem::size_of::<c_int>()) {
        return Err(EcallError::OutsideEnclave);
    }

    if cfg!(debug_assertions) {
        let current = *sum;
        if current != 0 {
            return Err(EcallError::SlotNotZero(current));
        }
    }

    *sum = input.wrapping_add(2);
    Ok(())
}
