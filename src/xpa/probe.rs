// Wed Feb 4 2026 - Alex

use crate::error::GeneratorError;
use libc::c_int;

// A null handle has no descriptor, so a correctly linked libxpa answers -1.
pub const PROBE_SENTINEL: c_int = -1;

// Seam for the linkage check. The native implementation calls into the
// installed library; tests substitute a stub.
pub trait LinkageProbe {
    fn probe(&self) -> c_int;
}

pub fn validate_linkage(probe: &dyn LinkageProbe) -> Result<(), GeneratorError> {
    let got = probe.probe();
    if got != PROBE_SENTINEL {
        return Err(GeneratorError::LinkageValidation {
            got,
            expected: PROBE_SENTINEL,
        });
    }
    log::debug!("linkage probe returned sentinel {}", got);
    Ok(())
}

#[cfg(feature = "native-probe")]
pub use native::NativeProbe;

#[cfg(feature = "native-probe")]
mod native {
    use super::LinkageProbe;
    use libc::{c_int, c_void};
    use std::ptr;

    extern "C" {
        fn XPAGetFd(xpa: *mut c_void) -> c_int;
    }

    pub struct NativeProbe;

    impl LinkageProbe for NativeProbe {
        fn probe(&self) -> c_int {
            unsafe { XPAGetFd(ptr::null_mut()) }
        }
    }
}
