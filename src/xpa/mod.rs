// Wed Feb 4 2026 - Alex

pub mod ffi;
pub mod constants;
pub mod probe;

pub use ffi::{XPACommRec, XPARec};
pub use probe::{validate_linkage, LinkageProbe, PROBE_SENTINEL};
