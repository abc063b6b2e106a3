// Wed Feb 4 2026 - Alex

use crate::xpa::constants::SZ_LINE;
use libc::{c_char, c_int};

// Mirrors of the xpa.h record declarations. Field order and types must
// track the installed header; everything downstream reads offsets off
// these declarations, never off hardcoded numbers.

#[repr(C)]
pub struct XPARec {
    pub version: *mut c_char,
    pub status: c_int,
    pub name: *mut c_char,
    pub xclass: *mut c_char,
    pub method: *mut c_char,
    pub sendian: *mut c_char,
    pub send_mode: c_int,
    pub receive_mode: c_int,
    pub comm: *mut XPACommRec,
}

#[repr(C)]
pub struct XPACommRec {
    pub status: c_int,
    pub cmdfd: c_int,
    pub datafd: c_int,
    pub ack: c_int,
    pub cendian: *mut c_char,
    pub buf: [c_char; SZ_LINE],
}
