// Wed Feb 4 2026 - Alex

use bitflags::bitflags;

// Manifest constants copied verbatim from the library's public interface.
// These are declared values, not introspected ones; they still get emitted
// through the same output pass so the binding sees a single source.

pub const XPA_VERSION: &str = "2.1.20";

// Fixed line buffer size shared with the comm record's embedded buffer.
pub const SZ_LINE: usize = 4096;

#[cfg(target_os = "macos")]
pub const DEFAULT_XPALIB: &str = "libxpa.dylib";
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_XPALIB: &str = "libxpa.so";

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AccessMode: u32 {
        const GET = 1 << 0;
        const SET = 1 << 1;
        const INFO = 1 << 2;
    }
}

impl AccessMode {
    pub fn name(self) -> &'static str {
        if self == Self::GET {
            "MODE_GET"
        } else if self == Self::SET {
            "MODE_SET"
        } else if self == Self::INFO {
            "MODE_INFO"
        } else {
            "MODE_UNKNOWN"
        }
    }
}

pub fn access_modes() -> [AccessMode; 3] {
    [AccessMode::GET, AccessMode::SET, AccessMode::INFO]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_modes_are_disjoint_bits() {
        let modes = access_modes();
        for (i, a) in modes.iter().enumerate() {
            assert_eq!(a.bits().count_ones(), 1);
            for b in &modes[i + 1..] {
                assert!((*a & *b).is_empty());
            }
        }
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(AccessMode::GET.name(), "MODE_GET");
        assert_eq!(AccessMode::SET.name(), "MODE_SET");
        assert_eq!(AccessMode::INFO.name(), "MODE_INFO");
    }
}
