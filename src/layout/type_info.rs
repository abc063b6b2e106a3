// Wed Feb 4 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem::size_of;

// Widths and signedness are asked of the platform typedefs themselves,
// never assumed. An opaque libc typedef answers through size_of and the
// all-ones probe below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CType {
    Char,
    UChar,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    CStr,
    Ptr,
    CharArray(usize),
}

// Set every bit to one, then check which side of zero the value landed on.
// Only a signed representation reads the all-ones pattern as negative.
macro_rules! all_ones_is_negative {
    ($ty:ty) => {{
        let mut bits: $ty = 0;
        bits = !bits;
        !(bits > 0)
    }};
}

impl CType {
    pub fn size(&self) -> usize {
        match self {
            Self::Char => size_of::<libc::c_char>(),
            Self::UChar => size_of::<libc::c_uchar>(),
            Self::Short => size_of::<libc::c_short>(),
            Self::UShort => size_of::<libc::c_ushort>(),
            Self::Int => size_of::<libc::c_int>(),
            Self::UInt => size_of::<libc::c_uint>(),
            Self::Long => size_of::<libc::c_long>(),
            Self::ULong => size_of::<libc::c_ulong>(),
            Self::CStr | Self::Ptr => size_of::<*const libc::c_void>(),
            Self::CharArray(len) => *len,
        }
    }

    pub fn bit_width(&self) -> Option<u32> {
        if self.is_integer() {
            Some(self.size() as u32 * 8)
        } else {
            None
        }
    }

    pub fn is_signed(&self) -> Option<bool> {
        match self {
            Self::Char => Some(all_ones_is_negative!(libc::c_char)),
            Self::UChar => Some(all_ones_is_negative!(libc::c_uchar)),
            Self::Short => Some(all_ones_is_negative!(libc::c_short)),
            Self::UShort => Some(all_ones_is_negative!(libc::c_ushort)),
            Self::Int => Some(all_ones_is_negative!(libc::c_int)),
            Self::UInt => Some(all_ones_is_negative!(libc::c_uint)),
            Self::Long => Some(all_ones_is_negative!(libc::c_long)),
            Self::ULong => Some(all_ones_is_negative!(libc::c_ulong)),
            Self::CStr | Self::Ptr | Self::CharArray(_) => None,
        }
    }

    pub fn is_integer(&self) -> bool {
        !matches!(self, Self::CStr | Self::Ptr | Self::CharArray(_))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::CStr | Self::Ptr)
    }

    pub fn is_char_array(&self) -> bool {
        matches!(self, Self::CharArray(_))
    }

    // Descriptor tag in the form the binding layer expects, e.g. SignedInt32.
    pub fn descriptor_tag(&self) -> Option<String> {
        let width = self.bit_width()?;
        let signed = self.is_signed()?;
        if signed {
            Some(format!("SignedInt{}", width))
        } else {
            Some(format!("UnsignedInt{}", width))
        }
    }

    // Type name used in the emitted accessor lines.
    pub fn julia_type(&self) -> &'static str {
        match self {
            Self::Char => "Cchar",
            Self::UChar => "Cuchar",
            Self::Short => "Cshort",
            Self::UShort => "Cushort",
            Self::Int => "Cint",
            Self::UInt => "Cuint",
            Self::Long => "Clong",
            Self::ULong => "Culong",
            Self::CStr => "String",
            Self::Ptr => "Ptr{Void}",
            Self::CharArray(_) => "Cchar",
        }
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CStr => write!(f, "char*"),
            Self::Ptr => write!(f, "void*"),
            Self::CharArray(len) => write!(f, "char[{}]", len),
            other => match other.descriptor_tag() {
                Some(tag) => write!(f, "{}", tag),
                None => write!(f, "{:?}", other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widths_are_storage_times_eight() {
        for ty in [
            CType::Char,
            CType::UChar,
            CType::Short,
            CType::UShort,
            CType::Int,
            CType::UInt,
            CType::Long,
            CType::ULong,
        ] {
            assert_eq!(ty.bit_width(), Some(ty.size() as u32 * 8));
        }
    }

    #[test]
    fn test_signedness_matches_all_ones_probe() {
        assert_eq!(CType::Int.is_signed(), Some(all_ones_is_negative!(libc::c_int)));
        assert_eq!(CType::UInt.is_signed(), Some(all_ones_is_negative!(libc::c_uint)));
        assert_eq!(CType::Char.is_signed(), Some(all_ones_is_negative!(libc::c_char)));
    }

    #[test]
    fn test_known_signedness() {
        assert_eq!(CType::Int.is_signed(), Some(true));
        assert_eq!(CType::Short.is_signed(), Some(true));
        assert_eq!(CType::Long.is_signed(), Some(true));
        assert_eq!(CType::UInt.is_signed(), Some(false));
        assert_eq!(CType::UShort.is_signed(), Some(false));
        assert_eq!(CType::ULong.is_signed(), Some(false));
    }

    #[test]
    fn test_descriptor_tags() {
        assert_eq!(CType::Int.descriptor_tag().as_deref(), Some("SignedInt32"));
        assert_eq!(CType::UShort.descriptor_tag().as_deref(), Some("UnsignedInt16"));
        assert_eq!(CType::CStr.descriptor_tag(), None);
        assert_eq!(CType::CharArray(4096).descriptor_tag(), None);
    }

    #[test]
    fn test_pointers_and_buffers() {
        assert_eq!(CType::Ptr.size(), std::mem::size_of::<usize>());
        assert_eq!(CType::CharArray(4096).size(), 4096);
        assert!(CType::CharArray(16).is_char_array());
        assert!(!CType::CharArray(16).is_integer());
        assert!(CType::CStr.is_pointer());
    }
}
