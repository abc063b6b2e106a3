// Wed Feb 4 2026 - Alex

use crate::layout::{CType, FieldDescriptor, LayoutError, Offset, StructureLayout};
use crate::xpa::constants::SZ_LINE;
use crate::xpa::{XPACommRec, XPARec};
use std::mem::{offset_of, size_of};

// Every offset below is the compiler's own layout decision for the mirror
// declarations. Nothing is hand-maintained; rebuilding against a changed
// xpa.h changes the output with no code edits.

pub fn describe_xparec() -> Result<StructureLayout, LayoutError> {
    let mut layout = StructureLayout::new("XPARec", size_of::<XPARec>());

    layout.add_field(field("version", offset_of!(XPARec, version), CType::CStr));
    layout.add_field(field("status", offset_of!(XPARec, status), CType::Int));
    layout.add_field(field("name", offset_of!(XPARec, name), CType::CStr));
    layout.add_field(field("xclass", offset_of!(XPARec, xclass), CType::CStr));
    layout.add_field(field("method", offset_of!(XPARec, method), CType::CStr));
    layout.add_field(field("sendian", offset_of!(XPARec, sendian), CType::CStr));
    layout.add_field(field("send_mode", offset_of!(XPARec, send_mode), CType::Int));
    layout.add_field(field(
        "receive_mode",
        offset_of!(XPARec, receive_mode),
        CType::Int,
    ));
    layout.add_field(field("comm", offset_of!(XPARec, comm), CType::Ptr));

    layout.validate()?;
    Ok(layout)
}

pub fn describe_commrec() -> Result<StructureLayout, LayoutError> {
    let mut layout = StructureLayout::new("XPACommRec", size_of::<XPACommRec>());

    layout.add_field(field("status", offset_of!(XPACommRec, status), CType::Int));
    layout.add_field(field("cmdfd", offset_of!(XPACommRec, cmdfd), CType::Int));
    layout.add_field(field("datafd", offset_of!(XPACommRec, datafd), CType::Int));
    layout.add_field(field("ack", offset_of!(XPACommRec, ack), CType::Int));
    layout.add_field(field("cendian", offset_of!(XPACommRec, cendian), CType::CStr));
    layout.add_field(field(
        "buf",
        offset_of!(XPACommRec, buf),
        CType::CharArray(SZ_LINE),
    ));

    layout.validate()?;
    Ok(layout)
}

pub fn describe_all() -> Result<Vec<StructureLayout>, LayoutError> {
    Ok(vec![describe_xparec()?, describe_commrec()?])
}

fn field(name: &str, offset: usize, ctype: CType) -> FieldDescriptor {
    FieldDescriptor::new(name, Offset::from(offset), ctype)
}

#[cfg(test)]
mod tests {
    use super::*;
    use libc::c_int;

    #[test]
    fn test_offsets_match_compiler_layout() {
        let layout = describe_xparec().unwrap();
        assert_eq!(
            layout.get_field("comm").unwrap().offset().as_usize(),
            offset_of!(XPARec, comm)
        );
        assert_eq!(
            layout.get_field("send_mode").unwrap().offset().as_usize(),
            offset_of!(XPARec, send_mode)
        );

        let comm = describe_commrec().unwrap();
        assert_eq!(
            comm.get_field("cendian").unwrap().offset().as_usize(),
            offset_of!(XPACommRec, cendian)
        );
    }

    #[test]
    fn test_layouts_pass_consistency_check() {
        for layout in describe_all().unwrap() {
            assert!(layout.validate().is_ok());
        }
    }

    #[test]
    fn test_comm_buffer_is_offset_only() {
        let comm = describe_commrec().unwrap();
        let buf = comm.get_field("buf").unwrap();
        assert!(buf.ctype().is_char_array());
        assert_eq!(buf.size(), SZ_LINE);
        assert_eq!(buf.ctype().descriptor_tag(), None);
    }

    // A 4-byte signed field at offset 8 must come out as (8, 32, signed).
    #[test]
    fn test_four_byte_signed_field_at_offset_eight() {
        #[repr(C)]
        struct Probe {
            head: u64,
            value: c_int,
        }

        let desc = FieldDescriptor::new("value", Offset::from(offset_of!(Probe, value)), CType::Int);
        assert_eq!(desc.offset().as_u64(), 8);
        assert_eq!(desc.ctype().bit_width(), Some(32));
        assert_eq!(desc.ctype().is_signed(), Some(true));
    }
}
