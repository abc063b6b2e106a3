// Wed Feb 4 2026 - Alex

pub mod offset;
pub mod type_info;
pub mod field;
pub mod structure;
pub mod error;

pub use offset::Offset;
pub use type_info::CType;
pub use field::FieldDescriptor;
pub use structure::StructureLayout;
pub use error::LayoutError;
