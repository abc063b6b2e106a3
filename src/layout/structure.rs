// Wed Feb 4 2026 - Alex

use crate::layout::{FieldDescriptor, LayoutError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureLayout {
    name: String,
    size: usize,
    fields: Vec<FieldDescriptor>,
    #[serde(skip)]
    field_map: HashMap<String, usize>,
}

impl StructureLayout {
    pub fn new(name: &str, size: usize) -> Self {
        Self {
            name: name.to_string(),
            size,
            fields: Vec::new(),
            field_map: HashMap::new(),
        }
    }

    pub fn add_field(&mut self, field: FieldDescriptor) {
        let index = self.fields.len();
        self.field_map.insert(field.name().to_string(), index);
        self.fields.push(field);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.field_map.get(name).map(|&idx| &self.fields[idx])
    }

    pub fn require_field(&self, name: &str) -> Result<&FieldDescriptor, LayoutError> {
        self.get_field(name).ok_or_else(|| LayoutError::FieldNotFound {
            structure: self.name.clone(),
            field: name.to_string(),
        })
    }

    // Descriptors are taken straight from the compiler, so a violation here
    // means the mirror declaration itself is wrong.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen: HashMap<&str, ()> = HashMap::new();
        let mut last_end: u64 = 0;

        for field in &self.fields {
            if seen.insert(field.name(), ()).is_some() {
                return Err(LayoutError::DuplicateField {
                    structure: self.name.clone(),
                    field: field.name().to_string(),
                });
            }

            if field.offset().as_u64() < last_end {
                return Err(LayoutError::NonMonotonicOffset {
                    structure: self.name.clone(),
                    field: field.name().to_string(),
                });
            }
            last_end = field.end_offset();

            if field.end_offset() > self.size as u64 {
                return Err(LayoutError::FieldOutOfBounds {
                    structure: self.name.clone(),
                    field: field.name().to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{CType, Offset};

    fn layout_with(fields: &[(&str, u64, CType)], size: usize) -> StructureLayout {
        let mut layout = StructureLayout::new("TestRec", size);
        for (name, offset, ctype) in fields {
            layout.add_field(FieldDescriptor::new(name, Offset::new(*offset), *ctype));
        }
        layout
    }

    #[test]
    fn test_field_lookup() {
        let layout = layout_with(&[("a", 0, CType::Int), ("b", 4, CType::Int)], 8);
        assert_eq!(layout.get_field("b").unwrap().offset(), Offset::new(4));
        assert!(layout.get_field("c").is_none());
        assert!(layout.require_field("c").is_err());
    }

    #[test]
    fn test_validate_accepts_packed_sequence() {
        let layout = layout_with(&[("a", 0, CType::Int), ("b", 8, CType::CStr)], 16);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let layout = layout_with(&[("a", 0, CType::Int), ("b", 2, CType::Int)], 8);
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::NonMonotonicOffset { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_field_past_end() {
        let layout = layout_with(&[("a", 0, CType::Int), ("b", 4, CType::CStr)], 8);
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::FieldOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate() {
        let layout = layout_with(&[("a", 0, CType::Int), ("a", 4, CType::Int)], 8);
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::DuplicateField { .. })
        ));
    }
}
