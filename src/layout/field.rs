// Wed Feb 4 2026 - Alex

use crate::layout::{CType, Offset};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    name: String,
    offset: Offset,
    ctype: CType,
}

impl FieldDescriptor {
    pub fn new(name: &str, offset: Offset, ctype: CType) -> Self {
        Self {
            name: name.to_string(),
            offset,
            ctype,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn ctype(&self) -> CType {
        self.ctype
    }

    pub fn size(&self) -> usize {
        self.ctype.size()
    }

    pub fn end_offset(&self) -> u64 {
        self.offset.as_u64() + self.size() as u64
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}: {}", self.name, self.offset, self.ctype)
    }
}
