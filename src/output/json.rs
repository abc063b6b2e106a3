// Wed Feb 4 2026 - Alex

use crate::error::GeneratorError;
use crate::layout::StructureLayout;
use crate::xpa::constants::{access_modes, DEFAULT_XPALIB, SZ_LINE, XPA_VERSION};
use serde::Serialize;
use serde_json::{to_string, to_string_pretty};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// Machine-readable dump of the same descriptors the Julia emitter sees.
// Mainly useful for diffing generated constants across library versions.

#[derive(Debug, Serialize)]
pub struct DescriptorDump {
    pub generator: String,
    pub xpa_version: String,
    pub structures: Vec<StructureDump>,
    pub constants: ConstantsDump,
}

#[derive(Debug, Serialize)]
pub struct StructureDump {
    pub name: String,
    pub size: usize,
    pub fields: Vec<FieldDump>,
}

#[derive(Debug, Serialize)]
pub struct FieldDump {
    pub name: String,
    pub offset: u64,
    pub size: usize,
    pub bits: Option<u32>,
    pub signed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ConstantsDump {
    pub modes: BTreeMap<String, u32>,
    pub sz_line: usize,
    pub library_path: String,
}

pub struct JsonSerializer {
    pretty_print: bool,
    library_path: String,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self {
            pretty_print: true,
            library_path: DEFAULT_XPALIB.to_string(),
        }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_library_path(mut self, path: &str) -> Self {
        self.library_path = path.to_string();
        self
    }

    pub fn serialize(&self, layouts: &[StructureLayout]) -> Result<String, GeneratorError> {
        let dump = self.build_dump(layouts);
        let text = if self.pretty_print {
            to_string_pretty(&dump)?
        } else {
            to_string(&dump)?
        };
        Ok(text)
    }

    pub fn serialize_to_file<P: AsRef<Path>>(
        &self,
        layouts: &[StructureLayout],
        path: P,
    ) -> Result<(), GeneratorError> {
        let text = self.serialize(layouts)?;
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn build_dump(&self, layouts: &[StructureLayout]) -> DescriptorDump {
        let structures = layouts
            .iter()
            .map(|layout| StructureDump {
                name: layout.name().to_string(),
                size: layout.size(),
                fields: layout
                    .fields()
                    .iter()
                    .map(|field| FieldDump {
                        name: field.name().to_string(),
                        offset: field.offset().as_u64(),
                        size: field.size(),
                        bits: field.ctype().bit_width(),
                        signed: field.ctype().is_signed(),
                    })
                    .collect(),
            })
            .collect();

        let mut modes = BTreeMap::new();
        for mode in access_modes() {
            modes.insert(mode.name().to_string(), mode.bits());
        }

        DescriptorDump {
            generator: format!("xpa-offset-generator {}", env!("CARGO_PKG_VERSION")),
            xpa_version: XPA_VERSION.to_string(),
            structures,
            constants: ConstantsDump {
                modes,
                sz_line: SZ_LINE,
                library_path: self.library_path.clone(),
            },
        }
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::describe_all;

    #[test]
    fn test_serialize_round_trip_value() {
        let layouts = describe_all().unwrap();
        let text = JsonSerializer::new().serialize(&layouts).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["xpa_version"], "2.1.20");
        assert_eq!(value["structures"][0]["name"], "XPARec");
        assert_eq!(value["structures"][1]["name"], "XPACommRec");
        assert_eq!(value["constants"]["sz_line"], 4096);
    }

    #[test]
    fn test_integer_fields_carry_width_and_sign() {
        let layouts = describe_all().unwrap();
        let text = JsonSerializer::new().serialize(&layouts).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        let fields = value["structures"][1]["fields"].as_array().unwrap();
        let cmdfd = fields.iter().find(|f| f["name"] == "cmdfd").unwrap();
        assert_eq!(cmdfd["bits"], 32);
        assert_eq!(cmdfd["signed"], true);

        let buf = fields.iter().find(|f| f["name"] == "buf").unwrap();
        assert!(buf["bits"].is_null());
        assert!(buf["signed"].is_null());
    }

    #[test]
    fn test_compact_output_is_deterministic() {
        let layouts = describe_all().unwrap();
        let serializer = JsonSerializer::new().with_pretty_print(false);
        assert_eq!(
            serializer.serialize(&layouts).unwrap(),
            serializer.serialize(&layouts).unwrap()
        );
    }
}
