// Wed Feb 4 2026 - Alex

use crate::error::GeneratorError;
use crate::layout::StructureLayout;
use crate::xpa::constants::{access_modes, DEFAULT_XPALIB, SZ_LINE, XPA_VERSION};
use std::io::Write;

// One accessor line per table entry, in table order. Order is part of the
// output contract: reruns against unchanged headers must be byte-identical.
struct Accessor {
    param: &'static str,
    field: &'static str,
    default: &'static str,
}

const XPAREC_ACCESSORS: &[Accessor] = &[
    Accessor { param: "send_mode", field: "send_mode", default: "Cint(0)" },
    Accessor { param: "recv_mode", field: "receive_mode", default: "Cint(0)" },
    Accessor { param: "name", field: "name", default: "\"\"" },
    Accessor { param: "class", field: "xclass", default: "\"\"" },
    Accessor { param: "method", field: "method", default: "\"\"" },
    Accessor { param: "sendian", field: "sendian", default: "\"?\"" },
];

const COMMREC_ACCESSORS: &[Accessor] = &[
    Accessor { param: "cmdfd", field: "cmdfd", default: "Cint(-1)" },
    Accessor { param: "datafd", field: "datafd", default: "Cint(-1)" },
    Accessor { param: "ack", field: "ack", default: "Cint(1)" },
    Accessor { param: "status", field: "status", default: "Cint(0)" },
    Accessor { param: "cendian", field: "cendian", default: "\"?\"" },
];

pub struct JuliaEmitter {
    emit_accessors: bool,
    emit_layout: bool,
    emit_constants: bool,
    library_path: String,
}

impl JuliaEmitter {
    pub fn new() -> Self {
        Self {
            emit_accessors: true,
            emit_layout: true,
            emit_constants: true,
            library_path: DEFAULT_XPALIB.to_string(),
        }
    }

    pub fn with_accessors(mut self, emit: bool) -> Self {
        self.emit_accessors = emit;
        self
    }

    pub fn with_layout(mut self, emit: bool) -> Self {
        self.emit_layout = emit;
        self
    }

    pub fn with_constants(mut self, emit: bool) -> Self {
        self.emit_constants = emit;
        self
    }

    pub fn with_library_path(mut self, path: &str) -> Self {
        self.library_path = path.to_string();
        self
    }

    pub fn render(
        &self,
        xpa: &StructureLayout,
        comm: &StructureLayout,
    ) -> Result<String, GeneratorError> {
        let mut out = String::new();

        out.push_str(&format!(
            "# Generated by xpa-offset-generator {} -- do not edit.\n",
            env!("CARGO_PKG_VERSION")
        ));

        if self.emit_accessors {
            out.push_str("\n# XPARec accessors\n\n");
            out.push_str(&format!(
                "_get_comm(xpa::Handle) = _get_field(Ptr{{Void}}, xpa.ptr, {}, C_NULL)\n",
                xpa.require_field("comm")?.offset().as_u64()
            ));
            out.push('\n');
            for acc in XPAREC_ACCESSORS {
                let field = xpa.require_field(acc.field)?;
                out.push_str(&format!(
                    "get_{}(xpa::Handle) = _get_field({}, xpa.ptr, {}, {})\n",
                    acc.param,
                    field.ctype().julia_type(),
                    field.offset().as_u64(),
                    acc.default
                ));
            }

            out.push_str("\n# XPACommRec accessors\n\n");
            for acc in COMMREC_ACCESSORS {
                let field = comm.require_field(acc.field)?;
                out.push_str(&format!(
                    "get_{}(xpa::Handle) = _get_field({}, _get_comm(xpa), {}, {})\n",
                    acc.param,
                    field.ctype().julia_type(),
                    field.offset().as_u64(),
                    acc.default
                ));
            }
        }

        if self.emit_layout {
            self.render_layout(&mut out, xpa);
            self.render_layout(&mut out, comm);
        }

        if self.emit_constants {
            out.push_str("\n# Manifest constants\n\n");
            out.push_str(&format!("const XPA_VERSION = \"{}\"\n", XPA_VERSION));
            for mode in access_modes() {
                out.push_str(&format!("const {} = Cint({})\n", mode.name(), mode.bits()));
            }
            out.push_str(&format!("const SZ_LINE = {}\n", SZ_LINE));
            out.push_str(&format!("const libxpa = \"{}\"\n", self.library_path));
        }

        Ok(out)
    }

    pub fn emit(
        &self,
        xpa: &StructureLayout,
        comm: &StructureLayout,
        writer: &mut dyn Write,
    ) -> Result<(), GeneratorError> {
        let text = self.render(xpa, comm)?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    // One constant per field: the offset always, the descriptor tag only
    // for integer fields. Char buffers stay offset-only; their length is a
    // manifest constant.
    fn render_layout(&self, out: &mut String, layout: &StructureLayout) {
        let prefix = short_name(layout.name());

        out.push_str(&format!("\n# {} layout\n\n", layout.name()));
        out.push_str(&format!("const _sizeof_{} = {}\n", prefix, layout.size()));
        for field in layout.fields() {
            out.push_str(&format!(
                "const _offsetof_{}_{} = {}\n",
                prefix,
                field.name(),
                field.offset().as_u64()
            ));
            if let Some(tag) = field.ctype().descriptor_tag() {
                out.push_str(&format!(
                    "const _typeof_{}_{} = {}\n",
                    prefix,
                    field.name(),
                    tag
                ));
            }
        }
    }
}

impl Default for JuliaEmitter {
    fn default() -> Self {
        Self::new()
    }
}

fn short_name(structure: &str) -> &'static str {
    match structure {
        "XPARec" => "xpa",
        "XPACommRec" => "comm",
        _ => "rec",
    }
}
