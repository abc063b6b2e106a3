// Wed Feb 4 2026 - Alex

pub mod config;
pub mod error;
pub mod generator;
pub mod introspect;
pub mod layout;
pub mod output;
pub mod ui;
pub mod xpa;

pub use config::Config;
pub use error::GeneratorError;
pub use generator::Generator;
pub use layout::{CType, FieldDescriptor, Offset, StructureLayout};
pub use output::{JsonSerializer, JuliaEmitter};
pub use xpa::{LinkageProbe, PROBE_SENTINEL};
