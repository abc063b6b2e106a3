// Wed Feb 4 2026 - Alex

use crate::xpa::constants::DEFAULT_XPALIB;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub output_file: Option<PathBuf>,
    pub json_file: Option<PathBuf>,
    pub emit_accessors: bool,
    pub emit_layout: bool,
    pub emit_constants: bool,
    pub skip_probe: bool,
    pub library_path: String,
    pub enable_verbose_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file: None,
            json_file: None,
            emit_accessors: true,
            emit_layout: true,
            emit_constants: true,
            skip_probe: false,
            library_path: DEFAULT_XPALIB.to_string(),
            enable_verbose_output: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = Some(output);
        self
    }

    pub fn with_json_file(mut self, json: PathBuf) -> Self {
        self.json_file = Some(json);
        self
    }

    pub fn with_library_path(mut self, path: String) -> Self {
        self.library_path = path;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.emit_accessors && !self.emit_layout && !self.emit_constants {
            return Err(
                "At least one of emit_accessors, emit_layout or emit_constants must be enabled"
                    .to_string(),
            );
        }
        if self.library_path.is_empty() {
            return Err("library_path must not be empty".to_string());
        }
        Ok(())
    }
}
