// Wed Feb 4 2026 - Alex

use crate::config::Config;
use crate::error::GeneratorError;
use crate::introspect::{describe_commrec, describe_xparec};
use crate::output::{JsonSerializer, JuliaEmitter};
use crate::xpa::{validate_linkage, LinkageProbe};
use std::io::Write;
use std::path::Path;

// Strictly linear: validate linkage (optional), compute descriptors, emit.
// The text is rendered in full before anything touches the writer, so a
// failed probe or a bad layout never leaves partial output behind.
pub struct Generator {
    config: Config,
    probe: Option<Box<dyn LinkageProbe>>,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config, probe: None }
    }

    pub fn with_probe(mut self, probe: Box<dyn LinkageProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    pub fn generate(&self, writer: &mut dyn Write) -> Result<(), GeneratorError> {
        if let Some(probe) = &self.probe {
            validate_linkage(probe.as_ref())?;
        }

        let xpa = describe_xparec()?;
        let comm = describe_commrec()?;
        log::info!(
            "described {} + {} fields",
            xpa.fields().len(),
            comm.fields().len()
        );

        self.emitter().emit(&xpa, &comm, writer)
    }

    pub fn generate_json<P: AsRef<Path>>(&self, path: P) -> Result<(), GeneratorError> {
        let xpa = describe_xparec()?;
        let comm = describe_commrec()?;

        JsonSerializer::new()
            .with_library_path(&self.config.library_path)
            .serialize_to_file(&[xpa, comm], path)
    }

    fn emitter(&self) -> JuliaEmitter {
        JuliaEmitter::new()
            .with_accessors(self.config.emit_accessors)
            .with_layout(self.config.emit_layout)
            .with_constants(self.config.emit_constants)
            .with_library_path(&self.config.library_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xpa::PROBE_SENTINEL;
    use libc::c_int;

    struct StubProbe(c_int);

    impl LinkageProbe for StubProbe {
        fn probe(&self) -> c_int {
            self.0
        }
    }

    #[test]
    fn test_generate_without_probe() {
        let generator = Generator::new(Config::default());
        let mut out = Vec::new();
        generator.generate(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# Generated by xpa-offset-generator"));
        assert!(text.contains("_get_comm(xpa::Handle)"));
    }

    #[test]
    fn test_probe_sentinel_allows_generation() {
        let generator =
            Generator::new(Config::default()).with_probe(Box::new(StubProbe(PROBE_SENTINEL)));
        let mut out = Vec::new();
        generator.generate(&mut out).unwrap();
        assert!(!out.is_empty());
    }

    #[test]
    fn test_failed_probe_emits_nothing() {
        let generator = Generator::new(Config::default()).with_probe(Box::new(StubProbe(0)));
        let mut out = Vec::new();
        let err = generator.generate(&mut out).unwrap_err();
        assert!(matches!(err, GeneratorError::LinkageValidation { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = Generator::new(Config::default());
        let mut first = Vec::new();
        let mut second = Vec::new();
        generator.generate(&mut first).unwrap();
        generator.generate(&mut second).unwrap();
        assert_eq!(first, second);
    }
}
