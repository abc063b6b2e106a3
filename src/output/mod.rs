// Wed Feb 4 2026 - Alex

pub mod emitter;
pub mod json;

pub use emitter::JuliaEmitter;
pub use json::JsonSerializer;
