//! Data sources. Implement EntitySource.

pub mod json_source;
pub mod memory;

pub use json_source::{JsonEntity, JsonFileSource};
pub use memory::MemorySource;
