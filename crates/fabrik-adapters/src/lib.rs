//! Infrastructure adapters for Fabrik.
//!
//! This crate implements the ports defined in `fabrik-core::application::ports`.
//! It contains all I/O performed on behalf of the core.

pub mod canvas;

// Re-export commonly used adapters
pub use canvas::{JsonLinesCanvas, MemoryCanvas, WriterCanvas};
