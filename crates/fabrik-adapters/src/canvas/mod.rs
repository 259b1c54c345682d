//! Canvas adapters.

mod json;
mod memory;
mod writer;

pub use json::JsonLinesCanvas;
pub use memory::MemoryCanvas;
pub use writer::WriterCanvas;

use fabrik_core::domain::{DomainError, Sketch};

fn draw_failed(sketch: &Sketch, reason: impl std::fmt::Display) -> DomainError {
    DomainError::DrawFailed {
        shape: sketch.label.clone(),
        reason: reason.to_string(),
    }
}
