// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Fabrik.
//!
//! This module contains the products, the factories that build them, and
//! the drawing port shapes render through. It has no I/O of its own.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Drawing goes through the [`Canvas`] port
//! - **No external crates**: Only std library + thiserror + serde + tracing
//! - **Immutable products**: Computers and shapes have no setters
//!
// Public API - what the world sees
pub mod canvas;
pub mod entities;
pub mod error;
pub mod factory;
pub mod value_objects;

// Re-exports for convenience
pub use canvas::{Canvas, Sketch};
pub use entities::{
    Circle, Computer, ComputerRecord, Pc, Rectangle, Server, Shape, Square, Triangle,
};
pub use error::{DomainError, ErrorCategory};
pub use factory::{ComputerAbstractFactory, ComputerFactory, PcFactory, ServerFactory, ShapeFactory};
pub use value_objects::{ComputerKind, ComputerSpec, ShapeKind};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-module Tests
    // ========================================================================

    #[test]
    fn factories_cover_every_kind() {
        for kind in ComputerKind::ALL {
            let computer = ComputerFactory::get_computer(kind.as_str(), "r", "h", "c").unwrap();
            assert_eq!(computer.kind(), kind);
        }

        for kind in ShapeKind::ALL {
            let dims = vec![3.0; kind.parameters().len()];
            let shape = ShapeFactory::create(kind, &dims).unwrap();
            assert_eq!(shape.kind(), kind);
            assert!(shape.area() >= 0.0);
            assert!(shape.perimeter() >= 0.0);
        }
    }

    #[test]
    fn display_tags_round_trip_through_factory() {
        // canonical tags are mixed case; dispatch must not care
        let computer = ComputerFactory::get_computer(
            &ComputerKind::Server.to_string().to_uppercase(),
            "64GB",
            "2TB",
            "Xeon",
        )
        .unwrap();
        assert_eq!(computer.to_string(), "RAM=64GB, HDD=2TB, CPU=Xeon");
    }
}
