//! Application layer for Fabrik.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ComputerService, ShapeService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All construction rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CatalogService, ComputerService,
    Measurement, // DTO for shape metrics
    ProductInfo, // DTO for catalog entries
    ShapeService,
};

// Re-export port traits (for adapter implementation)
pub use ports::Canvas;

pub use error::ApplicationError;
