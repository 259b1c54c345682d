//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "build a computer" or "measure and draw a shape".

pub mod catalog_service;
pub mod computer_service;
pub mod shape_service;

pub use catalog_service::{CatalogService, ProductInfo};
pub use computer_service::ComputerService;
pub use shape_service::{Measurement, ShapeService};
