//! Fabrik Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Fabrik: a
//! tag-dispatched computer factory and a shape capability with its own
//! factory, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           fabrik-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ComputerService, ShapeService, ...)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Driven: Canvas)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    fabrik-adapters (Infrastructure)     │
//! │     (WriterCanvas, MemoryCanvas)        │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Computer, Shape, Factories, Kinds)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use fabrik_core::domain::{ComputerFactory, ComputerKind, ShapeFactory};
//!
//! let pc = ComputerFactory::get_computer("pc", "16GB", "512GB", "i7").unwrap();
//! assert_eq!(pc.kind(), ComputerKind::Pc);
//! assert_eq!(pc.ram(), "16GB");
//!
//! assert!(ComputerFactory::get_computer("laptop", "8GB", "256GB", "i5").is_err());
//!
//! let circle = ShapeFactory::get_shape("circle", &[2.0]).unwrap();
//! assert!((circle.area() - 12.566).abs() < 1e-3);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, ComputerService, Measurement, ProductInfo, ShapeService, ports::Canvas,
    };
    pub use crate::domain::{
        Circle, Computer, ComputerAbstractFactory, ComputerFactory, ComputerKind, ComputerRecord,
        ComputerSpec, Pc, PcFactory, Rectangle, Server, ServerFactory, Shape, ShapeFactory,
        ShapeKind, Sketch, Square, Triangle,
    };
    pub use crate::error::{FabrikError, FabrikResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
