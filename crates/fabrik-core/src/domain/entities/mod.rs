pub mod computer;
pub mod shape;

pub use crate::domain::DomainError;
pub use computer::{Computer, ComputerRecord, Pc, Server};
pub use shape::{Circle, Rectangle, Shape, Square, Triangle};
