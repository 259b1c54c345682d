//! Driven (output) ports - implemented by infrastructure.
//!
//! The `fabrik-adapters` crate provides implementations.
//!
//! `Canvas` is declared in the domain because `Shape::draw` names it in its
//! signature; it is re-exported here so adapters find every port in one
//! place.

pub use crate::domain::canvas::Canvas;
