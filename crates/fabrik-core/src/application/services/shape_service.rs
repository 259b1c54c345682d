//! Shape Service - build, measure, and draw shapes.
//!
//! Owns the drawing surface. Building and measuring work without one;
//! drawing needs a [`Canvas`] injected via [`ShapeService::with_canvas`].

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Canvas},
    domain::{Shape, ShapeFactory, ShapeKind},
    error::FabrikResult,
};

/// Area and perimeter of one shape, for display and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub kind: ShapeKind,
    pub label: String,
    pub area: f64,
    pub perimeter: f64,
}

impl Measurement {
    /// Copy with both metrics rounded to `precision` decimal places.
    ///
    /// Values too large to scale are returned as they are.
    pub fn rounded(&self, precision: u32) -> Self {
        let factor = 10f64.powi(precision as i32);
        Self {
            area: round_to(self.area, factor),
            perimeter: round_to(self.perimeter, factor),
            ..self.clone()
        }
    }
}

fn round_to(value: f64, factor: f64) -> f64 {
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}

/// Service for shape operations.
#[derive(Default)]
pub struct ShapeService {
    canvas: Option<Box<dyn Canvas>>,
}

impl ShapeService {
    /// Create a shape service with no drawing surface.
    pub fn new() -> Self {
        Self { canvas: None }
    }

    /// Attach the canvas `draw` renders onto.
    pub fn with_canvas(mut self, canvas: Box<dyn Canvas>) -> Self {
        self.canvas = Some(canvas);
        self
    }

    /// Build a shape from a tag and its dimensions.
    pub fn build(&self, kind: &str, dims: &[f64]) -> FabrikResult<Box<dyn Shape>> {
        Ok(ShapeFactory::get_shape(kind, dims)?)
    }

    /// Measure a shape.
    pub fn measure(&self, shape: &dyn Shape) -> Measurement {
        Measurement {
            kind: shape.kind(),
            label: shape.label(),
            area: shape.area(),
            perimeter: shape.perimeter(),
        }
    }

    /// Draw a shape onto the configured canvas.
    #[instrument(skip_all, fields(shape = %shape.label()))]
    pub fn draw(&self, shape: &dyn Shape) -> FabrikResult<()> {
        let canvas = self
            .canvas
            .as_deref()
            .ok_or(ApplicationError::AdapterNotConfigured { name: "canvas" })?;
        shape.draw(canvas)?;
        debug!("Shape drawn");
        Ok(())
    }
}
