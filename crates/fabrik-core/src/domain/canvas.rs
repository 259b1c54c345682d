//! Drawing surface and the sketches drawn onto it.
//!
//! A [`Sketch`] is a pure value: the shape's label plus a small ASCII
//! raster. Putting it somewhere (a terminal, a buffer) is the only side
//! effect of [`crate::domain::Shape::draw`], and that side effect goes
//! through a [`Canvas`].

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::ShapeKind};

/// Longest edge of a raster, in cells.
pub const MAX_CELLS: usize = 16;

/// Glyph used for filled cells unless a canvas chooses otherwise.
pub const DEFAULT_GLYPH: char = '*';

/// A renderable description of one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    pub kind: ShapeKind,
    pub label: String,
    pub rows: Vec<String>,
}

impl Sketch {
    /// Rasterise a shape of the given extent.
    ///
    /// `width` and `height` are in the shape's own units. The longer edge is
    /// scaled to [`MAX_CELLS`]; `inside(x, y)` is asked about each cell centre
    /// in shape units with the origin at the bottom-left corner.
    pub fn rasterise<F>(
        kind: ShapeKind,
        label: String,
        width: f64,
        height: f64,
        inside: F,
    ) -> Self
    where
        F: Fn(f64, f64) -> bool,
    {
        // every shape is area-filled, so a flat one has nothing to draw
        let longest = width.max(height);
        if width <= 0.0 || height <= 0.0 {
            return Self {
                kind,
                label,
                rows: Vec::new(),
            };
        }

        let cell = longest / MAX_CELLS as f64;
        let cols = ((width / cell).round() as usize).max(1);
        let lines = ((height / cell).round() as usize).max(1);

        // top row first so the output reads the right way up
        let rows = (0..lines)
            .rev()
            .map(|row| {
                let y = (row as f64 + 0.5) * cell;
                (0..cols)
                    .map(|col| {
                        let x = (col as f64 + 0.5) * cell;
                        if inside(x, y) { DEFAULT_GLYPH } else { ' ' }
                    })
                    .collect::<String>()
                    .trim_end()
                    .to_owned()
            })
            .collect();

        Self { kind, label, rows }
    }

    /// The raster with every filled cell replaced by `glyph`.
    pub fn with_glyph(&self, glyph: char) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.replace(DEFAULT_GLYPH, &glyph.to_string()))
            .collect()
    }
}

/// Port for drawing surfaces.
///
/// Implemented by:
/// - `fabrik_adapters::canvas::WriterCanvas` (terminal, files)
/// - `fabrik_adapters::canvas::MemoryCanvas` (testing)
///
/// Takes `&self` so one canvas can be shared behind `&dyn Canvas`;
/// implementations with state lock internally.
#[cfg_attr(test, mockall::automock)]
pub trait Canvas: Send + Sync {
    /// Render one sketch.
    fn render(&self, sketch: &Sketch) -> Result<(), DomainError>;
}
