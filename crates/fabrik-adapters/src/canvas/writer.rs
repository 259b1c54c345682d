//! Canvas that writes ASCII sketches to any `io::Write`.

use std::io::{self, Write};
use std::sync::Mutex;

use fabrik_core::{
    application::ports::Canvas,
    domain::{DomainError, Sketch, canvas::DEFAULT_GLYPH},
};
use tracing::instrument;

use super::draw_failed;

/// Production canvas: a label line followed by the raster.
///
/// The writer sits behind a `Mutex` so the canvas satisfies `Canvas: Sync`
/// and can be shared as `&dyn Canvas`.
pub struct WriterCanvas<W: Write + Send> {
    out: Mutex<W>,
    glyph: char,
}

impl WriterCanvas<io::Stdout> {
    /// Canvas over standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> WriterCanvas<W> {
    /// Create a canvas over `out` using the default glyph.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            glyph: DEFAULT_GLYPH,
        }
    }

    /// Use `glyph` for filled cells.
    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Recover the writer (testing helper).
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Canvas for WriterCanvas<W> {
    #[instrument(skip_all, fields(shape = %sketch.label))]
    fn render(&self, sketch: &Sketch) -> Result<(), DomainError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| draw_failed(sketch, "canvas lock poisoned"))?;

        writeln!(out, "{}", sketch.label).map_err(|e| draw_failed(sketch, e))?;
        for row in sketch.with_glyph(self.glyph) {
            writeln!(out, "{row}").map_err(|e| draw_failed(sketch, e))?;
        }
        out.flush().map_err(|e| draw_failed(sketch, e))
    }
}
