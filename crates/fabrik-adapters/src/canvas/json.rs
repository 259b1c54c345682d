//! Canvas that emits one JSON object per sketch.

use std::io::{self, Write};
use std::sync::Mutex;

use fabrik_core::{
    application::ports::Canvas,
    domain::{DomainError, Sketch},
};

use super::draw_failed;

/// Machine-readable canvas: newline-delimited JSON sketches.
pub struct JsonLinesCanvas<W: Write + Send> {
    out: Mutex<W>,
}

impl JsonLinesCanvas<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonLinesCanvas<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Canvas for JsonLinesCanvas<W> {
    fn render(&self, sketch: &Sketch) -> Result<(), DomainError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| draw_failed(sketch, "canvas lock poisoned"))?;
        serde_json::to_writer(&mut *out, sketch).map_err(|e| draw_failed(sketch, e))?;
        writeln!(out).map_err(|e| draw_failed(sketch, e))
    }
}
