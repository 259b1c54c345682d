//! In-memory canvas adapter for testing.

use std::sync::{Arc, RwLock};

use fabrik_core::{
    application::ports::Canvas,
    domain::{DomainError, Sketch},
};

use super::draw_failed;

/// In-memory canvas for testing.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// service under test owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryCanvas {
    inner: Arc<RwLock<Vec<Sketch>>>,
}

impl MemoryCanvas {
    /// Create a new empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every sketch rendered so far, in order.
    pub fn sketches(&self) -> Vec<Sketch> {
        self.inner
            .read()
            .map(|sketches| sketches.clone())
            .unwrap_or_default()
    }

    /// Number of sketches rendered.
    pub fn len(&self) -> usize {
        self.inner.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut sketches) = self.inner.write() {
            sketches.clear();
        }
    }
}

impl Canvas for MemoryCanvas {
    fn render(&self, sketch: &Sketch) -> Result<(), DomainError> {
        let mut sketches = self
            .inner
            .write()
            .map_err(|_| draw_failed(sketch, "canvas lock poisoned"))?;
        sketches.push(sketch.clone());
        Ok(())
    }
}
