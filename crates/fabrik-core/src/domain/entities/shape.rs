//! Shape capability and its geometric variants.
//!
//! Constructors validate their dimensions (finite and `>= 0`; triangles must
//! also close), so every live shape yields a non-negative area and perimeter.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    canvas::{Canvas, Sketch},
    error::DomainError,
    value_objects::ShapeKind,
};

/// Capability every geometric shape provides.
pub trait Shape: fmt::Debug + Send + Sync {
    fn kind(&self) -> ShapeKind;

    fn area(&self) -> f64;

    fn perimeter(&self) -> f64;

    /// One-line human description, e.g. `circle(radius=2)`.
    fn label(&self) -> String;

    /// Pure rendering of the shape; no side effects.
    fn sketch(&self) -> Sketch;

    /// Draw the shape onto `canvas`.
    fn draw(&self, canvas: &dyn Canvas) -> Result<(), DomainError> {
        canvas.render(&self.sketch())
    }
}

fn dimension(shape: &'static str, field: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DomainError::InvalidDimension {
            shape,
            field,
            value,
        })
    }
}

// ── Circle ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, DomainError> {
        Ok(Self {
            radius: dimension("circle", "radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn label(&self) -> String {
        format!("circle(radius={})", self.radius)
    }

    fn sketch(&self) -> Sketch {
        let r = self.radius;
        let d = 2.0 * r;
        Sketch::rasterise(self.kind(), self.label(), d, d, |x, y| {
            (x - r).powi(2) + (y - r).powi(2) <= r * r
        })
    }
}

// ── Rectangle ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self, DomainError> {
        Ok(Self {
            width: dimension("rectangle", "width", width)?,
            height: dimension("rectangle", "height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn label(&self) -> String {
        format!("rectangle(width={}, height={})", self.width, self.height)
    }

    fn sketch(&self) -> Sketch {
        Sketch::rasterise(self.kind(), self.label(), self.width, self.height, |_, _| true)
    }
}

// ── Square ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Result<Self, DomainError> {
        Ok(Self {
            side: dimension("square", "side", side)?,
        })
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn perimeter(&self) -> f64 {
        4.0 * self.side
    }

    fn label(&self) -> String {
        format!("square(side={})", self.side)
    }

    fn sketch(&self) -> Sketch {
        Sketch::rasterise(self.kind(), self.label(), self.side, self.side, |_, _| true)
    }
}

// ── Triangle ─────────────────────────────────────────────────────────────────

/// A triangle given by its three side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, DomainError> {
        let a = dimension("triangle", "a", a)?;
        let b = dimension("triangle", "b", b)?;
        let c = dimension("triangle", "c", c)?;

        // degenerate (flat) triangles are allowed, impossible ones are not
        if a > b + c || b > a + c || c > a + b {
            return Err(DomainError::DegenerateTriangle { a, b, c });
        }

        Ok(Self { a, b, c })
    }

    pub fn sides(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

impl Shape for Triangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    /// Heron's formula.
    fn area(&self) -> f64 {
        let s = self.perimeter() / 2.0;
        // rounding can push a flat triangle slightly below zero
        (s * (s - self.a) * (s - self.b) * (s - self.c)).max(0.0).sqrt()
    }

    fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    fn label(&self) -> String {
        format!("triangle(a={}, b={}, c={})", self.a, self.b, self.c)
    }

    fn sketch(&self) -> Sketch {
        // side `a` on the x-axis from (0,0) to (a,0); apex at (px, h)
        let (a, b, c) = (self.a, self.b, self.c);
        if a <= 0.0 {
            return Sketch::rasterise(self.kind(), self.label(), 0.0, 0.0, |_, _| false);
        }
        let px = (a * a + c * c - b * b) / (2.0 * a);
        let h = 2.0 * self.area() / a;
        let left = px.min(0.0);
        let width = px.max(a) - left;

        Sketch::rasterise(self.kind(), self.label(), width, h, move |x, y| {
            let x = x + left;
            if h <= 0.0 || y > h {
                return false;
            }
            let t = y / h;
            let lo = px * t;
            let hi = a + (px - a) * t;
            x >= lo.min(hi) && x <= lo.max(hi)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::canvas::MockCanvas;

    const EPS: f64 = 1e-3;

    #[test]
    fn circle_radius_two() {
        let circle = Circle::new(2.0).unwrap();
        assert!((circle.area() - 12.566).abs() < EPS);
        assert!((circle.perimeter() - 12.566).abs() < EPS);
    }

    #[test]
    fn rectangle_and_square() {
        let rect = Rectangle::new(3.0, 4.0).unwrap();
        assert_eq!(rect.area(), 12.0);
        assert_eq!(rect.perimeter(), 14.0);

        let square = Square::new(5.0).unwrap();
        assert_eq!(square.area(), 25.0);
        assert_eq!(square.perimeter(), 20.0);
    }

    #[test]
    fn right_triangle_by_heron() {
        let tri = Triangle::new(3.0, 4.0, 5.0).unwrap();
        assert!((tri.area() - 6.0).abs() < EPS);
        assert_eq!(tri.perimeter(), 12.0);
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(matches!(
            Circle::new(-1.0),
            Err(DomainError::InvalidDimension { field: "radius", .. })
        ));
        assert!(Rectangle::new(f64::NAN, 1.0).is_err());
        assert!(Square::new(f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_impossible_triangle() {
        assert!(matches!(
            Triangle::new(1.0, 2.0, 10.0),
            Err(DomainError::DegenerateTriangle { .. })
        ));
    }

    #[test]
    fn zero_sized_shapes_are_valid() {
        let dot = Circle::new(0.0).unwrap();
        assert_eq!(dot.area(), 0.0);
        assert!(dot.sketch().rows.is_empty());

        let flat = Rectangle::new(16.0, 0.0).unwrap();
        assert_eq!(flat.area(), 0.0);
        assert!(flat.sketch().rows.is_empty());
    }

    #[test]
    fn draw_renders_sketch_once() {
        let square = Square::new(2.0).unwrap();
        let mut canvas = MockCanvas::new();
        canvas
            .expect_render()
            .withf(|sketch| sketch.kind == ShapeKind::Square && sketch.label == "square(side=2)")
            .times(1)
            .returning(|_| Ok(()));

        square.draw(&canvas).unwrap();
    }

    #[test]
    fn draw_propagates_canvas_failure() {
        let circle = Circle::new(1.0).unwrap();
        let mut canvas = MockCanvas::new();
        canvas.expect_render().returning(|s| {
            Err(DomainError::DrawFailed {
                shape: s.label.clone(),
                reason: "closed".into(),
            })
        });

        assert!(matches!(
            circle.draw(&canvas),
            Err(DomainError::DrawFailed { .. })
        ));
    }

    #[test]
    fn triangle_sketch_has_rows() {
        let tri = Triangle::new(4.0, 4.0, 4.0).unwrap();
        let sketch = tri.sketch();
        assert!(!sketch.rows.is_empty());
        // apex row is narrower than the base row
        let top = sketch.rows.first().unwrap().trim().len();
        let bottom = sketch.rows.last().unwrap().trim().len();
        assert!(top < bottom);
    }
}
