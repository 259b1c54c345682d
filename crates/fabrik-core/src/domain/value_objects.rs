//! Domain value objects: ComputerKind, ShapeKind, ComputerSpec.
//!
//! # Design
//!
//! The kind enums are pure value types: `Copy`, equality-by-value, no
//! identity. Their `FromStr` parsers are the single place where a free-text
//! tag becomes a product family, and they match case-insensitively.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add the constructor arm in `factory.rs`
//! 4. Done — nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ComputerKind ─────────────────────────────────────────────────────────────

/// A computer product family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputerKind {
    Pc,
    Server,
}

impl ComputerKind {
    pub const ALL: [ComputerKind; 2] = [Self::Pc, Self::Server];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::Server => "Server",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Pc => "Personal computer",
            Self::Server => "Server machine",
        }
    }
}

impl fmt::Display for ComputerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComputerKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pc" => Ok(Self::Pc),
            "server" => Ok(Self::Server),
            _ => Err(DomainError::UnrecognizedComputerKind { tag: s.to_owned() }),
        }
    }
}

// ── ShapeKind ────────────────────────────────────────────────────────────────

/// A geometric shape variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [Self::Circle, Self::Rectangle, Self::Square, Self::Triangle];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Square => "square",
            Self::Triangle => "triangle",
        }
    }

    /// Names of the dimensions this shape is built from, in argument order.
    pub const fn parameters(&self) -> &'static [&'static str] {
        match self {
            Self::Circle => &["radius"],
            Self::Rectangle => &["width", "height"],
            Self::Square => &["side"],
            Self::Triangle => &["a", "b", "c"],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "rectangle" | "rect" => Ok(Self::Rectangle),
            "square" => Ok(Self::Square),
            "triangle" => Ok(Self::Triangle),
            _ => Err(DomainError::UnrecognizedShapeKind { tag: s.to_owned() }),
        }
    }
}

// ── ComputerSpec ─────────────────────────────────────────────────────────────

/// The three opaque hardware fields every computer carries.
///
/// Values are stored verbatim; no format is imposed on any of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComputerSpec {
    pub ram: String,
    pub hdd: String,
    pub cpu: String,
}

impl ComputerSpec {
    pub fn new(ram: impl Into<String>, hdd: impl Into<String>, cpu: impl Into<String>) -> Self {
        Self {
            ram: ram.into(),
            hdd: hdd.into(),
            cpu: cpu.into(),
        }
    }
}

impl fmt::Display for ComputerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RAM={}, HDD={}, CPU={}", self.ram, self.hdd, self.cpu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computer_kind_parses_any_case() {
        for tag in ["pc", "PC", "Pc", "pC"] {
            assert_eq!(tag.parse::<ComputerKind>().unwrap(), ComputerKind::Pc);
        }
        for tag in ["server", "SERVER", "Server", "sErVeR"] {
            assert_eq!(tag.parse::<ComputerKind>().unwrap(), ComputerKind::Server);
        }
    }

    #[test]
    fn computer_kind_rejects_near_misses() {
        for tag in ["", " pc", "pc ", "servers", "laptop", "p c"] {
            assert_eq!(
                tag.parse::<ComputerKind>(),
                Err(DomainError::UnrecognizedComputerKind { tag: tag.into() })
            );
        }
    }

    #[test]
    fn computer_kind_display_is_canonical() {
        assert_eq!(ComputerKind::Pc.to_string(), "PC");
        assert_eq!(ComputerKind::Server.to_string(), "Server");
    }

    #[test]
    fn shape_kind_parses_and_lists_parameters() {
        assert_eq!("CIRCLE".parse::<ShapeKind>().unwrap(), ShapeKind::Circle);
        assert_eq!("rect".parse::<ShapeKind>().unwrap(), ShapeKind::Rectangle);
        assert!("hexagon".parse::<ShapeKind>().is_err());
        assert_eq!(ShapeKind::Triangle.parameters().len(), 3);
    }

    #[test]
    fn spec_display() {
        let spec = ComputerSpec::new("16GB", "512GB", "i7");
        assert_eq!(spec.to_string(), "RAM=16GB, HDD=512GB, CPU=i7");
    }
}
