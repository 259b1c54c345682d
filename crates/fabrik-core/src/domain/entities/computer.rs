//! Computer products.
//!
//! `Pc` and `Server` carry the same [`ComputerSpec`] and differ only in the
//! family they report. Both are immutable once built: there are accessors
//! but no setters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ComputerKind, ComputerSpec};

/// Capability shared by every computer product.
pub trait Computer: fmt::Debug + fmt::Display + Send + Sync {
    /// The product family this instance belongs to.
    fn kind(&self) -> ComputerKind;

    /// The hardware fields, exactly as supplied at construction.
    fn spec(&self) -> &ComputerSpec;

    fn ram(&self) -> &str {
        &self.spec().ram
    }

    fn hdd(&self) -> &str {
        &self.spec().hdd
    }

    fn cpu(&self) -> &str {
        &self.spec().cpu
    }
}

/// A personal computer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pc {
    spec: ComputerSpec,
}

impl Pc {
    pub fn new(spec: ComputerSpec) -> Self {
        Self { spec }
    }
}

impl Computer for Pc {
    fn kind(&self) -> ComputerKind {
        ComputerKind::Pc
    }

    fn spec(&self) -> &ComputerSpec {
        &self.spec
    }
}

impl fmt::Display for Pc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec)
    }
}

/// A server machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    spec: ComputerSpec,
}

impl Server {
    pub fn new(spec: ComputerSpec) -> Self {
        Self { spec }
    }
}

impl Computer for Server {
    fn kind(&self) -> ComputerKind {
        ComputerKind::Server
    }

    fn spec(&self) -> &ComputerSpec {
        &self.spec
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec)
    }
}

/// Serialisable snapshot of any computer, for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerRecord {
    pub kind: ComputerKind,
    #[serde(flatten)]
    pub spec: ComputerSpec,
}

impl From<&dyn Computer> for ComputerRecord {
    fn from(computer: &dyn Computer) -> Self {
        Self {
            kind: computer.kind(),
            spec: computer.spec().clone(),
        }
    }
}
