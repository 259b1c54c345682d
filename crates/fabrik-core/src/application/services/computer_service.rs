//! Computer Service - product assembly operations.
//!
//! Thin orchestration over [`ComputerFactory`]: dispatch, log, and lift
//! domain errors into [`FabrikError`](crate::error::FabrikError).

use tracing::{info, instrument};

use crate::{
    domain::{Computer, ComputerAbstractFactory, ComputerFactory, ComputerRecord, ComputerSpec},
    error::FabrikResult,
};

/// Service for building computers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputerService;

impl ComputerService {
    /// Create a new computer service.
    pub fn new() -> Self {
        Self
    }

    /// Build a computer from a type tag and its hardware fields.
    #[instrument(skip(self, spec))]
    pub fn assemble(&self, kind: &str, spec: &ComputerSpec) -> FabrikResult<Box<dyn Computer>> {
        let computer = ComputerFactory::get_computer(kind, &spec.ram, &spec.hdd, &spec.cpu)?;
        info!(kind = %computer.kind(), "Computer assembled");
        Ok(computer)
    }

    /// Build a computer through an already-chosen family factory.
    pub fn assemble_with(&self, factory: &dyn ComputerAbstractFactory) -> Box<dyn Computer> {
        ComputerFactory::from_factory(factory)
    }

    /// Build a computer and return its serialisable snapshot.
    pub fn record(&self, kind: &str, spec: &ComputerSpec) -> FabrikResult<ComputerRecord> {
        let computer = self.assemble(kind, spec)?;
        Ok(ComputerRecord::from(computer.as_ref()))
    }
}
