//! Factories: tag dispatch from free text to boxed products.
//!
//! Both factories are stateless unit structs. Every call allocates a fresh
//! product, so two calls with the same arguments give value-equal but
//! distinct instances. An unrecognised tag is an error, never an absent
//! value.

use tracing::{debug, instrument};

use crate::domain::{
    entities::{
        computer::{Computer, Pc, Server},
        shape::{Circle, Rectangle, Shape, Square, Triangle},
    },
    error::DomainError,
    value_objects::{ComputerKind, ComputerSpec, ShapeKind},
};

// ── Abstract factory ─────────────────────────────────────────────────────────

/// One factory per computer family.
pub trait ComputerAbstractFactory: Send + Sync {
    fn kind(&self) -> ComputerKind;

    fn create_computer(&self) -> Box<dyn Computer>;
}

/// Builds [`Pc`]s from a fixed spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcFactory {
    spec: ComputerSpec,
}

impl PcFactory {
    pub fn new(spec: ComputerSpec) -> Self {
        Self { spec }
    }
}

impl ComputerAbstractFactory for PcFactory {
    fn kind(&self) -> ComputerKind {
        ComputerKind::Pc
    }

    fn create_computer(&self) -> Box<dyn Computer> {
        Box::new(Pc::new(self.spec.clone()))
    }
}

/// Builds [`Server`]s from a fixed spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerFactory {
    spec: ComputerSpec,
}

impl ServerFactory {
    pub fn new(spec: ComputerSpec) -> Self {
        Self { spec }
    }
}

impl ComputerAbstractFactory for ServerFactory {
    fn kind(&self) -> ComputerKind {
        ComputerKind::Server
    }

    fn create_computer(&self) -> Box<dyn Computer> {
        Box::new(Server::new(self.spec.clone()))
    }
}

// ── ComputerFactory ──────────────────────────────────────────────────────────

/// Static dispatcher from a computer type tag to a product.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputerFactory;

impl ComputerFactory {
    /// Build a computer from a case-insensitive tag (`"pc"` or `"server"`).
    ///
    /// `ram`, `hdd` and `cpu` are stored verbatim.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnrecognizedComputerKind`] for any other tag, including
    /// the empty string.
    #[instrument(level = "debug", skip(ram, hdd, cpu))]
    pub fn get_computer(
        kind: &str,
        ram: &str,
        hdd: &str,
        cpu: &str,
    ) -> Result<Box<dyn Computer>, DomainError> {
        let factory = Self::factory_for(kind, ComputerSpec::new(ram, hdd, cpu))?;
        Ok(Self::from_factory(factory.as_ref()))
    }

    /// The family factory for a tag.
    pub fn factory_for(
        kind: &str,
        spec: ComputerSpec,
    ) -> Result<Box<dyn ComputerAbstractFactory>, DomainError> {
        let kind: ComputerKind = kind.parse()?;
        Ok(match kind {
            ComputerKind::Pc => Box::new(PcFactory::new(spec)),
            ComputerKind::Server => Box::new(ServerFactory::new(spec)),
        })
    }

    /// Build through a family factory.
    pub fn from_factory(factory: &dyn ComputerAbstractFactory) -> Box<dyn Computer> {
        let computer = factory.create_computer();
        debug!(kind = %computer.kind(), "Computer built");
        computer
    }
}

// ── ShapeFactory ─────────────────────────────────────────────────────────────

/// Static dispatcher from a shape tag plus dimensions to a shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeFactory;

impl ShapeFactory {
    /// Build a shape from a case-insensitive tag and its dimensions, in the
    /// order given by [`ShapeKind::parameters`].
    #[instrument(level = "debug")]
    pub fn get_shape(kind: &str, dims: &[f64]) -> Result<Box<dyn Shape>, DomainError> {
        let kind: ShapeKind = kind.parse()?;
        Self::create(kind, dims)
    }

    pub fn create(kind: ShapeKind, dims: &[f64]) -> Result<Box<dyn Shape>, DomainError> {
        let expected = kind.parameters().len();
        if dims.len() != expected {
            return Err(DomainError::WrongDimensionCount {
                shape: kind.as_str(),
                expected,
                actual: dims.len(),
            });
        }

        let shape: Box<dyn Shape> = match kind {
            ShapeKind::Circle => Box::new(Circle::new(dims[0])?),
            ShapeKind::Rectangle => Box::new(Rectangle::new(dims[0], dims[1])?),
            ShapeKind::Square => Box::new(Square::new(dims[0])?),
            ShapeKind::Triangle => Box::new(Triangle::new(dims[0], dims[1], dims[2])?),
        };

        debug!(shape = %shape.label(), "Shape built");
        Ok(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pc_any_case_echoes_fields() {
        for tag in ["PC", "Pc", "pC", "pc"] {
            let computer = ComputerFactory::get_computer(tag, "16GB", "512GB", "i7").unwrap();
            assert_eq!(computer.kind(), ComputerKind::Pc);
            assert_eq!(computer.ram(), "16GB");
            assert_eq!(computer.hdd(), "512GB");
            assert_eq!(computer.cpu(), "i7");
        }
    }

    #[test]
    fn server_any_case_echoes_fields() {
        for tag in ["server", "Server", "SERVER", "sErVer"] {
            let computer = ComputerFactory::get_computer(tag, "64GB", "2TB", "Xeon").unwrap();
            assert_eq!(computer.kind(), ComputerKind::Server);
            assert_eq!(computer.ram(), "64GB");
            assert_eq!(computer.hdd(), "2TB");
            assert_eq!(computer.cpu(), "Xeon");
        }
    }

    #[test]
    fn unknown_tag_is_an_error() {
        for tag in ["Laptop", "", "mainframe"] {
            let err = ComputerFactory::get_computer(tag, "8GB", "256GB", "i5").unwrap_err();
            assert_eq!(
                err,
                DomainError::UnrecognizedComputerKind { tag: tag.into() }
            );
        }
    }

    #[test]
    fn fields_are_not_validated() {
        let computer = ComputerFactory::get_computer("pc", "", "  lots ", "??").unwrap();
        assert_eq!(computer.ram(), "");
        assert_eq!(computer.hdd(), "  lots ");
        assert_eq!(computer.cpu(), "??");
    }

    #[test]
    fn repeated_calls_are_equal_but_distinct() {
        let first = ComputerFactory::get_computer("PC", "16GB", "512GB", "i7").unwrap();
        let second = ComputerFactory::get_computer("PC", "16GB", "512GB", "i7").unwrap();
        assert_eq!(first.spec(), second.spec());
        assert_eq!(first.kind(), second.kind());

        let a = first.as_ref() as *const dyn Computer as *const ();
        let b = second.as_ref() as *const dyn Computer as *const ();
        assert_ne!(a, b);
    }

    #[test]
    fn abstract_factories_build_their_family() {
        let spec = ComputerSpec::new("2 GB", "500 GB", "2.4 GHz");
        let pc = ComputerFactory::from_factory(&PcFactory::new(spec.clone()));
        let server = ComputerFactory::from_factory(&ServerFactory::new(spec.clone()));
        assert_eq!(pc.kind(), ComputerKind::Pc);
        assert_eq!(server.kind(), ComputerKind::Server);
        assert_eq!(pc.spec(), &spec);
    }

    #[test]
    fn factory_for_rejects_unknown_tag() {
        let spec = ComputerSpec::new("1", "2", "3");
        assert!(ComputerFactory::factory_for("tablet", spec).is_err());
    }

    #[test]
    fn shape_factory_builds_circle() {
        let circle = ShapeFactory::get_shape("Circle", &[2.0]).unwrap();
        assert_eq!(circle.kind(), ShapeKind::Circle);
        assert!((circle.area() - 12.566).abs() < 1e-3);
    }

    #[test]
    fn shape_factory_checks_arity() {
        let err = ShapeFactory::get_shape("rectangle", &[1.0]).unwrap_err();
        assert_eq!(
            err,
            DomainError::WrongDimensionCount {
                shape: "rectangle",
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn shape_factory_rejects_unknown_and_invalid() {
        assert!(matches!(
            ShapeFactory::get_shape("hexagon", &[1.0]),
            Err(DomainError::UnrecognizedShapeKind { .. })
        ));
        assert!(matches!(
            ShapeFactory::get_shape("square", &[-3.0]),
            Err(DomainError::InvalidDimension { .. })
        ));
    }
}
