//! Catalog Service - what the factories can build.

use serde::Serialize;

use crate::domain::{ComputerKind, ShapeKind};

/// One buildable product, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductInfo {
    /// `"computer"` or `"shape"`.
    pub family: &'static str,
    pub name: &'static str,
    pub parameters: Vec<&'static str>,
    pub description: String,
}

/// Lists the product kinds every factory accepts.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// Every product, computers first.
    pub fn list(&self) -> Vec<ProductInfo> {
        self.computers().into_iter().chain(self.shapes()).collect()
    }

    pub fn computers(&self) -> Vec<ProductInfo> {
        ComputerKind::ALL
            .iter()
            .map(|kind| ProductInfo {
                family: "computer",
                name: kind.as_str(),
                parameters: vec!["ram", "hdd", "cpu"],
                description: kind.description().to_owned(),
            })
            .collect()
    }

    pub fn shapes(&self) -> Vec<ProductInfo> {
        ShapeKind::ALL
            .iter()
            .map(|kind| ProductInfo {
                family: "shape",
                name: kind.as_str(),
                parameters: kind.parameters().to_vec(),
                description: format!("{} ({})", kind, kind.parameters().join(", ")),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_kind() {
        let all = CatalogService::new().list();
        assert_eq!(all.len(), ComputerKind::ALL.len() + ShapeKind::ALL.len());
        assert_eq!(all[0].name, "PC");
        assert!(all.iter().any(|p| p.name == "triangle" && p.parameters.len() == 3));
    }
}
