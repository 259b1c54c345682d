// ============================================================================
// domain/error.rs - PRODUCT & GEOMETRY ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass around and compare in tests)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Dispatch Errors (404-level equivalent)
    // ========================================================================
    #[error("unrecognized computer type '{tag}'")]
    UnrecognizedComputerKind { tag: String },

    #[error("unrecognized shape '{tag}'")]
    UnrecognizedShapeKind { tag: String },

    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid {field} for {shape}: {value} (must be a finite number >= 0)")]
    InvalidDimension {
        shape: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("{shape} takes {expected} dimension(s), got {actual}")]
    WrongDimensionCount {
        shape: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("sides {a}, {b}, {c} do not form a triangle")]
    DegenerateTriangle { a: f64, b: f64, c: f64 },

    // ========================================================================
    // Rendering Errors
    // ========================================================================
    #[error("failed to draw {shape}: {reason}")]
    DrawFailed { shape: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnrecognizedComputerKind { tag } => vec![
                format!("'{}' is not a known computer type", tag),
                "Known types (case-insensitive):".into(),
                "  • pc     - Personal computer".into(),
                "  • server - Server machine".into(),
                "Try: fabrik list".into(),
            ],
            Self::UnrecognizedShapeKind { tag } => vec![
                format!("'{}' is not a known shape", tag),
                "Known shapes: circle, rectangle, square, triangle".into(),
                "Try: fabrik list".into(),
            ],
            Self::InvalidDimension { field, .. } => vec![
                format!("Provide a non-negative number for {}", field),
            ],
            Self::WrongDimensionCount { shape, expected, .. } => vec![format!(
                "{} expects exactly {} dimension(s)",
                shape, expected
            )],
            Self::DegenerateTriangle { .. } => vec![
                "Each side must be shorter than the sum of the other two".into(),
                "Example: fabrik shape triangle 3 4 5".into(),
            ],
            Self::DrawFailed { .. } => vec!["Check that the output is writable".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnrecognizedComputerKind { .. } | Self::UnrecognizedShapeKind { .. } => {
                ErrorCategory::NotFound
            }
            Self::InvalidDimension { .. }
            | Self::WrongDimensionCount { .. }
            | Self::DegenerateTriangle { .. } => ErrorCategory::Validation,
            Self::DrawFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_computer_suggests_known_types() {
        let err = DomainError::UnrecognizedComputerKind {
            tag: "laptop".into(),
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("pc")));
        assert!(suggestions.iter().any(|s| s.contains("server")));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn geometry_errors_are_validation() {
        let err = DomainError::DegenerateTriangle {
            a: 1.0,
            b: 1.0,
            c: 5.0,
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("do not form a triangle"));
    }
}
