//! Error types for territory generation

use thiserror::Error;

/// Errors that can occur while generating a world
///
/// Everything except `InvalidConfig` signals a broken internal invariant.
/// They are surfaced as values so tests can assert on them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerritoryError {
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The contour tracer reached a corner with no boundary edge to continue along
    #[error("no edges to follow while tracing region {region} at corner ({x}, {y})")]
    NoEdgeToFollow { region: usize, x: usize, y: usize },

    /// The contour tracer walked more unit edges than the grid contains
    #[error("contour of region {region} did not close after {steps} steps")]
    ContourNotClosed { region: usize, steps: usize },

    /// Small-region merging kept changing the grid past its iteration cap
    #[error("region merging did not converge after {iterations} iterations")]
    MergeDidNotConverge { iterations: usize },
}

/// Result type alias for territory operations
pub type Result<T> = std::result::Result<T, TerritoryError>;
