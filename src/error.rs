use thiserror::Error;

/// Reasons a polygon cannot be filled
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum FillError {
    #[error("at least 3 vertices are required to form a polygon, got {count}")]
    InsufficientVertices { count: usize },
}
