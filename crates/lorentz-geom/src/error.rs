//! Crate-level error types for lorentz-geom.

use lorentz_core::Scalar;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    #[error("direction vector ({0}, {1}) is degenerate (zero within tolerance)")]
    DegenerateDirection(Scalar, Scalar),

    #[error("boundary directions must be parallel with matching orientation")]
    MismatchedDirections { same_orientation_required: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntersectError {
    #[error("carriers are parallel and disjoint")]
    ParallelLines,

    #[error("carriers lie on the same line")]
    CoincidentLines,

    #[error("intersection parameter {0} falls outside the shape's domain")]
    OutOfRange(Scalar),
}
