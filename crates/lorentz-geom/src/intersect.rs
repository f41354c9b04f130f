//! Incidence between line-like shapes.
//!
//! Every line-like shape reduces to a carrier: an anchor, a direction, and
//! a parameter domain. The solver runs Cramer's rule on the 2x2 system
//! `anchorA + s dirA = anchorB + u dirB` and reports degenerate
//! configurations as typed errors instead of near-singular solutions.

use lorentz_core::{Scalar, StVector};

use crate::error::IntersectError;

/// Relative tolerance for the singularity test on the intersection
/// determinant (and for parallelism checks generally). Scaled by the max
/// absolute component of the vectors involved, so lines built from large
/// coordinates do not spuriously read as skew.
pub const PARALLEL_EPS: Scalar = 1e-9;

/// 2D cross product (the determinant of the pair).
#[inline]
pub(crate) fn cross(a: StVector, b: StVector) -> Scalar {
    a.t * b.x - a.x * b.t
}

#[inline]
fn max_component(v: StVector) -> Scalar {
    v.t.abs().max(v.x.abs())
}

/// True iff `a` and `b` are parallel within the scaled tolerance. A zero
/// vector is parallel to everything, which is the reading the coincidence
/// check below needs for a zero anchor displacement.
#[inline]
pub(crate) fn parallel_within(a: StVector, b: StVector) -> bool {
    let scale = 1.0_f64.max(max_component(a) * max_component(b));
    cross(a, b).abs() < PARALLEL_EPS * scale
}

/// Valid parameter range along a carrier's direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDomain {
    /// All of R: a Line.
    Full,
    /// [0, inf): a Ray.
    Half,
    /// [0, 1]: a Segment.
    Unit,
}

impl ParamDomain {
    /// Domain membership with a small slack so boundary hits (a ray meeting
    /// a line exactly at its anchor) are not lost to rounding.
    #[inline]
    pub fn contains(self, s: Scalar) -> bool {
        match self {
            ParamDomain::Full => s.is_finite(),
            ParamDomain::Half => s >= -PARALLEL_EPS,
            ParamDomain::Unit => s >= -PARALLEL_EPS && s <= 1.0 + PARALLEL_EPS,
        }
    }
}

/// The (anchor, direction, domain) reduction of a line-like shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Carrier {
    pub anchor: StVector,
    pub dir: StVector,
    pub domain: ParamDomain,
}

/// Solve for the unique incidence point of two carriers.
///
/// Errors:
/// - `CoincidentLines` when the carriers lie on one line (every point of
///   the overlap is an intersection, so no unique answer exists);
/// - `ParallelLines` when parallel and disjoint;
/// - `OutOfRange` when the unique line-line solution falls outside either
///   carrier's parameter domain.
pub fn intersect(a: &Carrier, b: &Carrier) -> Result<StVector, IntersectError> {
    let det = cross(a.dir, b.dir);
    let sep = b.anchor - a.anchor;

    let scale = 1.0_f64.max(max_component(a.dir) * max_component(b.dir));
    if det.abs() < PARALLEL_EPS * scale {
        return if parallel_within(a.dir, sep) {
            Err(IntersectError::CoincidentLines)
        } else {
            Err(IntersectError::ParallelLines)
        };
    }

    // Cramer on s dirA - u dirB = sep.
    let s = cross(sep, b.dir) / det;
    let u = cross(sep, a.dir) / det;
    if !a.domain.contains(s) {
        return Err(IntersectError::OutOfRange(s));
    }
    if !b.domain.contains(u) {
        return Err(IntersectError::OutOfRange(u));
    }
    Ok(a.anchor + a.dir * s)
}
