#![doc = r#"lorentz-core: (1+1)-dimensional special-relativity kernel.

This crate provides:
- Core types Scalar and StVector (a spacetime point or displacement)
- gamma_factor, boost, boost_about free functions over StVector
- compose_velocity implementing relativistic velocity addition
- Boost: a frame velocity validated once, reusable across many points
- interval_sq: the Lorentz-invariant quadratic form t^2 - x^2

Units: the speed of light is 1, so velocities are dimensionless and
|v| < 1 means sub-luminal. Frame boost velocities must be sub-luminal;
nothing in this crate constrains the slope of the worldlines higher
layers build out of these vectors.
"#]

use std::ops::{Add, Mul, Neg, Sub};

use thiserror::Error;

pub type Scalar = f64;

/// Errors for kinematically invalid frame velocities.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RelativityError {
    #[error("boost velocity {0} is not sub-luminal (|v| must be < 1)")]
    InvalidBoostVelocity(Scalar),

    #[error("gamma factor undefined for velocity {0} (|v| must be < 1)")]
    UndefinedGamma(Scalar),
}

/// A spacetime point or displacement (t, x), with c = 1.
///
/// Component order follows the physics convention for 4-position: time
/// first. Whether a value is a point or a displacement is contextual;
/// `boost_about` treats its argument as a point, `boost` as a displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StVector {
    pub t: Scalar,
    pub x: Scalar,
}

impl StVector {
    #[inline]
    pub fn new(t: Scalar, x: Scalar) -> Self {
        Self { t, x }
    }

    /// Lorentz-invariant squared interval of this displacement,
    /// t^2 - x^2 (positive timelike, negative spacelike, zero null).
    #[inline]
    pub fn interval_sq(self) -> Scalar {
        self.t * self.t - self.x * self.x
    }

    /// Componentwise equality within an absolute tolerance.
    #[inline]
    pub fn approx_eq(self, other: StVector, tol: Scalar) -> bool {
        (self.t - other.t).abs() <= tol && (self.x - other.x).abs() <= tol
    }
}

impl Add for StVector {
    type Output = StVector;
    #[inline]
    fn add(self, rhs: StVector) -> StVector {
        StVector::new(self.t + rhs.t, self.x + rhs.x)
    }
}

impl Sub for StVector {
    type Output = StVector;
    #[inline]
    fn sub(self, rhs: StVector) -> StVector {
        StVector::new(self.t - rhs.t, self.x - rhs.x)
    }
}

impl Neg for StVector {
    type Output = StVector;
    #[inline]
    fn neg(self) -> StVector {
        StVector::new(-self.t, -self.x)
    }
}

impl Mul<Scalar> for StVector {
    type Output = StVector;
    #[inline]
    fn mul(self, k: Scalar) -> StVector {
        StVector::new(self.t * k, self.x * k)
    }
}

impl From<(Scalar, Scalar)> for StVector {
    #[inline]
    fn from((t, x): (Scalar, Scalar)) -> Self {
        StVector::new(t, x)
    }
}

/// Relativistic gamma factor 1/sqrt(1 - v^2).
///
/// Fails for |v| >= 1 (including NaN), where the factor is undefined.
#[inline]
pub fn gamma_factor(v: Scalar) -> Result<Scalar, RelativityError> {
    if !(v.abs() < 1.0) {
        return Err(RelativityError::UndefinedGamma(v));
    }
    Ok(1.0 / (1.0 - v * v).sqrt())
}

/// Lorentz boost of a displacement into the frame moving at velocity v:
/// t' = gamma (t - v x), x' = gamma (x - v t).
///
/// Fails for |v| >= 1: a frame velocity must be sub-luminal even though
/// worldlines with any slope may be represented as data.
#[inline]
pub fn boost(p: StVector, v: Scalar) -> Result<StVector, RelativityError> {
    if !(v.abs() < 1.0) {
        return Err(RelativityError::InvalidBoostVelocity(v));
    }
    let gamma = 1.0 / (1.0 - v * v).sqrt();
    Ok(StVector::new(
        gamma * (p.t - v * p.x),
        gamma * (p.x - v * p.t),
    ))
}

/// Lorentz boost of a point about a fixed origin:
/// boost(p - origin, v) + origin. The origin maps to itself.
#[inline]
pub fn boost_about(
    p: StVector,
    v: Scalar,
    origin: StVector,
) -> Result<StVector, RelativityError> {
    Ok(boost(p - origin, v)? + origin)
}

/// Relativistic velocity addition: (v1 + v2) / (1 + v1 v2).
///
/// Both inputs must be sub-luminal; the result then is too, and
/// boosting by v1 then v2 about a shared origin equals one boost by
/// the composed velocity.
#[inline]
pub fn compose_velocity(v1: Scalar, v2: Scalar) -> Result<Scalar, RelativityError> {
    if !(v1.abs() < 1.0) {
        return Err(RelativityError::InvalidBoostVelocity(v1));
    }
    if !(v2.abs() < 1.0) {
        return Err(RelativityError::InvalidBoostVelocity(v2));
    }
    Ok((v1 + v2) / (1.0 + v1 * v2))
}

/// A frame boost validated once at construction.
///
/// Holds the velocity and its gamma factor so the sub-luminal check and
/// the square root happen once per transform batch rather than once per
/// point. Geometry layers take `&Boost` and are infallible from there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boost {
    v: Scalar,
    gamma: Scalar,
}

impl Boost {
    pub fn new(v: Scalar) -> Result<Self, RelativityError> {
        if !(v.abs() < 1.0) {
            return Err(RelativityError::InvalidBoostVelocity(v));
        }
        Ok(Self {
            v,
            gamma: 1.0 / (1.0 - v * v).sqrt(),
        })
    }

    #[inline]
    pub fn velocity(&self) -> Scalar {
        self.v
    }

    #[inline]
    pub fn gamma(&self) -> Scalar {
        self.gamma
    }

    /// Boost a displacement (no origin shift).
    #[inline]
    pub fn apply(&self, p: StVector) -> StVector {
        StVector::new(
            self.gamma * (p.t - self.v * p.x),
            self.gamma * (p.x - self.v * p.t),
        )
    }

    /// Boost a point about a fixed origin.
    #[inline]
    pub fn apply_about(&self, p: StVector, origin: StVector) -> StVector {
        self.apply(p - origin) + origin
    }

    /// The boost undoing this one.
    #[inline]
    pub fn inverse(&self) -> Boost {
        Boost {
            v: -self.v,
            gamma: self.gamma,
        }
    }

    /// The single boost equivalent to this one followed by `next`,
    /// via relativistic velocity addition.
    #[inline]
    pub fn then(&self, next: &Boost) -> Boost {
        let v = (self.v + next.v) / (1.0 + self.v * next.v);
        Boost {
            v,
            gamma: 1.0 / (1.0 - v * v).sqrt(),
        }
    }
}
