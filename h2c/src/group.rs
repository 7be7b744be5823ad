//! Group arithmetic consumed by the mapping and cofactor-clearing stages.

#[cfg(feature = "arithmetic")]
mod weierstrass;

#[cfg(feature = "arithmetic")]
pub use weierstrass::Weierstrass;

use crate::{CurveParams, FieldElement, Result};
use alloc::vec::Vec;
use bigint::Uint;
use core::{fmt, ops::Add};

/// Elliptic curve group supplied by an external arithmetic backend.
pub trait CurveGroup<const LIMBS: usize> {
    /// Group element.
    type Point: Copy + Add<Output = Self::Point>;
    /// Scalar multiplier.
    type Scalar: Copy;

    /// Point with affine coordinates `(x, y)`.
    ///
    /// Fails with [`Error::InvalidPoint`](crate::Error::InvalidPoint) when the
    /// coordinates are not on the curve.
    fn from_affine(x: &FieldElement<LIMBS>, y: &FieldElement<LIMBS>) -> Result<Self::Point>;

    /// Scalar with integer value `k`.
    fn scalar(k: &Uint<LIMBS>) -> Result<Self::Scalar>;

    /// Returns `k * point`.
    fn mul(point: &Self::Point, k: &Self::Scalar) -> Self::Point;

    /// Big-endian affine coordinates, or `None` for the identity.
    fn to_affine(point: &Self::Point) -> Option<(Vec<u8>, Vec<u8>)>;
}

/// Final step of hash-to-curve, mapping a curve point into the prime-order
/// subgroup.
pub trait CurveProcessor {
    /// Group element.
    type Point;

    /// Returns `h_eff * point`.
    fn clear_cofactor(&self, point: &Self::Point) -> Self::Point;
}

/// Cofactor clearing by multiplication with the curve cofactor `h`.
pub struct ClearCofactor<G, const LIMBS: usize>
where
    G: CurveGroup<LIMBS>,
{
    h: G::Scalar,
}

impl<G, const LIMBS: usize> ClearCofactor<G, LIMBS>
where
    G: CurveGroup<LIMBS>,
{
    /// Multiply by the cofactor of `curve`.
    pub fn new(curve: &CurveParams<LIMBS>) -> Result<Self> {
        Self::with_cofactor(&curve.h)
    }

    /// Multiply by `h_eff`.
    pub fn with_cofactor(h_eff: &Uint<LIMBS>) -> Result<Self> {
        Ok(Self {
            h: G::scalar(h_eff)?,
        })
    }
}

impl<G, const LIMBS: usize> CurveProcessor for ClearCofactor<G, LIMBS>
where
    G: CurveGroup<LIMBS>,
{
    type Point = G::Point;

    fn clear_cofactor(&self, point: &G::Point) -> G::Point {
        G::mul(point, &self.h)
    }
}

impl<G, const LIMBS: usize> Clone for ClearCofactor<G, LIMBS>
where
    G: CurveGroup<LIMBS>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<G, const LIMBS: usize> Copy for ClearCofactor<G, LIMBS> where G: CurveGroup<LIMBS> {}

impl<G, const LIMBS: usize> fmt::Debug for ClearCofactor<G, LIMBS>
where
    G: CurveGroup<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClearCofactor").finish_non_exhaustive()
    }
}
