//! Traits for handling hash to curve.

use crate::{
    ClearCofactor, CurveGroup, CurveParams, CurveProcessor, Error, ExpandMsgXmd,
    GenericHashToField, GenericSqrtRatio, HashToField, MapToCurve, Result, Sswu, Suite,
};
use core::ops::Add;

/// Random-oracle hash-to-curve composed from its three stages.
#[derive(Clone, Debug)]
pub struct GroupDigest<F, M, P> {
    hash_to_field: F,
    map_to_curve: M,
    curve_processor: P,
}

/// [`GroupDigest`] built from the generic stage implementations:
/// `expand_message_xmd`, the simplified SWU map and cofactor clearing.
pub type HashToCurve<G, const LIMBS: usize> = GroupDigest<
    GenericHashToField<ExpandMsgXmd, LIMBS>,
    Sswu<G, GenericSqrtRatio<LIMBS>, LIMBS>,
    ClearCofactor<G, LIMBS>,
>;

impl<F, M, P> GroupDigest<F, M, P>
where
    F: HashToField,
    M: MapToCurve<Element = F::Element>,
    M::Point: Add<Output = M::Point>,
    P: CurveProcessor<Point = M::Point>,
{
    /// Compose the stages.
    pub fn new(hash_to_field: F, map_to_curve: M, curve_processor: P) -> Self {
        Self {
            hash_to_field,
            map_to_curve,
            curve_processor,
        }
    }

    /// Computes the hash to curve routine.
    ///
    /// From <https://www.rfc-editor.org/rfc/rfc9380.html>:
    ///
    /// > Uniform encoding from byte strings to points in G.
    /// > That is, the distribution of its output is statistically close
    /// > to uniform in G.
    ///
    /// # Errors
    ///
    /// - The hash-to-field stage yields fewer than two elements.
    /// - Any error raised by one of the stages.
    pub fn hash_to_curve(&self, message: &[u8]) -> Result<M::Point> {
        let u = self.hash_to_field.process(message)?;
        let coordinate = |i: usize| {
            u.get(i)
                .and_then(|element| element.first())
                .ok_or(Error::InvalidExpansionParameters)
        };

        let q0 = self.map_to_curve.map_to_curve(coordinate(0)?)?;
        let q1 = self.map_to_curve.map_to_curve(coordinate(1)?)?;
        Ok(self.curve_processor.clear_cofactor(&(q0 + q1)))
    }

    /// Hash-to-field stage.
    pub fn hash_to_field(&self) -> &F {
        &self.hash_to_field
    }

    /// Map-to-curve stage.
    pub fn map_to_curve(&self) -> &M {
        &self.map_to_curve
    }

    /// Cofactor-clearing stage.
    pub fn curve_processor(&self) -> &P {
        &self.curve_processor
    }
}

impl<G, const LIMBS: usize> HashToCurve<G, LIMBS>
where
    G: CurveGroup<LIMBS>,
{
    /// Hash-to-curve for `suite` over `curve` with domain separation tag
    /// `dst`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownSuite`] if `suite` does not target `curve`.
    /// - [`Error::InsufficientSecurityMargin`] if the suite digest is too
    ///   small for its security level.
    pub fn from_suite(suite: &Suite, curve: &CurveParams<LIMBS>, dst: &[u8]) -> Result<Self> {
        if suite.curve != curve.name {
            return Err(Error::UnknownSuite);
        }

        let expander = ExpandMsgXmd::new(suite.hash, suite.k)?;
        let hash_to_field = GenericHashToField::new(dst, curve.field()?, expander, suite.l);
        let map_to_curve = Sswu::new(curve, suite.z)?;
        let curve_processor = ClearCofactor::new(curve)?;

        Ok(Self::new(hash_to_field, map_to_curve, curve_processor))
    }
}
