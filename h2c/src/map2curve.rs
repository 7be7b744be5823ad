//! Mapping field elements to curve points.

use crate::{
    CurveGroup, CurveParams, Error, Field, FieldElement, GenericSqrtRatio, Result,
    SqrtRatioCalculator, ct,
};
use core::{fmt, marker::PhantomData};

/// Deterministic map from a field element to a curve point.
pub trait MapToCurve {
    /// Field element type accepted by the map.
    type Element;
    /// Curve point type.
    type Point;

    /// Map `u` to a point on the curve.
    fn map_to_curve(&self, u: &Self::Element) -> Result<Self::Point>;
}

/// Simplified Shallue-van de Woestijne-Ulas map for `y^2 = x^3 + A * x + B`
/// with `A * B != 0`.
///
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-simplified-shallue-van-de-w>
pub struct Sswu<G, S, const LIMBS: usize> {
    field: Field<LIMBS>,
    a: FieldElement<LIMBS>,
    b: FieldElement<LIMBS>,
    z: FieldElement<LIMBS>,
    sqrt_ratio: S,
    group: PhantomData<fn() -> G>,
}

impl<G, const LIMBS: usize> Sswu<G, GenericSqrtRatio<LIMBS>, LIMBS>
where
    G: CurveGroup<LIMBS>,
{
    /// Map for `curve` with constant `z`, using the generic `sqrt_ratio`.
    pub fn new(curve: &CurveParams<LIMBS>, z: i64) -> Result<Self> {
        let field = curve.field()?;
        let z = field.element_from_i64(z);
        let sqrt_ratio = GenericSqrtRatio::new(&field, &z);
        Self::with_sqrt_ratio(curve, z, sqrt_ratio)
    }
}

impl<G, S, const LIMBS: usize> Sswu<G, S, LIMBS>
where
    G: CurveGroup<LIMBS>,
    S: SqrtRatioCalculator<Element = FieldElement<LIMBS>>,
{
    /// Map for `curve` with constant `z` and a caller-supplied `sqrt_ratio`.
    pub fn with_sqrt_ratio(
        curve: &CurveParams<LIMBS>,
        z: FieldElement<LIMBS>,
        sqrt_ratio: S,
    ) -> Result<Self> {
        let field = curve.field()?;
        if field.degree() != 1 {
            return Err(Error::UnsupportedField);
        }

        Ok(Self {
            field,
            a: field.element(&curve.a),
            b: field.element(&curve.b),
            z,
            sqrt_ratio,
            group: PhantomData,
        })
    }

    /// Affine coordinates of the image of `u`, before conversion to a group
    /// element.
    pub fn map_to_affine(
        &self,
        u: &FieldElement<LIMBS>,
    ) -> Result<(FieldElement<LIMBS>, FieldElement<LIMBS>)> {
        let one = self.field.one();

        let mut tv1 = u.square();
        tv1 *= self.z;
        let mut tv2 = tv1.square();
        tv2 += tv1;
        let mut tv3 = tv2 + one;
        tv3 *= self.b;
        let mut tv4 = ct::select(&self.z, &-tv2, !tv2.is_zero());
        tv4 *= self.a;
        tv2 = tv3.square();
        let mut tv6 = tv4.square();
        let mut tv5 = self.a * tv6;
        tv2 += tv5;
        tv2 *= tv3;
        tv6 *= tv4;
        tv5 = self.b * tv6;
        tv2 += tv5;
        let mut x = tv1 * tv3;
        let sqrt_ratio = self.sqrt_ratio.sqrt_ratio(&tv2, &tv6);
        let is_gx1_square = sqrt_ratio.is_qr;
        let y1 = sqrt_ratio.ratio;
        let mut y = tv1 * u;
        y *= y1;
        x = ct::select(&x, &tv3, is_gx1_square);
        y = ct::select(&y, &y1, is_gx1_square);
        let e1 = !(ct::sgn0(u, &self.field)? ^ ct::sgn0(&y, &self.field)?);
        y = ct::select(&-y, &y, e1);
        x *= ct::inv0(&tv4);

        Ok((x, y))
    }
}

impl<G, S, const LIMBS: usize> MapToCurve for Sswu<G, S, LIMBS>
where
    G: CurveGroup<LIMBS>,
    S: SqrtRatioCalculator<Element = FieldElement<LIMBS>>,
{
    type Element = FieldElement<LIMBS>;
    type Point = G::Point;

    fn map_to_curve(&self, u: &FieldElement<LIMBS>) -> Result<G::Point> {
        let (x, y) = self.map_to_affine(u)?;
        G::from_affine(&x, &y)
    }
}

impl<G, S, const LIMBS: usize> Clone for Sswu<G, S, LIMBS>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            a: self.a,
            b: self.b,
            z: self.z,
            sqrt_ratio: self.sqrt_ratio.clone(),
            group: PhantomData,
        }
    }
}

impl<G, S, const LIMBS: usize> fmt::Debug for Sswu<G, S, LIMBS>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sswu")
            .field("field", &self.field)
            .field("a", &self.a)
            .field("b", &self.b)
            .field("z", &self.z)
            .field("sqrt_ratio", &self.sqrt_ratio)
            .finish()
    }
}
