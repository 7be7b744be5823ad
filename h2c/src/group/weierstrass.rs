use super::CurveGroup;
use crate::{Error, FieldElement, Result, ct};
use alloc::vec::Vec;
use bigint::Uint;
use core::{fmt, marker::PhantomData};
use elliptic_curve::{
    AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, ProjectivePoint,
    ff::PrimeField,
    group::Curve as _,
    sec1::{EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint},
};

/// [`CurveGroup`] for any short Weierstrass curve implementing the
/// `elliptic-curve` arithmetic traits, e.g. `p256::NistP256`.
///
/// Coordinates and scalars cross the boundary as SEC1 field bytes.
pub struct Weierstrass<C>(PhantomData<fn() -> C>);

impl<C, const LIMBS: usize> CurveGroup<LIMBS> for Weierstrass<C>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    type Point = ProjectivePoint<C>;
    type Scalar = C::Scalar;

    fn from_affine(x: &FieldElement<LIMBS>, y: &FieldElement<LIMBS>) -> Result<Self::Point> {
        let x = field_bytes::<C>(&x.to_bytes()).ok_or(Error::InvalidPoint)?;
        let y = field_bytes::<C>(&y.to_bytes()).ok_or(Error::InvalidPoint)?;
        let encoded = EncodedPoint::<C>::from_affine_coordinates(&x, &y, false);

        Option::<AffinePoint<C>>::from(AffinePoint::<C>::from_encoded_point(&encoded))
            .map(ProjectivePoint::<C>::from)
            .ok_or(Error::InvalidPoint)
    }

    fn scalar(k: &Uint<LIMBS>) -> Result<Self::Scalar> {
        let len = FieldBytes::<C>::default().len();
        let repr = field_bytes::<C>(&ct::i2osp(k, len)?).ok_or(Error::EncodingTooLarge)?;
        Option::from(C::Scalar::from_repr(repr)).ok_or(Error::EncodingTooLarge)
    }

    fn mul(point: &Self::Point, k: &Self::Scalar) -> Self::Point {
        *point * *k
    }

    fn to_affine(point: &Self::Point) -> Option<(Vec<u8>, Vec<u8>)> {
        let encoded = point.to_affine().to_encoded_point(false);
        Some((encoded.x()?.to_vec(), encoded.y()?.to_vec()))
    }
}

impl<C> Clone for Weierstrass<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Weierstrass<C> {}

impl<C> fmt::Debug for Weierstrass<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Weierstrass")
    }
}

fn field_bytes<C: CurveArithmetic>(bytes: &[u8]) -> Option<FieldBytes<C>> {
    let mut out = FieldBytes::<C>::default();
    if out.len() != bytes.len() {
        return None;
    }
    out.copy_from_slice(bytes);
    Some(out)
}
