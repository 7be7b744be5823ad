//! Constant-time `sqrt_ratio` for any odd prime field.
//!
//! <https://www.rfc-editor.org/rfc/rfc9380.html#name-sqrt_ratio-for-any-field>

use crate::{Field, FieldElement, ct};
use bigint::Uint;
use subtle::{Choice, ConstantTimeEq};

/// Output of `sqrt_ratio(u, v)`.
#[derive(Clone, Copy, Debug)]
pub struct SqrtRatio<E> {
    /// Set when `u / v` is a non-zero square.
    pub is_qr: Choice,
    /// `sqrt(u / v)` when `is_qr` is set, otherwise `sqrt(Z * u / v)`.
    pub ratio: E,
}

/// Computes square roots of ratios of field elements.
pub trait SqrtRatioCalculator {
    /// Field element type.
    type Element;

    /// `sqrt_ratio(u, v)` for `v != 0`.
    fn sqrt_ratio(&self, u: &Self::Element, v: &Self::Element) -> SqrtRatio<Self::Element>;
}

/// [`SqrtRatioCalculator`] for arbitrary `p` with constants derived from the
/// field and the map constant `Z`.
#[derive(Clone, Copy, Debug)]
pub struct GenericSqrtRatio<const LIMBS: usize> {
    one: FieldElement<LIMBS>,
    /// 2-adicity of `p - 1`
    c1: usize,
    /// `(c2 - 1) / 2` where `c2 = (p - 1) / 2^c1`
    c3: Uint<LIMBS>,
    /// `2^c1 - 1`
    c4: Uint<LIMBS>,
    /// `2^(c1 - 1)`
    c5: Uint<LIMBS>,
    /// `Z^c2`
    c6: FieldElement<LIMBS>,
    /// `Z^((c2 + 1) / 2)`
    c7: FieldElement<LIMBS>,
}

impl<const LIMBS: usize> GenericSqrtRatio<LIMBS> {
    /// Precompute constants for `field` and the non-square `z`.
    pub fn new(field: &Field<LIMBS>, z: &FieldElement<LIMBS>) -> Self {
        let c1 = field.two_adicity();
        let c2 = field.odd_part();

        Self {
            one: field.one(),
            c1,
            c3: c2.shr_vartime(1),
            c4: Uint::ONE.shl_vartime(c1).wrapping_sub(&Uint::ONE),
            c5: Uint::ONE.shl_vartime(c1 - 1),
            c6: z.pow(c2),
            c7: z.pow(&c2.wrapping_add(&Uint::ONE).shr_vartime(1)),
        }
    }
}

impl<const LIMBS: usize> SqrtRatioCalculator for GenericSqrtRatio<LIMBS> {
    type Element = FieldElement<LIMBS>;

    fn sqrt_ratio(
        &self,
        u: &FieldElement<LIMBS>,
        v: &FieldElement<LIMBS>,
    ) -> SqrtRatio<FieldElement<LIMBS>> {
        let mut tv1 = self.c6;
        let mut tv2 = v.pow(&self.c4);
        let mut tv3 = tv2.square();
        tv3 *= *v;
        let mut tv5 = *u * tv3;
        tv5 = tv5.pow(&self.c3);
        tv5 *= tv2;
        tv2 = tv5 * v;
        tv3 = tv5 * u;
        let mut tv4 = tv3 * tv2;
        tv5 = tv4.pow(&self.c5);
        let is_qr = tv5.ct_eq(&self.one);
        tv2 = tv3 * self.c7;
        tv5 = tv4 * tv1;
        tv3 = ct::select(&tv2, &tv3, is_qr);
        tv4 = ct::select(&tv5, &tv4, is_qr);

        for i in (2..=self.c1).rev() {
            tv5 = tv4.sqn(i - 2);
            let e1 = tv5.ct_eq(&self.one);
            tv2 = tv3 * tv1;
            tv1 = tv1.square();
            tv5 = tv4 * tv1;
            tv3 = ct::select(&tv2, &tv3, e1);
            tv4 = ct::select(&tv5, &tv4, e1);
        }

        SqrtRatio { is_qr, ratio: tv3 }
    }
}
