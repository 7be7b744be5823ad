//! Quadratic residuosity and square roots for arbitrary odd prime moduli.

use super::{Field, FieldElement};
use crate::{Error, Result, ct};
use subtle::{Choice, ConstantTimeEq};

/// Largest candidate tried when searching for a quadratic non-residue.
const MAX_NON_SQUARE_CANDIDATE: u64 = 1000;

impl<const LIMBS: usize> Field<LIMBS> {
    /// Euler's criterion: `value^((p - 1) / 2)` is `0` or `1` exactly when
    /// `value` is a square (zero included).
    pub fn is_square(&self, value: &FieldElement<LIMBS>) -> Choice {
        let legendre = value.pow(&self.modulus().shr_vartime(1));
        legendre.is_zero() | legendre.ct_eq(&self.one())
    }

    /// Smallest positive integer that is not a square in this field.
    pub fn first_non_square(&self) -> Result<FieldElement<LIMBS>> {
        (1..=MAX_NON_SQUARE_CANDIDATE)
            .map(|candidate| self.element_from_u64(candidate))
            .find(|candidate| !bool::from(self.is_square(candidate)))
            .ok_or(Error::NoNonSquareFound)
    }

    /// Tonelli-Shanks square root with a fixed iteration count.
    ///
    /// The result is only meaningful when `value` is a square; callers test
    /// with [`Field::is_square`] first.
    pub fn sqrt(&self, value: &FieldElement<LIMBS>) -> Result<FieldElement<LIMBS>> {
        let c1 = self.two_adicity();
        let c2 = self.odd_part();
        let c3 = c2.shr_vartime(1);
        let c5 = self.root_of_unity()?;

        let mut z = value.pow(&c3);
        let mut t = z.square() * value;
        z *= *value;
        let mut b = t;
        let mut c = c5;

        for i in (2..=c1).rev() {
            b = b.sqn(i - 2);
            let e = b.ct_eq(&self.one());
            z = ct::select(&(z * c), &z, e);
            c = c.square();
            t = ct::select(&(t * c), &t, e);
            b = t;
        }

        Ok(z)
    }
}
