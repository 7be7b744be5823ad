//! Prime field arithmetic over a modulus supplied at runtime.
//!
//! Elements are stored in Montgomery form by `crypto-bigint`'s [`DynResidue`],
//! so every operation below runs in time independent of the element values.

mod sqrt;

use crate::{Error, Result, ct};
use alloc::vec::Vec;
use bigint::{
    Integer, Uint,
    modular::runtime_mod::{DynResidue, DynResidueParams},
};
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// The prime field `GF(p)`.
///
/// For curves defined over an extension `GF(p^m)` this is the prime subfield
/// and `degree` records `m`.
#[derive(Clone, Copy)]
pub struct Field<const LIMBS: usize> {
    params: DynResidueParams<LIMBS>,
    degree: usize,
    byte_len: usize,
    /// Two-adicity of `p - 1`.
    s: usize,
    /// Odd part of `p - 1`, i.e. `(p - 1) / 2^s`.
    t: Uint<LIMBS>,
    /// `c^t` for the smallest non-square `c`, a primitive `2^s`-th root of
    /// unity. `None` when no non-square was found.
    root_of_unity: Option<Uint<LIMBS>>,
}

impl<const LIMBS: usize> Field<LIMBS> {
    /// Prime field with modulus `p`.
    pub fn new(modulus: &Uint<LIMBS>) -> Result<Self> {
        Self::with_degree(modulus, 1)
    }

    /// Prime subfield of `GF(p^degree)`.
    ///
    /// The modulus must be odd and at least 3.
    pub fn with_degree(modulus: &Uint<LIMBS>, degree: usize) -> Result<Self> {
        if !modulus.bit_vartime(0) || modulus.bits_vartime() < 2 || degree == 0 {
            return Err(Error::InvalidModulus);
        }

        let mut s = 0;
        let mut t = modulus.wrapping_sub(&Uint::ONE);
        while !t.bit_vartime(0) {
            t = t.shr_vartime(1);
            s += 1;
        }

        let mut field = Self {
            params: DynResidueParams::new(modulus),
            degree,
            byte_len: modulus.bits_vartime().div_ceil(8),
            s,
            t,
            root_of_unity: None,
        };
        field.root_of_unity = field
            .first_non_square()
            .ok()
            .map(|c| c.pow(&t).to_uint());
        Ok(field)
    }

    /// Field modulus `p`.
    pub fn modulus(&self) -> &Uint<LIMBS> {
        self.params.modulus()
    }

    /// Extension degree `m`.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Length of the canonical big-endian encoding of an element.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Reduce `value` modulo `p`.
    pub fn element(&self, value: &Uint<LIMBS>) -> FieldElement<LIMBS> {
        FieldElement {
            inner: DynResidue::new(value, self.params),
        }
    }

    /// Embed a small unsigned integer.
    pub fn element_from_u64(&self, value: u64) -> FieldElement<LIMBS> {
        self.element(&Uint::from_u64(value))
    }

    /// Embed a small signed integer, mapping negative values to `p - |value|`.
    pub fn element_from_i64(&self, value: i64) -> FieldElement<LIMBS> {
        let magnitude = self.element_from_u64(value.unsigned_abs());
        if value < 0 { -magnitude } else { magnitude }
    }

    /// Interpret `bytes` as a big-endian integer of any length and reduce it
    /// modulo `p`.
    pub fn reduce_bytes(&self, bytes: &[u8]) -> FieldElement<LIMBS> {
        // chunks one byte short of the integer width never exceed it
        let chunk_len = Uint::<LIMBS>::BYTES - 1;
        let radix = self.element(&Uint::ONE.shl_vartime(8 * chunk_len));

        let (head, rest) = bytes.split_at(bytes.len() % chunk_len);
        let mut acc = self.element(&ct::uint_from_be_bytes(head));
        for chunk in rest.chunks_exact(chunk_len) {
            acc = acc * radix + self.element(&ct::uint_from_be_bytes(chunk));
        }
        acc
    }

    /// Additive identity.
    pub fn zero(&self) -> FieldElement<LIMBS> {
        FieldElement {
            inner: DynResidue::zero(self.params),
        }
    }

    /// Multiplicative identity.
    pub fn one(&self) -> FieldElement<LIMBS> {
        FieldElement {
            inner: DynResidue::one(self.params),
        }
    }

    /// Two-adicity `s` of `p - 1`.
    pub(crate) fn two_adicity(&self) -> usize {
        self.s
    }

    /// Odd part `t` of `p - 1 = 2^s * t`.
    pub(crate) fn odd_part(&self) -> &Uint<LIMBS> {
        &self.t
    }

    /// Primitive `2^s`-th root of unity used by Tonelli-Shanks.
    pub(crate) fn root_of_unity(&self) -> Result<FieldElement<LIMBS>> {
        self.root_of_unity
            .map(|c| self.element(&c))
            .ok_or(Error::NoNonSquareFound)
    }
}

impl<const LIMBS: usize> fmt::Debug for Field<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("modulus", self.modulus())
            .field("degree", &self.degree)
            .finish()
    }
}

/// Element of a [`Field`].
#[derive(Clone, Copy)]
pub struct FieldElement<const LIMBS: usize> {
    inner: DynResidue<LIMBS>,
}

impl<const LIMBS: usize> FieldElement<LIMBS> {
    /// Canonical integer representative in `[0, p)`.
    pub fn to_uint(&self) -> Uint<LIMBS> {
        self.inner.retrieve()
    }

    /// Big-endian encoding padded to the byte length of the modulus.
    pub fn to_bytes(&self) -> Vec<u8> {
        let byte_len = self.inner.params().modulus().bits_vartime().div_ceil(8);
        let mut bytes = ct::be_bytes(&self.to_uint());
        bytes.split_off(bytes.len() - byte_len)
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        self.to_uint().ct_eq(&Uint::ZERO)
    }

    /// Is the canonical representative odd?
    pub fn is_odd(&self) -> Choice {
        self.to_uint().is_odd()
    }

    /// Returns `self^2`.
    pub fn square(&self) -> Self {
        Self {
            inner: self.inner.square(),
        }
    }

    /// Returns `self^(2^n)`.
    pub fn sqn(&self, n: usize) -> Self {
        (0..n).fold(*self, |x, _| x.square())
    }

    /// Returns `self^exp`. Runs in time dependent only on the width of `exp`.
    pub fn pow(&self, exp: &Uint<LIMBS>) -> Self {
        Self {
            inner: self.inner.pow(exp),
        }
    }

    /// Multiplicative inverse computed as `self^(p - 2)`, with zero mapped to
    /// zero.
    pub fn invert(&self) -> Self {
        let exp = self
            .inner
            .params()
            .modulus()
            .wrapping_sub(&Uint::from_u8(2));
        self.pow(&exp)
    }
}

impl<const LIMBS: usize> fmt::Debug for FieldElement<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldElement").field(&self.to_uint()).finish()
    }
}

impl<const LIMBS: usize> ConditionallySelectable for FieldElement<LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            inner: DynResidue::conditional_select(&a.inner, &b.inner, choice),
        }
    }
}

impl<const LIMBS: usize> ConstantTimeEq for FieldElement<LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_uint().ct_eq(&other.to_uint())
    }
}

impl<const LIMBS: usize> PartialEq for FieldElement<LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const LIMBS: usize> Eq for FieldElement<LIMBS> {}

macro_rules! field_op {
    ($op:tt, $func:ident, $op_assign:tt, $func_assign:ident) => {
        impl<const LIMBS: usize> $op for FieldElement<LIMBS> {
            type Output = FieldElement<LIMBS>;

            #[inline]
            fn $func(self, rhs: FieldElement<LIMBS>) -> FieldElement<LIMBS> {
                FieldElement {
                    inner: self.inner.$func(&rhs.inner),
                }
            }
        }

        impl<const LIMBS: usize> $op<&Self> for FieldElement<LIMBS> {
            type Output = FieldElement<LIMBS>;

            #[inline]
            fn $func(self, rhs: &FieldElement<LIMBS>) -> FieldElement<LIMBS> {
                FieldElement {
                    inner: self.inner.$func(&rhs.inner),
                }
            }
        }

        impl<const LIMBS: usize> $op<Self> for &FieldElement<LIMBS> {
            type Output = FieldElement<LIMBS>;

            #[inline]
            fn $func(self, rhs: &FieldElement<LIMBS>) -> FieldElement<LIMBS> {
                FieldElement {
                    inner: self.inner.$func(&rhs.inner),
                }
            }
        }

        impl<const LIMBS: usize> $op_assign for FieldElement<LIMBS> {
            #[inline]
            fn $func_assign(&mut self, rhs: FieldElement<LIMBS>) {
                *self = $op::$func(*self, &rhs);
            }
        }
    };
}

field_op!(Add, add, AddAssign, add_assign);
field_op!(Sub, sub, SubAssign, sub_assign);
field_op!(Mul, mul, MulAssign, mul_assign);

impl<const LIMBS: usize> Neg for FieldElement<LIMBS> {
    type Output = FieldElement<LIMBS>;

    #[inline]
    fn neg(self) -> FieldElement<LIMBS> {
        FieldElement {
            inner: DynResidue::zero(*self.inner.params()).sub(&self.inner),
        }
    }
}

impl<const LIMBS: usize> Neg for &FieldElement<LIMBS> {
    type Output = FieldElement<LIMBS>;

    #[inline]
    fn neg(self) -> FieldElement<LIMBS> {
        -*self
    }
}

#[cfg(test)]
mod tests {
    use super::Field;
    use crate::Error;
    use bigint::{U64, U256};
    use hex_literal::hex;
    use proptest::prelude::*;

    fn f97() -> Field<{ U64::LIMBS }> {
        Field::new(&U64::from_u64(97)).unwrap()
    }

    #[test]
    fn rejects_bad_moduli() {
        assert_eq!(Field::new(&U64::from_u64(96)).unwrap_err(), Error::InvalidModulus);
        assert_eq!(Field::new(&U64::ONE).unwrap_err(), Error::InvalidModulus);
        assert_eq!(
            Field::with_degree(&U64::from_u64(97), 0).unwrap_err(),
            Error::InvalidModulus
        );
    }

    #[test]
    fn two_adicity() {
        // 96 = 2^5 * 3
        let field = f97();
        assert_eq!(field.two_adicity(), 5);
        assert_eq!(field.odd_part(), &U64::from_u64(3));
        assert_eq!(field.byte_len(), 1);
    }

    #[test]
    fn arithmetic() {
        let field = f97();
        let a = field.element_from_u64(5);
        let b = field.element_from_u64(20);

        assert_eq!(a * b, field.element_from_u64(3));
        assert_eq!(a + b, field.element_from_u64(25));
        assert_eq!(a - b, field.element_from_u64(82));
        assert_eq!(-a, field.element_from_u64(92));
        assert_eq!(field.element_from_i64(-10), field.element_from_u64(87));
        assert_eq!(a.square(), field.element_from_u64(25));
        assert_eq!(a.sqn(2), field.element_from_u64(625 % 97));
        assert_eq!(a.pow(&U64::from_u64(3)), field.element_from_u64(125 % 97));

        let mut c = a;
        c += b;
        c *= b;
        c -= a;
        assert_eq!(c, field.element_from_u64((25 * 20 - 5) % 97));
    }

    #[test]
    fn invert() {
        let field = f97();
        for v in 1..97 {
            let x = field.element_from_u64(v);
            assert_eq!(x * x.invert(), field.one());
        }
        assert_eq!(field.zero().invert(), field.zero());
    }

    #[test]
    fn encoding() {
        let field = Field::new(&U256::from_be_hex(
            "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        ))
        .unwrap();
        let x = field.element_from_i64(-1);
        assert_eq!(
            x.to_bytes(),
            hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffe")
        );
        assert_eq!(field.element_from_u64(1).to_bytes().len(), 32);
        assert!(bool::from(field.zero().is_zero()));
        assert!(bool::from(field.one().is_odd()));
        assert!(!bool::from(x.is_odd()));
    }

    #[test]
    fn parity() {
        let field = f97();
        for v in 0..97 {
            let x = field.element_from_u64(v);
            assert_eq!(bool::from(x.is_odd()), v % 2 == 1, "{v}");
            assert_eq!(bool::from((-x).is_odd()), v != 0 && v % 2 == 0, "{v}");
        }
    }

    #[test]
    fn reduce_wide_input() {
        let field = f97();
        let wide = hex!("0100000000000000000000000000000000000000");
        // 2^152 mod 97
        let expected = (0..152).fold(1u64, |acc, _| acc * 2 % 97);
        assert_eq!(field.reduce_bytes(&wide), field.element_from_u64(expected));
        assert_eq!(field.reduce_bytes(&[]), field.zero());
    }

    proptest! {
        #[test]
        fn reduce_bytes_matches_remainder(value in any::<u128>()) {
            let field = f97();
            let expected = u64::try_from(value % 97).unwrap();
            prop_assert_eq!(
                field.reduce_bytes(&value.to_be_bytes()),
                field.element_from_u64(expected)
            );
        }
    }
}
