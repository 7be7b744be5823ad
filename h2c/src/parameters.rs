//! Curve parameters and hash-to-curve suites.

use crate::{DigestAlgorithm, Error, Field, FieldElement, Result};
use alloc::{vec, vec::Vec};
use bigint::{U256, U384, U576, Uint};
use subtle::{Choice, ConstantTimeEq};

/// Largest `|Z|` tried by [`find_z`].
const MAX_Z_CANDIDATE: i64 = 1000;

/// Short Weierstrass curve `y^2 = x^3 + A * x + B` over `GF(p^m)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CurveParams<const LIMBS: usize> {
    /// Curve name, e.g. `P-256`.
    pub name: &'static str,
    /// Characteristic of the base field.
    pub p: Uint<LIMBS>,
    /// Extension degree of the base field.
    pub m: usize,
    /// Coefficient `A`.
    pub a: Uint<LIMBS>,
    /// Coefficient `B`.
    pub b: Uint<LIMBS>,
    /// Order of the prime-order subgroup.
    pub n: Uint<LIMBS>,
    /// Cofactor.
    pub h: Uint<LIMBS>,
}

impl<const LIMBS: usize> CurveParams<LIMBS> {
    /// Base (prime) field.
    pub fn field(&self) -> Result<Field<LIMBS>> {
        Field::with_degree(&self.p, self.m)
    }

    /// Scalar field modulo the subgroup order `n`.
    pub fn scalar_field(&self) -> Result<Field<LIMBS>> {
        Field::new(&self.n)
    }

    /// Does `(x, y)` satisfy the curve equation?
    pub fn is_on_curve(
        &self,
        x: &FieldElement<LIMBS>,
        y: &FieldElement<LIMBS>,
    ) -> Result<Choice> {
        let field = self.field()?;
        let rhs = x.square() * x + field.element(&self.a) * x + field.element(&self.b);
        Ok(y.square().ct_eq(&rhs))
    }
}

/// NIST P-256
pub const NIST_P256: CurveParams<{ U256::LIMBS }> = CurveParams {
    name: "P-256",
    p: U256::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
    m: 1,
    a: U256::from_be_hex("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
    b: U256::from_be_hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
    n: U256::from_be_hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
    h: U256::ONE,
};

/// NIST P-384
pub const NIST_P384: CurveParams<{ U384::LIMBS }> = CurveParams {
    name: "P-384",
    p: U384::from_be_hex(concat![
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe",
        "ffffffff0000000000000000ffffffff"
    ]),
    m: 1,
    a: U384::from_be_hex(concat![
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe",
        "ffffffff0000000000000000fffffffc"
    ]),
    b: U384::from_be_hex(concat![
        "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a",
        "c656398d8a2ed19d2a85c8edd3ec2aef"
    ]),
    n: U384::from_be_hex(concat![
        "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf",
        "581a0db248b0a77aecec196accc52973"
    ]),
    h: U384::ONE,
};

/// NIST P-521
pub const NIST_P521: CurveParams<{ U576::LIMBS }> = CurveParams {
    name: "P-521",
    p: U576::from_be_hex(concat![
        "00000000000001ffffffffffffffffffffffffffffffffffffffffffffffffff",
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "ffffffffffffffff"
    ]),
    m: 1,
    a: U576::from_be_hex(concat![
        "00000000000001ffffffffffffffffffffffffffffffffffffffffffffffffff",
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "fffffffffffffffc"
    ]),
    b: U576::from_be_hex(concat![
        "0000000000000051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3",
        "b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1",
        "ef451fd46b503f00"
    ]),
    n: U576::from_be_hex(concat![
        "00000000000001ffffffffffffffffffffffffffffffffffffffffffffffffff",
        "fffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47ae",
        "bb6fb71e91386409"
    ]),
    h: U576::ONE,
};

/// Hash-to-curve suite: hash function, map constant `Z`, per-element byte
/// length `L` and security level `k` in bits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Suite {
    /// Suite identifier, e.g. `P256_XMD:SHA-256_SSWU_RO_`.
    pub id: &'static str,
    /// Name of the curve the suite targets.
    pub curve: &'static str,
    /// Digest used by `expand_message_xmd`.
    pub hash: DigestAlgorithm,
    /// Simplified SWU constant.
    pub z: i64,
    /// Bytes of uniform output per field element.
    pub l: usize,
    /// Target security level.
    pub k: usize,
}

/// `P256_XMD:SHA-256_SSWU_RO_`
pub const P256_XMD_SHA_256_SSWU_RO_: Suite = Suite {
    id: "P256_XMD:SHA-256_SSWU_RO_",
    curve: "P-256",
    hash: DigestAlgorithm::Sha256,
    z: -10,
    l: 48,
    k: 128,
};

/// `P384_XMD:SHA-384_SSWU_RO_`
pub const P384_XMD_SHA_384_SSWU_RO_: Suite = Suite {
    id: "P384_XMD:SHA-384_SSWU_RO_",
    curve: "P-384",
    hash: DigestAlgorithm::Sha384,
    z: -12,
    l: 72,
    k: 192,
};

/// `P521_XMD:SHA-512_SSWU_RO_`
pub const P521_XMD_SHA_512_SSWU_RO_: Suite = Suite {
    id: "P521_XMD:SHA-512_SSWU_RO_",
    curve: "P-521",
    hash: DigestAlgorithm::Sha512,
    z: -4,
    l: 98,
    k: 256,
};

/// Every registered suite.
pub const SUITES: &[Suite] = &[
    P256_XMD_SHA_256_SSWU_RO_,
    P384_XMD_SHA_384_SSWU_RO_,
    P521_XMD_SHA_512_SSWU_RO_,
];

impl Suite {
    /// Look up a registered suite by identifier.
    pub fn from_id(id: &str) -> Result<&'static Suite> {
        SUITES
            .iter()
            .find(|suite| suite.id == id)
            .ok_or(Error::UnknownSuite)
    }
}

/// Checks the simplified SWU criteria for `z` on `curve`:
///
/// 1. `Z` is non-square in `GF(p)`,
/// 2. `Z != -1`,
/// 3. `g(x) - Z` is irreducible,
/// 4. `g(B / (Z * A))` is square,
///
/// where `g(x) = x^3 + A * x + B` and `A * B != 0`.
///
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-finding-z-for-the-shallue-va>
pub fn validate_z<const LIMBS: usize>(curve: &CurveParams<LIMBS>, z: i64) -> Result<()> {
    let field = curve.field()?;
    if field.degree() != 1 {
        return Err(Error::UnsupportedField);
    }

    let a = field.element(&curve.a);
    let b = field.element(&curve.b);
    let z = field.element_from_i64(z);
    if bool::from(a.is_zero() | b.is_zero() | z.is_zero()) {
        return Err(Error::InvalidZ);
    }

    let g = |x: &FieldElement<LIMBS>| x.square() * x + a * x + b;
    let valid = !bool::from(field.is_square(&z))
        && z != -field.one()
        && !has_root(&field, &a, &(b - z))
        && bool::from(field.is_square(&g(&(b * (z * a).invert()))));

    if valid { Ok(()) } else { Err(Error::InvalidZ) }
}

/// Smallest valid `Z` for `curve` in the order `1, -1, 2, -2, ...`.
pub fn find_z<const LIMBS: usize>(curve: &CurveParams<LIMBS>) -> Result<i64> {
    (1..=MAX_Z_CANDIDATE)
        .flat_map(|z| [z, -z])
        .find(|&z| validate_z(curve, z).is_ok())
        .ok_or(Error::InvalidZ)
}

/// Does `x^3 + a * x + c` have a root in `GF(p)`?
///
/// Its roots are exactly those of `gcd(x^p - x, x^3 + a * x + c)`.
fn has_root<const LIMBS: usize>(
    field: &Field<LIMBS>,
    a: &FieldElement<LIMBS>,
    c: &FieldElement<LIMBS>,
) -> bool {
    // products of quadratics reduced with x^3 = -a * x - c
    let mul_mod = |u: &[FieldElement<LIMBS>; 3], v: &[FieldElement<LIMBS>; 3]| {
        let mut w = [field.zero(); 5];
        for (i, ui) in u.iter().enumerate() {
            for (j, vj) in v.iter().enumerate() {
                w[i + j] += *ui * vj;
            }
        }
        w[2] -= *a * w[4];
        w[1] -= *c * w[4];
        w[1] -= *a * w[3];
        w[0] -= *c * w[3];
        [w[0], w[1], w[2]]
    };

    let p = field.modulus();
    let x = [field.zero(), field.one(), field.zero()];
    let mut x_p = [field.one(), field.zero(), field.zero()];
    for i in (0..p.bits_vartime()).rev() {
        x_p = mul_mod(&x_p, &x_p);
        if p.bit_vartime(i) {
            x_p = mul_mod(&x_p, &x);
        }
    }
    x_p[1] -= field.one();

    let cubic = vec![*c, *a, field.zero(), field.one()];
    poly_gcd_degree(cubic, x_p.to_vec()) > 0
}

fn trim<const LIMBS: usize>(mut poly: Vec<FieldElement<LIMBS>>) -> Vec<FieldElement<LIMBS>> {
    while poly.last().is_some_and(|c| bool::from(c.is_zero())) {
        poly.pop();
    }
    poly
}

/// Remainder of `num` divided by the non-zero, trimmed `den`.
fn poly_rem<const LIMBS: usize>(
    mut num: Vec<FieldElement<LIMBS>>,
    den: &[FieldElement<LIMBS>],
) -> Vec<FieldElement<LIMBS>> {
    let Some(lead) = den.last() else {
        return num;
    };
    let lead_inv = lead.invert();
    while num.len() >= den.len() {
        let Some(top) = num.last() else {
            break;
        };
        let coeff = *top * lead_inv;
        let shift = num.len() - den.len();
        for (i, d) in den.iter().enumerate() {
            num[shift + i] -= coeff * d;
        }
        num = trim(num);
    }
    num
}

fn poly_gcd_degree<const LIMBS: usize>(
    a: Vec<FieldElement<LIMBS>>,
    b: Vec<FieldElement<LIMBS>>,
) -> usize {
    let (mut a, mut b) = (trim(a), trim(b));
    while !b.is_empty() {
        let r = poly_rem(a, &b);
        a = b;
        b = r;
    }
    a.len().saturating_sub(1)
}
