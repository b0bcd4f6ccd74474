//! Derivation of the field modulus, subgroup order and Frobenius trace from
//! the curve family seed.

use crate::{
    EFS,
    error::{FormatError, Result},
    tags::SignOfX,
};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

/// BLS12-381 family seed `|x|`; the seed itself is negative.
pub const BLS12_381_X: u64 = 0xd201_0000_0001_0000;

/// Curve family seed: the magnitude of `x` along with its sign.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveFamilySeed {
    x: BigUint,
    sign: SignOfX,
}

impl CurveFamilySeed {
    /// Create a seed from `|x|` and the sign of `x`.
    pub fn new(x: impl Into<BigUint>, sign: SignOfX) -> Self {
        Self { x: x.into(), sign }
    }

    /// Seed of the BLS12-381 curve.
    pub fn bls12_381() -> Self {
        Self::new(BLS12_381_X, SignOfX::Negative)
    }

    /// Magnitude of `x`.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Sign of `x`.
    pub fn sign(&self) -> SignOfX {
        self.sign
    }
}

/// Values derived from a [`CurveFamilySeed`]. Primality is not implied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DerivedParameters {
    /// Base field modulus.
    pub p: BigUint,

    /// Prime subgroup order.
    pub r: BigUint,

    /// Trace of Frobenius.
    pub t: BigInt,
}

/// Derive `(p, r, t)` from the seed using the BLS12 polynomials.
///
/// For `x < 0` (with the seed holding `|x|`):
///
/// ```text
/// p = (x⁶ + 2x⁵ - 2x³ - x + 1) / 3
/// t = -x + 1
/// ```
///
/// and for `x > 0`:
///
/// ```text
/// p = (x⁶ - 2x⁵ + 2x³ + x + 1) / 3
/// t = x + 1
/// ```
///
/// In both cases `r = x⁴ - x² + 1`.
///
/// # Errors
///
/// [`FormatError::InexactDivision`] if the numerator of `p` is not a multiple
/// of 3, and [`FormatError::FieldSize`] if `p` does not fit in [`EFS`] bytes.
pub fn derive(seed: &CurveFamilySeed) -> Result<DerivedParameters> {
    let x = BigInt::from(seed.x.clone());
    let x2 = x.pow(2);
    let x3 = &x2 * &x;
    let x5 = &x3 * &x2;
    let x6 = &x3 * &x3;

    let (numerator, t) = match seed.sign {
        SignOfX::Negative => (
            &x6 + &x5 * 2u32 - &x3 * 2u32 - &x + 1u32,
            BigInt::from(1u32) - &x,
        ),
        SignOfX::Positive => (&x6 - &x5 * 2u32 + &x3 * 2u32 + &x + 1u32, &x + 1u32),
    };

    let (quotient, remainder) = numerator.div_rem(&BigInt::from(3u32));
    if !remainder.is_zero() {
        let remainder = remainder.to_u8().unwrap_or(u8::MAX);
        tracing::debug!(remainder, "seed numerator is not divisible by 3");
        return Err(FormatError::InexactDivision { remainder }.into());
    }

    // the numerator is at least 1 for every x >= 0, so the sign is positive
    let (_, p) = quotient.into_parts();

    let max = (EFS as u64) * 8;
    if p.bits() > max {
        return Err(FormatError::FieldSize {
            bits: p.bits(),
            max,
        }
        .into());
    }

    let (_, x4) = x2.pow(2).into_parts();
    let (_, x2) = x2.into_parts();
    let r = x4 + 1u32 - x2;

    tracing::debug!(p_bits = p.bits(), r_bits = r.bits(), "derived curve parameters");
    Ok(DerivedParameters { p, r, t })
}

#[cfg(test)]
mod tests {
    use super::{CurveFamilySeed, derive};
    use crate::{
        error::{Error, FormatError},
        tags::SignOfX,
    };
    use num_bigint::{BigInt, BigUint};

    #[test]
    fn bls12_381_sizes() {
        let derived = derive(&CurveFamilySeed::bls12_381()).unwrap();
        assert_eq!(derived.p.bits(), 381);
        assert_eq!(derived.r.bits(), 255);
        assert_eq!(derived.t, BigInt::from(1u32) - BigInt::from(super::BLS12_381_X));
    }

    #[test]
    fn inexact_division() {
        let seed = CurveFamilySeed::new(1u32, SignOfX::Negative);
        assert_eq!(
            derive(&seed),
            Err(Error::Format(FormatError::InexactDivision { remainder: 1 }))
        );
    }

    #[test]
    fn small_positive_seed() {
        // x = 4: p = (4096 - 2048 + 128 + 4 + 1) / 3
        let derived = derive(&CurveFamilySeed::new(4u32, SignOfX::Positive)).unwrap();
        assert_eq!(derived.p, BigUint::from(727u32));
        assert_eq!(derived.r, BigUint::from(241u32));
        assert_eq!(derived.t, BigInt::from(5u32));
    }

    #[test]
    fn oversized_seed() {
        // 2^80 + 1 divides exactly but yields a 479-bit modulus
        let x = (BigUint::from(1u32) << 80usize) + 1u32;
        assert_eq!(
            derive(&CurveFamilySeed::new(x, SignOfX::Negative)),
            Err(Error::Format(FormatError::FieldSize {
                bits: 479,
                max: 384
            }))
        );
    }
}
