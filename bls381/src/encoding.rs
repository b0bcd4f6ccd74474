//! Fixed-width byte encoding of [`CurveParameters`].
//!
//! ```text
//! offset  size     field
//! 0       1        curve type
//! 1       1        sextic twist
//! 2       1        sign of x
//! 3       1        pairing family
//! 4       1        hash algorithm
//! 5       1        EFS
//! 6       1        sign of t (0 = non-negative, 1 = negative)
//! 7       14·EFS   x, p, r, |t|, A, B, Gx, Gy, Pxa, Pxb, Pya, Pyb, Fra, Frb
//! ```
//!
//! Every integer is big-endian and left-padded to EFS bytes.

use crate::{
    EFS, U384,
    derive::CurveFamilySeed,
    error::{FormatError, InvalidCurveError, Result},
    params::{CurveParameters, LiteralConstants, build},
    tags::{CurveType, HashAlgorithm, PairingFamily, SexticTwist, SignOfX},
    uint_to_biguint,
};
use bigint::Encoding;
use num_bigint::{BigInt, Sign};

const HEADER_LEN: usize = 7;
const INTEGER_COUNT: usize = 14;

/// Size of an encoded [`CurveParameters`] in bytes.
pub const ENCODED_LEN: usize = HEADER_LEN + INTEGER_COUNT * EFS;

/// Encoded [`CurveParameters`].
pub type EncodedParameters = [u8; ENCODED_LEN];

impl CurveParameters {
    /// Serialize as EFS-wide big-endian integers preceded by the tag header.
    pub fn to_bytes(&self) -> EncodedParameters {
        let constants = self.constants();
        let derived = self.derived();

        let mut out = [0u8; ENCODED_LEN];
        out[..HEADER_LEN].copy_from_slice(&[
            constants.curve_type.into(),
            constants.twist.into(),
            self.sign_of_x().into(),
            constants.family.into(),
            constants.hash.into(),
            EFS as u8,
            u8::from(derived.t.sign() == Sign::Minus),
        ]);

        let integers = [
            crate::biguint_to_uint(self.seed().x()),
            crate::biguint_to_uint(&derived.p),
            crate::biguint_to_uint(&derived.r),
            crate::biguint_to_uint(derived.t.magnitude()),
            constants.a,
            constants.b,
            constants.gx,
            constants.gy,
            constants.pxa,
            constants.pxb,
            constants.pya,
            constants.pyb,
            constants.fra,
            constants.frb,
        ];

        for (chunk, n) in out[HEADER_LEN..].chunks_exact_mut(EFS).zip(integers) {
            chunk.copy_from_slice(&n.to_be_bytes());
        }

        out
    }

    /// Decode parameters produced by [`CurveParameters::to_bytes`].
    ///
    /// The decoded seed and constants are rebuilt and revalidated from
    /// scratch; the stored `p`, `r` and `t` must match the derivation.
    ///
    /// # Errors
    ///
    /// [`FormatError`] for a malformed encoding, otherwise any error from
    /// [`build`] or [`InvalidCurveError::DerivedMismatch`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ENCODED_LEN {
            return Err(FormatError::Length {
                expected: ENCODED_LEN,
                actual: bytes.len(),
            }
            .into());
        }

        let curve_type = tag::<CurveType>(bytes, 0)?;
        let twist = tag::<SexticTwist>(bytes, 1)?;
        let sign_of_x = tag::<SignOfX>(bytes, 2)?;
        let family = tag::<PairingFamily>(bytes, 3)?;
        let hash = tag::<HashAlgorithm>(bytes, 4)?;
        if usize::from(bytes[5]) != EFS {
            return Err(FormatError::Tag {
                offset: 5,
                value: bytes[5],
            }
            .into());
        }
        let t_sign = match bytes[6] {
            0 => Sign::Plus,
            1 => Sign::Minus,
            value => return Err(FormatError::Tag { offset: 6, value }.into()),
        };

        let [x, p, r, t, a, b, gx, gy, pxa, pxb, pya, pyb, fra, frb]: [U384; INTEGER_COUNT] =
            core::array::from_fn(|i| U384::from_be_slice(&bytes[HEADER_LEN + i * EFS..][..EFS]));

        let constants = LiteralConstants {
            curve_type,
            twist,
            family,
            hash,
            a,
            b,
            gx,
            gy,
            pxa,
            pxb,
            pya,
            pyb,
            fra,
            frb,
        };

        let seed = CurveFamilySeed::new(uint_to_biguint(&x), sign_of_x);
        let params = build(&seed, &constants)?;

        let t = BigInt::from_biguint(t_sign, uint_to_biguint(&t));
        let derived = params.derived();
        if derived.p != uint_to_biguint(&p) || derived.r != uint_to_biguint(&r) || derived.t != t {
            tracing::error!("encoded parameters disagree with the seed derivation");
            return Err(InvalidCurveError::DerivedMismatch.into());
        }

        Ok(params)
    }
}

fn tag<T: TryFrom<u8, Error = u8>>(bytes: &[u8], offset: usize) -> Result<T> {
    T::try_from(bytes[offset]).map_err(|value| FormatError::Tag { offset, value }.into())
}

#[cfg(test)]
mod tests {
    use super::{ENCODED_LEN, HEADER_LEN};
    use crate::{
        EFS,
        error::{Error, FormatError, InvalidCurveError},
        params::CurveParameters,
    };

    #[test]
    fn header() {
        let bytes = CurveParameters::bls12_381().unwrap().to_bytes();
        // Weierstrass, M-type, negative x, BLS12, SHA-256, 48, negative t
        assert_eq!(&bytes[..HEADER_LEN], &[0u8, 1, 1, 0, 0, 48, 1]);
    }

    #[test]
    fn truncated() {
        let bytes = CurveParameters::bls12_381().unwrap().to_bytes();
        assert_eq!(
            CurveParameters::from_bytes(&bytes[..ENCODED_LEN - 1]),
            Err(Error::Format(FormatError::Length {
                expected: ENCODED_LEN,
                actual: ENCODED_LEN - 1
            }))
        );
    }

    #[test]
    fn unknown_tag() {
        let mut bytes = CurveParameters::bls12_381().unwrap().to_bytes();
        bytes[4] = 0x7f;
        assert_eq!(
            CurveParameters::from_bytes(&bytes),
            Err(Error::Format(FormatError::Tag {
                offset: 4,
                value: 0x7f
            }))
        );
    }

    #[test]
    fn tampered_modulus() {
        let mut bytes = CurveParameters::bls12_381().unwrap().to_bytes();
        // last byte of p
        bytes[HEADER_LEN + 2 * EFS - 1] ^= 1;
        assert_eq!(
            CurveParameters::from_bytes(&bytes),
            Err(Error::InvalidCurve(InvalidCurveError::DerivedMismatch))
        );
    }
}
