//! Validated curve parameter set.

use crate::{
    EFS, U384,
    arithmetic::Fp2,
    derive::{CurveFamilySeed, DerivedParameters, derive},
    error::{InvalidCurveError, Result},
    tags::{CurveType, HashAlgorithm, PairingFamily, SexticTwist, SignOfX},
    uint_to_biguint,
    validate::{cofactor, validate},
};
use num_bigint::{BigInt, BigUint};

/// Literal constants supplied alongside the family seed: static tags, curve
/// coefficients, generators and the Frobenius constant.
///
/// Nothing here is trusted until it has passed through [`build`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LiteralConstants {
    /// Curve equation form.
    pub curve_type: CurveType,

    /// Sextic twist used for G2.
    pub twist: SexticTwist,

    /// Pairing-friendly family.
    pub family: PairingFamily,

    /// Associated hash function.
    pub hash: HashAlgorithm,

    /// Coefficient `a` in the curve equation.
    pub a: U384,

    /// Coefficient `b` in the curve equation.
    pub b: U384,

    /// G1 generator x-coordinate.
    pub gx: U384,

    /// G1 generator y-coordinate.
    pub gy: U384,

    /// G2 generator x-coordinate, real part.
    pub pxa: U384,

    /// G2 generator x-coordinate, coefficient of `i`.
    pub pxb: U384,

    /// G2 generator y-coordinate, real part.
    pub pya: U384,

    /// G2 generator y-coordinate, coefficient of `i`.
    pub pyb: U384,

    /// Frobenius constant, real part.
    pub fra: U384,

    /// Frobenius constant, coefficient of `i`.
    pub frb: U384,
}

impl LiteralConstants {
    /// BLS12-381 constants.
    pub const BLS12_381: Self = Self {
        curve_type: CurveType::Weierstrass,
        twist: SexticTwist::MType,
        family: PairingFamily::Bls12,
        hash: HashAlgorithm::Sha256,
        a: U384::ZERO,
        b: U384::from_u8(4),
        gx: U384::from_be_hex("17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"),
        gy: U384::from_be_hex("08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1"),
        pxa: U384::from_be_hex("024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8"),
        pxb: U384::from_be_hex("13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e"),
        pya: U384::from_be_hex("0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801"),
        pyb: U384::from_be_hex("0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be"),
        fra: U384::from_be_hex("1904d3bf02bb0667c231beb4202c0d1f0fd603fd3cbd5f4f7b2443d784bab9c4f67ea53d63e7813d8d0775ed92235fb8"),
        frb: U384::from_be_hex("00fc3e2b36c4e03288e9e902231f9fb854a14787b6c7b36fec0c8ec971f63c5f282d5ac14d6c7ec22cf78a126ddc4af3"),
    };
}

/// Fully derived and validated curve parameters.
///
/// The only way to obtain one is [`build`] (or decoding, which goes through
/// [`build`]), so every value of this type satisfies the curve invariants.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParameters {
    seed: CurveFamilySeed,
    constants: LiteralConstants,
    derived: DerivedParameters,
    cofactor: BigUint,
    a: BigUint,
    b: BigUint,
    g1: (BigUint, BigUint),
    g2: (Fp2, Fp2),
    frobenius: Fp2,
}

/// Derive `(p, r, t)` from `seed`, validate them together with `constants`
/// and return the resulting parameter set.
///
/// # Errors
///
/// The first [`FormatError`](crate::FormatError) from derivation or
/// [`InvalidCurveError`] from validation. No parameters are returned on
/// failure.
pub fn build(seed: &CurveFamilySeed, constants: &LiteralConstants) -> Result<CurveParameters> {
    let derived = derive(seed)?;
    validate(&derived, constants)?;

    // validation already checked divisibility
    let cofactor = cofactor(&derived).ok_or(InvalidCurveError::Cofactor)?;

    Ok(CurveParameters {
        seed: seed.clone(),
        constants: *constants,
        derived,
        cofactor,
        a: uint_to_biguint(&constants.a),
        b: uint_to_biguint(&constants.b),
        g1: (uint_to_biguint(&constants.gx), uint_to_biguint(&constants.gy)),
        g2: (
            Fp2::new(uint_to_biguint(&constants.pxa), uint_to_biguint(&constants.pxb)),
            Fp2::new(uint_to_biguint(&constants.pya), uint_to_biguint(&constants.pyb)),
        ),
        frobenius: Fp2::new(uint_to_biguint(&constants.fra), uint_to_biguint(&constants.frb)),
    })
}

impl CurveParameters {
    /// Build the BLS12-381 parameter set.
    ///
    /// Runs the full derivation and validation on every call; prefer
    /// [`bls12_381`](crate::bls12_381) for shared access.
    pub fn bls12_381() -> Result<Self> {
        build(&CurveFamilySeed::bls12_381(), &LiteralConstants::BLS12_381)
    }

    /// Family seed the parameters were derived from.
    pub fn seed(&self) -> &CurveFamilySeed {
        &self.seed
    }

    /// Literal constants the parameters were validated against.
    pub fn constants(&self) -> &LiteralConstants {
        &self.constants
    }

    /// Base field modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.derived.p
    }

    /// Base field modulus as a fixed-width integer.
    pub fn modulus_uint(&self) -> U384 {
        crate::biguint_to_uint(&self.derived.p)
    }

    /// Prime subgroup order `r`.
    pub fn order(&self) -> &BigUint {
        &self.derived.r
    }

    /// Trace of Frobenius `t`.
    pub fn trace(&self) -> &BigInt {
        &self.derived.t
    }

    /// Cofactor `h = (p + 1 - t) / r` of the G1 subgroup.
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    /// Coefficient `a` in `y² = x³ + a·x + b`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` in `y² = x³ + a·x + b`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// G1 generator's affine coordinates: (x, y).
    pub fn g1(&self) -> (&BigUint, &BigUint) {
        (&self.g1.0, &self.g1.1)
    }

    /// G2 generator's affine coordinates over `F_p²`: (x, y).
    pub fn g2(&self) -> (&Fp2, &Fp2) {
        (&self.g2.0, &self.g2.1)
    }

    /// Frobenius constant `Fra + Frb·i`.
    pub fn frobenius(&self) -> &Fp2 {
        &self.frobenius
    }

    /// Sign of the family seed `x`.
    pub fn sign_of_x(&self) -> SignOfX {
        self.seed.sign()
    }

    /// Curve equation form.
    pub fn curve_type(&self) -> CurveType {
        self.constants.curve_type
    }

    /// Sextic twist used for G2.
    pub fn twist(&self) -> SexticTwist {
        self.constants.twist
    }

    /// Pairing-friendly family.
    pub fn family(&self) -> PairingFamily {
        self.constants.family
    }

    /// Embedding degree implied by the family.
    pub fn embedding_degree(&self) -> u32 {
        self.constants.family.embedding_degree()
    }

    /// Associated hash function.
    pub fn hash(&self) -> HashAlgorithm {
        self.constants.hash
    }

    /// Size of a serialized field element in bytes.
    pub fn field_size(&self) -> usize {
        EFS
    }

    pub(crate) fn derived(&self) -> &DerivedParameters {
        &self.derived
    }
}

#[cfg(test)]
mod tests {
    use super::{CurveParameters, LiteralConstants, build};
    use crate::{
        U384,
        derive::CurveFamilySeed,
        error::{Error, FormatError, InvalidCurveError},
        tags::{SexticTwist, SignOfX},
    };
    use num_bigint::BigUint;

    #[test]
    fn bls12_381_builds() {
        let params = CurveParameters::bls12_381().unwrap();
        assert_eq!(params.sign_of_x(), SignOfX::Negative);
        assert_eq!(params.embedding_degree(), 12);
        assert_eq!(params.b(), &BigUint::from(4u32));
        assert_eq!(params.modulus_uint().bits(), 381);
    }

    #[test]
    fn wrong_twist_rejected() {
        let constants = LiteralConstants {
            twist: SexticTwist::DType,
            ..LiteralConstants::BLS12_381
        };
        assert_eq!(
            build(&CurveFamilySeed::bls12_381(), &constants),
            Err(Error::InvalidCurve(InvalidCurveError::G2NotOnTwist))
        );
    }

    #[test]
    fn unreduced_coefficient_rejected() {
        let constants = LiteralConstants {
            b: U384::MAX,
            ..LiteralConstants::BLS12_381
        };
        assert_eq!(
            build(&CurveFamilySeed::bls12_381(), &constants),
            Err(Error::InvalidCurve(InvalidCurveError::CoefficientOutOfRange))
        );
    }

    #[test]
    fn wrong_frobenius_constant_rejected() {
        let constants = LiteralConstants {
            frb: LiteralConstants::BLS12_381.frb.wrapping_add(&U384::ONE),
            ..LiteralConstants::BLS12_381
        };
        assert_eq!(
            build(&CurveFamilySeed::bls12_381(), &constants),
            Err(Error::InvalidCurve(InvalidCurveError::FrobeniusConstant))
        );
    }

    #[test]
    fn positive_sign_rejected() {
        // the positive-x numerator is not a multiple of 3 for this |x|
        let seed = CurveFamilySeed::new(crate::BLS12_381_X, SignOfX::Positive);
        assert_eq!(
            build(&seed, &LiteralConstants::BLS12_381),
            Err(Error::Format(FormatError::InexactDivision { remainder: 1 }))
        );
    }
}
