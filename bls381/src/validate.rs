//! Validation of derived values and literal constants against the curve
//! invariants.

use crate::{
    arithmetic::{
        AffinePoint, FieldArithmetic, Fp2, PrimeField, QuadraticExtension, ShortWeierstrass,
    },
    derive::DerivedParameters,
    error::{InvalidCurveError, Result},
    params::LiteralConstants,
    tags::SexticTwist,
    uint_to_biguint,
};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Bases used for Miller-Rabin: the first 20 primes.
///
/// Deterministic for `n < 3.3·10²⁴`; above that a composite passes with
/// probability below `4⁻²⁰`.
const MILLER_RABIN_BASES: [u32; 20] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
];

/// Check the derived values and literal constants against every curve
/// invariant, stopping at the first failure.
///
/// The checks run in this order:
///
/// 1. `p` is prime
/// 2. `r` is prime
/// 3. Hasse bound: `t² - 4p < 0`
/// 4. `A`, `B`, G1 coordinates are reduced and G1 is on `y² = x³ + A·x + B`
/// 5. `p ≡ 3 (mod 4)`, G2 coordinates are reduced and G2 is on the twist
/// 6. `r` divides `p^k - 1` for the family's embedding degree `k`
/// 7. `r` divides `p + 1 - t`
/// 8. `r·G1 = O`
/// 9. `r·G2 = O`
/// 10. `Fra + Frb·i = ξ^((p-1)/6)`
///
/// # Errors
///
/// [`InvalidCurveError`] naming the first invariant which does not hold.
pub fn validate(derived: &DerivedParameters, constants: &LiteralConstants) -> Result<()> {
    let DerivedParameters { p, r, t } = derived;

    ensure(is_probable_prime(p), InvalidCurveError::ModulusNotPrime)?;
    ensure(is_probable_prime(r), InvalidCurveError::OrderNotPrime)?;
    ensure(t * t < BigInt::from(p.clone()) * 4u32, InvalidCurveError::HasseBound)?;

    let fp = PrimeField::new(p.clone());
    let a = uint_to_biguint(&constants.a);
    let b = uint_to_biguint(&constants.b);
    ensure(
        fp.is_reduced(&a) && fp.is_reduced(&b),
        InvalidCurveError::CoefficientOutOfRange,
    )?;

    let (gx, gy) = (uint_to_biguint(&constants.gx), uint_to_biguint(&constants.gy));
    ensure(
        fp.is_reduced(&gx) && fp.is_reduced(&gy),
        InvalidCurveError::G1OutOfRange,
    )?;
    let curve = ShortWeierstrass::new(&fp, a.clone(), b.clone());
    ensure(curve.contains(&gx, &gy), InvalidCurveError::G1NotOnCurve)?;

    ensure(
        p.mod_floor(&BigUint::from(4u32)) == BigUint::from(3u32),
        InvalidCurveError::ExtensionField,
    )?;
    let g2 = [constants.pxa, constants.pxb, constants.pya, constants.pyb]
        .map(|c| uint_to_biguint(&c));
    ensure(
        g2.iter().all(|c| fp.is_reduced(c)),
        InvalidCurveError::G2OutOfRange,
    )?;
    let [pxa, pxb, pya, pyb] = g2;
    let (g2x, g2y) = (Fp2::new(pxa, pxb), Fp2::new(pya, pyb));

    let fp2 = QuadraticExtension::new(&fp);
    let Some(twist_b) = twist_coefficient(&fp2, b, constants.twist) else {
        return ensure(false, InvalidCurveError::G2NotOnTwist);
    };
    let twist = ShortWeierstrass::new(&fp2, fp2.from_base(a), twist_b);
    ensure(twist.contains(&g2x, &g2y), InvalidCurveError::G2NotOnTwist)?;

    let k = BigUint::from(constants.family.embedding_degree());
    ensure(p.modpow(&k, r).is_one(), InvalidCurveError::EmbeddingDegree)?;
    ensure(cofactor(derived).is_some(), InvalidCurveError::Cofactor)?;

    let g1 = AffinePoint::Point { x: gx, y: gy };
    ensure(
        curve.mul(&g1, r) == Some(AffinePoint::Identity),
        InvalidCurveError::G1Order,
    )?;
    let g2 = AffinePoint::Point { x: g2x, y: g2y };
    ensure(
        twist.mul(&g2, r) == Some(AffinePoint::Identity),
        InvalidCurveError::G2Order,
    )?;

    let frobenius = Fp2::new(
        uint_to_biguint(&constants.fra),
        uint_to_biguint(&constants.frb),
    );
    let (e, rem) = (p - 1u32).div_rem(&BigUint::from(6u32));
    ensure(
        rem.is_zero() && fp2.pow(&fp2.xi(), &e) == frobenius,
        InvalidCurveError::FrobeniusConstant,
    )?;

    tracing::debug!(p_bits = p.bits(), r_bits = r.bits(), "curve parameters validated");
    Ok(())
}

/// Cofactor `h = (p + 1 - t) / r` of the G1 subgroup, or `None` if `r` does
/// not divide the number of points.
pub(crate) fn cofactor(derived: &DerivedParameters) -> Option<BigUint> {
    let points = BigInt::from(derived.p.clone()) + 1u32 - &derived.t;
    let points = points.to_biguint()?;
    if derived.r.is_zero() {
        return None;
    }
    let (h, rem) = points.div_rem(&derived.r);
    rem.is_zero().then_some(h)
}

/// Constant term `B'` of the twisted curve `y² = x³ + B'` over `F_p²`.
fn twist_coefficient(fp2: &QuadraticExtension<'_>, b: BigUint, twist: SexticTwist) -> Option<Fp2> {
    let b = fp2.from_base(b);
    match twist {
        SexticTwist::MType => Some(fp2.mul(&b, &fp2.xi())),
        SexticTwist::DType => Some(fp2.mul(&b, &fp2.invert(&fp2.xi())?)),
    }
}

/// Miller-Rabin primality test over [`MILLER_RABIN_BASES`].
pub(crate) fn is_probable_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }

    for base in MILLER_RABIN_BASES {
        let base = BigUint::from(base);
        if *n == base {
            return true;
        }
        if (n % &base).is_zero() {
            return false;
        }
    }

    // n - 1 = d·2^s with d odd
    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for base in MILLER_RABIN_BASES {
        let mut x = BigUint::from(base).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

fn ensure(condition: bool, err: InvalidCurveError) -> Result<()> {
    if condition {
        Ok(())
    } else {
        tracing::error!(%err, "curve parameter validation failed");
        Err(err.into())
    }
}
