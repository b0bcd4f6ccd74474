//! Arithmetic modulo a prime `p`.

use super::FieldArithmetic;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Prime field `F_p`; elements are [`BigUint`]s in `[0, p)`.
#[derive(Clone, Debug)]
pub(crate) struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    pub fn new(modulus: BigUint) -> Self {
        Self { modulus }
    }

    /// Is `a` fully reduced, i.e. in `[0, p)`?
    pub fn is_reduced(&self, a: &BigUint) -> bool {
        a < &self.modulus
    }
}

impl FieldArithmetic for PrimeField {
    type Element = BigUint;

    fn zero(&self) -> BigUint {
        BigUint::zero()
    }

    fn one(&self) -> BigUint {
        BigUint::one()
    }

    fn from_u32(&self, n: u32) -> BigUint {
        BigUint::from(n) % &self.modulus
    }

    fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + &self.modulus - b) % &self.modulus
    }

    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    fn invert(&self, a: &BigUint) -> Option<BigUint> {
        if a.is_zero() {
            return None;
        }
        a.modinv(&self.modulus)
    }

    fn pow(&self, a: &BigUint, exp: &BigUint) -> BigUint {
        a.modpow(exp, &self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldArithmetic, PrimeField};
    use num_bigint::BigUint;

    #[test]
    fn arithmetic_mod_13() {
        let f = PrimeField::new(BigUint::from(13u32));
        let a = BigUint::from(9u32);
        let b = BigUint::from(7u32);

        assert_eq!(f.add(&a, &b), BigUint::from(3u32));
        assert_eq!(f.sub(&b, &a), BigUint::from(11u32));
        assert_eq!(f.mul(&a, &b), BigUint::from(11u32));
        assert_eq!(f.neg(&a), BigUint::from(4u32));
        assert_eq!(f.invert(&a), Some(BigUint::from(3u32)));
        assert_eq!(f.invert(&BigUint::from(0u32)), None);
        assert_eq!(f.pow(&BigUint::from(2u32), &BigUint::from(12u32)), BigUint::from(1u32));
    }
}
