//! Quadratic extension `F_p² = F_p[i] / (i² + 1)`.

use super::{FieldArithmetic, PrimeField};
use num_bigint::BigUint;

/// Element `c0 + c1·i` of the quadratic extension `F_p²`, with `i² = -1`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fp2 {
    /// Real part.
    pub c0: BigUint,

    /// Coefficient of `i`.
    pub c1: BigUint,
}

impl Fp2 {
    /// Create `c0 + c1·i`.
    pub fn new(c0: BigUint, c1: BigUint) -> Self {
        Self { c0, c1 }
    }
}

/// `F_p²` built over a [`PrimeField`] with `p ≡ 3 (mod 4)`, so that `-1` is
/// a non-residue.
pub(crate) struct QuadraticExtension<'a> {
    base: &'a PrimeField,
}

impl<'a> QuadraticExtension<'a> {
    pub fn new(base: &'a PrimeField) -> Self {
        Self { base }
    }

    /// Sextic non-residue `ξ = 1 + i` defining the twist and the Frobenius
    /// constant.
    pub fn xi(&self) -> Fp2 {
        Fp2::new(self.base.one(), self.base.one())
    }

    /// Embed a base field element.
    pub fn from_base(&self, c0: BigUint) -> Fp2 {
        Fp2::new(c0, self.base.zero())
    }
}

impl FieldArithmetic for QuadraticExtension<'_> {
    type Element = Fp2;

    fn zero(&self) -> Fp2 {
        Fp2::new(self.base.zero(), self.base.zero())
    }

    fn one(&self) -> Fp2 {
        self.from_base(self.base.one())
    }

    fn from_u32(&self, n: u32) -> Fp2 {
        self.from_base(self.base.from_u32(n))
    }

    fn add(&self, a: &Fp2, b: &Fp2) -> Fp2 {
        Fp2::new(self.base.add(&a.c0, &b.c0), self.base.add(&a.c1, &b.c1))
    }

    fn sub(&self, a: &Fp2, b: &Fp2) -> Fp2 {
        Fp2::new(self.base.sub(&a.c0, &b.c0), self.base.sub(&a.c1, &b.c1))
    }

    fn mul(&self, a: &Fp2, b: &Fp2) -> Fp2 {
        let f = self.base;
        // (a0 + a1·i)(b0 + b1·i) = (a0·b0 - a1·b1) + (a0·b1 + a1·b0)·i
        let c0 = f.sub(&f.mul(&a.c0, &b.c0), &f.mul(&a.c1, &b.c1));
        let c1 = f.add(&f.mul(&a.c0, &b.c1), &f.mul(&a.c1, &b.c0));
        Fp2::new(c0, c1)
    }

    fn invert(&self, a: &Fp2) -> Option<Fp2> {
        let f = self.base;
        // (a0 + a1·i)⁻¹ = (a0 - a1·i) / (a0² + a1²)
        let norm = f.add(&f.square(&a.c0), &f.square(&a.c1));
        let norm_inv = f.invert(&norm)?;
        Some(Fp2::new(
            f.mul(&a.c0, &norm_inv),
            f.neg(&f.mul(&a.c1, &norm_inv)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldArithmetic, Fp2, PrimeField, QuadraticExtension};
    use num_bigint::BigUint;

    fn fp2(c0: u32, c1: u32) -> Fp2 {
        Fp2::new(BigUint::from(c0), BigUint::from(c1))
    }

    #[test]
    fn i_squared_is_minus_one() {
        let base = PrimeField::new(BigUint::from(19u32));
        let f = QuadraticExtension::new(&base);
        assert_eq!(f.square(&fp2(0, 1)), fp2(18, 0));
    }

    #[test]
    fn inversion() {
        let base = PrimeField::new(BigUint::from(19u32));
        let f = QuadraticExtension::new(&base);
        let a = fp2(5, 7);
        assert_eq!(f.mul(&a, &f.invert(&a).unwrap()), f.one());
        assert_eq!(f.invert(&f.zero()), None);
    }

    #[test]
    fn frobenius_is_conjugation() {
        // a^p = conj(a) in F_p² when i² = -1
        let base = PrimeField::new(BigUint::from(19u32));
        let f = QuadraticExtension::new(&base);
        assert_eq!(f.pow(&fp2(5, 7), &BigUint::from(19u32)), fp2(5, 12));
    }
}
