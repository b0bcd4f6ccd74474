//! Variable-time arithmetic used to check curve invariants.
//!
//! Nothing here is constant-time or fast: it runs once while a parameter set is
//! validated and operates on public values only.

mod field;
mod fp2;

pub use self::fp2::Fp2;
pub(crate) use self::{field::PrimeField, fp2::QuadraticExtension};

use core::fmt::Debug;
use num_bigint::BigUint;

/// Field arithmetic over elements of type [`FieldArithmetic::Element`], with
/// the field's parameters held by the implementing context.
pub(crate) trait FieldArithmetic {
    /// Field element, always kept fully reduced.
    type Element: Clone + Debug + Eq;

    /// Additive identity.
    fn zero(&self) -> Self::Element;

    /// Multiplicative identity.
    fn one(&self) -> Self::Element;

    /// Embed a small integer.
    fn from_u32(&self, n: u32) -> Self::Element;

    /// Returns `a + b`
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Returns `a - b`
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Returns `a · b`
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Returns `a⁻¹`, or `None` when `a` is zero.
    fn invert(&self, a: &Self::Element) -> Option<Self::Element>;

    /// Returns `a²`
    fn square(&self, a: &Self::Element) -> Self::Element {
        self.mul(a, a)
    }

    /// Returns `-a`
    fn neg(&self, a: &Self::Element) -> Self::Element {
        self.sub(&self.zero(), a)
    }

    /// Left-to-right square-and-multiply exponentiation.
    fn pow(&self, a: &Self::Element, exp: &BigUint) -> Self::Element {
        let mut acc = self.one();
        for byte in exp.to_bytes_be() {
            for i in (0..8).rev() {
                acc = self.square(&acc);
                if (byte >> i) & 1 == 1 {
                    acc = self.mul(&acc, a);
                }
            }
        }
        acc
    }
}

/// Point on a short Weierstrass curve in affine coordinates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum AffinePoint<E> {
    /// Point at infinity.
    Identity,

    /// Finite point `(x, y)`.
    Point {
        /// x-coordinate
        x: E,
        /// y-coordinate
        y: E,
    },
}

/// Short Weierstrass curve `y² = x³ + a·x + b` over the field `F`.
pub(crate) struct ShortWeierstrass<'f, F: FieldArithmetic> {
    field: &'f F,
    a: F::Element,
    b: F::Element,
}

impl<'f, F: FieldArithmetic> ShortWeierstrass<'f, F> {
    /// Curve with coefficients `a` and `b` over `field`.
    pub fn new(field: &'f F, a: F::Element, b: F::Element) -> Self {
        Self { field, a, b }
    }

    /// Does `(x, y)` satisfy the curve equation?
    pub fn contains(&self, x: &F::Element, y: &F::Element) -> bool {
        let f = self.field;
        let lhs = f.square(y);
        let x3 = f.mul(&f.square(x), x);
        let rhs = f.add(&f.add(&x3, &f.mul(&self.a, x)), &self.b);
        lhs == rhs
    }

    /// Returns `2·point`
    pub fn double(&self, point: &AffinePoint<F::Element>) -> Option<AffinePoint<F::Element>> {
        let AffinePoint::Point { x, y } = point else {
            return Some(AffinePoint::Identity);
        };

        let f = self.field;
        if *y == f.zero() {
            return Some(AffinePoint::Identity);
        }

        // λ = (3x² + a) / 2y
        let numerator = f.add(&f.mul(&f.from_u32(3), &f.square(x)), &self.a);
        let lambda = f.mul(&numerator, &f.invert(&f.add(y, y))?);
        Some(self.chord(&lambda, x, x, y))
    }

    /// Returns `lhs + rhs`
    pub fn add(
        &self,
        lhs: &AffinePoint<F::Element>,
        rhs: &AffinePoint<F::Element>,
    ) -> Option<AffinePoint<F::Element>> {
        let (x1, y1, x2, y2) = match (lhs, rhs) {
            (AffinePoint::Identity, _) => return Some(rhs.clone()),
            (_, AffinePoint::Identity) => return Some(lhs.clone()),
            (AffinePoint::Point { x: x1, y: y1 }, AffinePoint::Point { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };

        let f = self.field;
        if x1 == x2 {
            return if f.add(y1, y2) == f.zero() {
                Some(AffinePoint::Identity)
            } else {
                self.double(lhs)
            };
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = f.mul(&f.sub(y2, y1), &f.invert(&f.sub(x2, x1))?);
        Some(self.chord(&lambda, x1, x2, y1))
    }

    /// Returns `k·point` using double-and-add.
    ///
    /// `None` only if an inversion hits zero, which cannot happen over a field.
    pub fn mul(
        &self,
        point: &AffinePoint<F::Element>,
        k: &BigUint,
    ) -> Option<AffinePoint<F::Element>> {
        let mut acc = AffinePoint::Identity;
        for byte in k.to_bytes_be() {
            for i in (0..8).rev() {
                acc = self.double(&acc)?;
                if (byte >> i) & 1 == 1 {
                    acc = self.add(&acc, point)?;
                }
            }
        }
        Some(acc)
    }

    /// Third intersection of the line with slope `lambda` through `(x1, y1)`,
    /// reflected over the x-axis.
    fn chord(
        &self,
        lambda: &F::Element,
        x1: &F::Element,
        x2: &F::Element,
        y1: &F::Element,
    ) -> AffinePoint<F::Element> {
        let f = self.field;
        let x3 = f.sub(&f.sub(&f.square(lambda), x1), x2);
        let y3 = f.sub(&f.mul(lambda, &f.sub(x1, &x3)), y1);
        AffinePoint::Point { x: x3, y: y3 }
    }
}
