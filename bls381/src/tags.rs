//! Static curve family tags.

/// Curve equation form.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum CurveType {
    /// Short Weierstrass: `y² = x³ + A·x + B`.
    Weierstrass = 0,
}

/// Sextic twist used to represent G2 over `F_p²`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum SexticTwist {
    /// Divisive twist: `y² = x³ + B/ξ`.
    DType = 0,
    /// Multiplicative twist: `y² = x³ + B·ξ`.
    MType = 1,
}

/// Sign of the curve family seed `x`, which selects the derivation polynomial.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum SignOfX {
    /// `x > 0`.
    Positive = 0,
    /// `x < 0`; the seed holds `|x|`.
    Negative = 1,
}

/// Pairing-friendly curve family.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum PairingFamily {
    /// Barreto-Lynn-Scott curves with embedding degree 12.
    Bls12 = 0,
}

impl PairingFamily {
    /// Embedding degree `k` implied by the family.
    pub const fn embedding_degree(self) -> u32 {
        match self {
            PairingFamily::Bls12 => 12,
        }
    }
}

/// Hash function associated with the curve.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum HashAlgorithm {
    /// SHA-256
    Sha256 = 0,
    /// SHA-384
    Sha384 = 1,
    /// SHA-512
    Sha512 = 2,
}

impl HashAlgorithm {
    /// Digest size in bytes.
    pub const fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

macro_rules! impl_tag_byte {
    ($tag:ident { $($variant:ident),+ }) => {
        impl From<$tag> for u8 {
            fn from(tag: $tag) -> u8 {
                tag as u8
            }
        }

        impl TryFrom<u8> for $tag {
            type Error = u8;

            fn try_from(byte: u8) -> core::result::Result<$tag, u8> {
                $(
                    if byte == $tag::$variant as u8 {
                        return Ok($tag::$variant);
                    }
                )+
                Err(byte)
            }
        }
    };
}

impl_tag_byte!(CurveType { Weierstrass });
impl_tag_byte!(SexticTwist { DType, MType });
impl_tag_byte!(SignOfX { Positive, Negative });
impl_tag_byte!(PairingFamily { Bls12 });
impl_tag_byte!(HashAlgorithm { Sha256, Sha384, Sha512 });

#[cfg(test)]
mod tests {
    use super::{HashAlgorithm, SexticTwist, SignOfX};

    #[test]
    fn tag_bytes() {
        assert_eq!(u8::from(SexticTwist::MType), 1);
        assert_eq!(SexticTwist::try_from(0), Ok(SexticTwist::DType));
        assert_eq!(SignOfX::try_from(1), Ok(SignOfX::Negative));
        assert_eq!(HashAlgorithm::try_from(2), Ok(HashAlgorithm::Sha512));
        assert_eq!(HashAlgorithm::try_from(3), Err(3));
    }
}
