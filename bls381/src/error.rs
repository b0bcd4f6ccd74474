//! Error types.

use core::fmt::{self, Display};

/// Errors raised while deriving, validating or decoding curve parameters.
///
/// None of these are recoverable: a caller receiving one must not proceed
/// with any cryptographic operation on the curve.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The seed or an encoding does not describe a well-formed parameter set.
    Format(FormatError),

    /// A derived or supplied value violates a curve invariant.
    InvalidCurve(InvalidCurveError),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Format(err) => write!(f, "format error: {err}"),
            Error::InvalidCurve(err) => write!(f, "invalid curve: {err}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<FormatError> for Error {
    fn from(err: FormatError) -> Error {
        Error::Format(err)
    }
}

impl From<InvalidCurveError> for Error {
    fn from(err: InvalidCurveError) -> Error {
        Error::InvalidCurve(err)
    }
}

/// Malformed seed arithmetic or byte encoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FormatError {
    /// The field modulus numerator is not divisible by 3.
    InexactDivision {
        /// Remainder of the numerator modulo 3.
        remainder: u8,
    },

    /// The derived modulus does not fit in the declared field size.
    FieldSize {
        /// Bit length of the derived modulus.
        bits: u64,
        /// Largest bit length permitted by the field size.
        max: u64,
    },

    /// An encoded parameter set has the wrong length.
    Length {
        /// Expected length in bytes.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// An encoded tag byte does not name a known variant.
    Tag {
        /// Byte offset of the tag within the encoding.
        offset: usize,
        /// The unrecognised value.
        value: u8,
    },
}

impl Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InexactDivision { remainder } => write!(
                f,
                "modulus numerator leaves remainder {remainder} modulo 3"
            ),
            FormatError::FieldSize { bits, max } => {
                write!(f, "modulus is {bits} bits, field size allows {max}")
            }
            FormatError::Length { expected, actual } => {
                write!(f, "expected {expected} bytes, got {actual}")
            }
            FormatError::Tag { offset, value } => {
                write!(f, "unknown tag {value:#04x} at offset {offset}")
            }
        }
    }
}

impl core::error::Error for FormatError {}

/// The curve invariant which failed validation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InvalidCurveError {
    /// The field modulus `p` is composite.
    ModulusNotPrime,
    /// The subgroup order `r` is composite.
    OrderNotPrime,
    /// `t² - 4p` is not negative.
    HasseBound,
    /// A curve coefficient is not reduced modulo `p`.
    CoefficientOutOfRange,
    /// A G1 coordinate is not reduced modulo `p`.
    G1OutOfRange,
    /// G1 does not satisfy the curve equation.
    G1NotOnCurve,
    /// `-1` is a square modulo `p`, so `i² = -1` does not define `F_p²`.
    ExtensionField,
    /// A G2 coordinate is not reduced modulo `p`.
    G2OutOfRange,
    /// G2 does not satisfy the twisted curve equation.
    G2NotOnTwist,
    /// `r` does not divide `p¹² - 1`.
    EmbeddingDegree,
    /// `r` does not divide the number of points `p + 1 - t`.
    Cofactor,
    /// `r·G1` is not the point at infinity.
    G1Order,
    /// `r·G2` is not the point at infinity.
    G2Order,
    /// The Frobenius constant is not `ξ^((p-1)/6)`.
    FrobeniusConstant,
    /// Encoded `p`, `r` or `t` disagree with the values derived from the seed.
    DerivedMismatch,
}

impl Display for InvalidCurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InvalidCurveError::ModulusNotPrime => "field modulus is not prime",
            InvalidCurveError::OrderNotPrime => "subgroup order is not prime",
            InvalidCurveError::HasseBound => "trace violates the Hasse bound",
            InvalidCurveError::CoefficientOutOfRange => "curve coefficient not reduced",
            InvalidCurveError::G1OutOfRange => "G1 coordinate not reduced",
            InvalidCurveError::G1NotOnCurve => "G1 generator is not on the curve",
            InvalidCurveError::ExtensionField => "-1 is a quadratic residue modulo p",
            InvalidCurveError::G2OutOfRange => "G2 coordinate not reduced",
            InvalidCurveError::G2NotOnTwist => "G2 generator is not on the twist",
            InvalidCurveError::EmbeddingDegree => "subgroup order does not divide p^12 - 1",
            InvalidCurveError::Cofactor => "subgroup order does not divide the curve order",
            InvalidCurveError::G1Order => "G1 generator does not have order r",
            InvalidCurveError::G2Order => "G2 generator does not have order r",
            InvalidCurveError::FrobeniusConstant => "Frobenius constant mismatch",
            InvalidCurveError::DerivedMismatch => "encoded values disagree with the seed",
        })
    }
}

impl core::error::Error for InvalidCurveError {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
