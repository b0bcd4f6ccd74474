//! Byte encoding tests.

use bls381::{CurveParameters, ENCODED_LEN, EFS, Error, InvalidCurveError};

#[test]
fn round_trip() {
    let params = bls381::bls12_381().unwrap();
    let bytes = params.to_bytes();
    assert_eq!(bytes.len(), ENCODED_LEN);

    let decoded = CurveParameters::from_bytes(&bytes).unwrap();
    assert_eq!(&decoded, params);
    assert_eq!(decoded.to_bytes(), bytes);
}

#[test]
fn integers_are_left_padded() {
    let bytes = bls381::bls12_381().unwrap().to_bytes();
    // x = 0xd201000000010000 occupies the last 8 bytes of its slot
    let x = &bytes[7..7 + EFS];
    assert_eq!(&x[..EFS - 8], &[0u8; EFS - 8]);
    assert_eq!(&x[EFS - 8..], &0xd201000000010000u64.to_be_bytes());
}

#[test]
fn corrupted_generator_rejected() {
    let mut bytes = bls381::bls12_381().unwrap().to_bytes();
    // last byte of Gy
    bytes[7 + 8 * EFS - 1] ^= 1;
    assert_eq!(
        CurveParameters::from_bytes(&bytes),
        Err(Error::InvalidCurve(InvalidCurveError::G1NotOnCurve))
    );
}

#[test]
fn flipped_trace_sign_rejected() {
    let mut bytes = bls381::bls12_381().unwrap().to_bytes();
    bytes[6] = 0;
    assert_eq!(
        CurveParameters::from_bytes(&bytes),
        Err(Error::InvalidCurve(InvalidCurveError::DerivedMismatch))
    );
}
