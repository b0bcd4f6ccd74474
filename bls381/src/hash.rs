//! Hashing messages to field-width byte strings.

use crate::{EFS, FieldBytes, params::CurveParameters, tags::HashAlgorithm};
use sha2::{Digest, Sha256, Sha384, Sha512};

impl HashAlgorithm {
    /// Hash `msg` and fit the digest into [`EFS`] bytes.
    ///
    /// A digest of at least [`EFS`] bytes is truncated to its leading bytes;
    /// a shorter one is right-aligned and left-padded with zeros, so that it
    /// reads as the same big-endian integer.
    pub fn hash_to_field_bytes(self, msg: &[u8]) -> FieldBytes {
        match self {
            HashAlgorithm::Sha256 => fit(&Sha256::digest(msg)),
            HashAlgorithm::Sha384 => fit(&Sha384::digest(msg)),
            HashAlgorithm::Sha512 => fit(&Sha512::digest(msg)),
        }
    }
}

impl CurveParameters {
    /// Hash `msg` with the curve's associated hash function into a
    /// field-width byte string.
    pub fn hash_to_field_bytes(&self, msg: &[u8]) -> FieldBytes {
        self.hash().hash_to_field_bytes(msg)
    }
}

fn fit(digest: &[u8]) -> FieldBytes {
    let mut out = [0u8; EFS];
    if digest.len() >= EFS {
        out.copy_from_slice(&digest[..EFS]);
    } else {
        out[EFS - digest.len()..].copy_from_slice(digest);
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::tags::HashAlgorithm;
    use hex_literal::hex;

    #[test]
    fn sha256_is_left_padded() {
        let out = HashAlgorithm::Sha256.hash_to_field_bytes(b"abc");
        assert_eq!(HashAlgorithm::Sha256.output_size(), 32);
        assert_eq!(&out[..16], &[0u8; 16]);
        assert_eq!(
            &out[16..],
            &hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn curve_hash_is_sha256() {
        let params = crate::params::CurveParameters::bls12_381().unwrap();
        assert_eq!(
            params.hash_to_field_bytes(b"abc"),
            HashAlgorithm::Sha256.hash_to_field_bytes(b"abc")
        );
    }

    #[test]
    fn sha384_fills_field() {
        let out = HashAlgorithm::Sha384.hash_to_field_bytes(b"abc");
        assert_eq!(HashAlgorithm::Sha384.output_size(), crate::EFS);
        assert_eq!(
            out,
            hex!(
                "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded163"
                "1a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
            )
        );
    }

    #[test]
    fn sha512_is_truncated() {
        let out = HashAlgorithm::Sha512.hash_to_field_bytes(b"abc");
        assert_eq!(
            out,
            hex!(
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea2"
                "0a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd"
            )
        );
    }
}
