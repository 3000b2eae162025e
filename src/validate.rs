//! Checking assertion signatures.
//!
//! Verification is the receiving half of the signing round trip: the
//! assertion is re-encoded in the placeholder state the signature was
//! computed over, with the signature itself, bytes cleared, as the sole
//! entry of the signature list, and the signature bytes are checked
//! against that encoding under the zone's verify key.

use crate::base::{Assertion, SecAlg, Signature};
use crate::cbor::{self, EncodeError};
use core::fmt;
use ring::signature as crypto;

//------------ verify_assertion ----------------------------------------------

/// Verifies one of an assertion's signatures.
///
/// `verify_key` is the raw public key of the assertion's zone for the
/// signature's algorithm.
pub fn verify_assertion(
    assertion: &Assertion,
    signature: &Signature,
    verify_key: &[u8],
) -> Result<(), VerifyError> {
    let bytes = match signature.bytes() {
        Some(bytes) => bytes.clone(),
        None => return Err(VerifyError::MissingBytes),
    };
    let mut stub = assertion.clone();
    stub.set_signatures(vec![signature.without_bytes()]);
    let msg = cbor::assertion_bytes(&stub)?;
    let algorithm: &'static dyn crypto::VerificationAlgorithm =
        match signature.algorithm() {
            SecAlg::Ed25519 => &crypto::ED25519,
            SecAlg::EcdsaP256 => &crypto::ECDSA_P256_SHA256_FIXED,
        };
    crypto::UnparsedPublicKey::new(algorithm, verify_key)
        .verify(&msg, &bytes)
        .map_err(|_| VerifyError::BadSignature)
}

//------------ VerifyError ---------------------------------------------------

/// A signature did not verify.
#[derive(Debug)]
pub enum VerifyError {
    /// The signature is a placeholder without bytes.
    MissingBytes,

    /// Canonical encoding of the assertion failed.
    Encode(EncodeError),

    /// The signature bytes do not match the assertion.
    BadSignature,
}

impl From<EncodeError> for VerifyError {
    fn from(err: EncodeError) -> Self {
        VerifyError::Encode(err)
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::MissingBytes => {
                f.write_str("signature carries no bytes")
            }
            VerifyError::Encode(err) => err.fmt(f),
            VerifyError::BadSignature => f.write_str("bad signature"),
        }
    }
}

impl std::error::Error for VerifyError {}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::Timestamp;
    use crate::sign::{sign_at, ZoneKey, ZoneKeys};
    use crate::zonefile::compile;
    use crate::base::Section;

    const SEED: &str =
        "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const PUBLIC: &str =
        "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

    #[test]
    fn placeholder_cannot_verify() {
        let doc =
            compile("Assertion example.com. . www [ ip4 192.0.2.1 ]")
                .unwrap();
        let assertion = match &doc.sections()[0] {
            Section::Assertion(assertion) => assertion,
            _ => unreachable!(),
        };
        let placeholder = Signature::new(
            SecAlg::Ed25519,
            Timestamp::from_secs(0),
            Timestamp::from_secs(1),
            0,
            None,
        );
        assert!(matches!(
            verify_assertion(assertion, &placeholder, &[0; 32]),
            Err(VerifyError::MissingBytes)
        ));
    }

    #[test]
    fn wrong_key_fails() {
        let mut doc =
            compile("Assertion example.com. . www [ ip4 192.0.2.1 ]")
                .unwrap();
        let mut keys = ZoneKeys::new();
        keys.insert(
            "example.com.",
            ZoneKey::ed25519_from_hex(SEED, PUBLIC).unwrap(),
        );
        sign_at(&mut doc, Timestamp::from_secs(1_000), 60, &keys).unwrap();

        let assertion = match &doc.sections()[0] {
            Section::Assertion(assertion) => assertion,
            _ => unreachable!(),
        };
        let wrong_key = [0u8; 32];
        assert!(matches!(
            verify_assertion(
                assertion,
                &assertion.signatures()[0],
                &wrong_key,
            ),
            Err(VerifyError::BadSignature)
        ));
    }
}
