//! # Commit-Reveal Work Descriptions
//!
//! The agreement's work description stays private until contested: at
//! creation only a digest over `salt ‖ payload` is stored, and filing a
//! dispute requires reproducing both exactly. The salt blinds the digest
//! so a short or guessable description cannot be brute-forced from the
//! commitment.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use pactum_core::{ContentDigest, Sha256Accumulator};

/// The 32-byte blinding salt of a commitment.
///
/// Generated by the employer at agreement creation and kept private
/// alongside the work description until a dispute reveals both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salt([u8; 32]);

impl Salt {
    /// Create a salt from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Generate a fresh random salt.
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Access the raw salt bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// A hash commitment to a salted work description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment(ContentDigest);

impl Commitment {
    /// Commit to `payload` blinded by `salt`.
    ///
    /// The digest is SHA-256 over the concatenation `salt ‖ payload`;
    /// [`matches`](Self::matches) recomputes the same layout at reveal
    /// time.
    pub fn compute(salt: &Salt, payload: &[u8]) -> Self {
        let mut acc = Sha256Accumulator::new();
        acc.update(salt.as_bytes());
        acc.update(payload);
        Self(acc.finalize())
    }

    /// Wrap an existing digest as a commitment.
    pub const fn from_digest(digest: ContentDigest) -> Self {
        Self(digest)
    }

    /// The committed digest.
    pub const fn digest(&self) -> &ContentDigest {
        &self.0
    }

    /// Whether `salt` and `payload` reproduce this commitment.
    pub fn matches(&self, salt: &Salt, payload: &[u8]) -> bool {
        Self::compute(salt, payload) == *self
    }
}

impl std::fmt::Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_matches_itself() {
        let salt = Salt::random();
        let commitment = Commitment::compute(&salt, b"deliver one parser");
        assert!(commitment.matches(&salt, b"deliver one parser"));
    }

    #[test]
    fn wrong_payload_does_not_match() {
        let salt = Salt::random();
        let commitment = Commitment::compute(&salt, b"deliver one parser");
        assert!(!commitment.matches(&salt, b"deliver two parsers"));
    }

    #[test]
    fn wrong_salt_does_not_match() {
        let payload = b"deliver one parser";
        let commitment = Commitment::compute(&Salt::random(), payload);
        assert!(!commitment.matches(&Salt::random(), payload));
    }

    #[test]
    fn random_salts_differ() {
        assert_ne!(Salt::random(), Salt::random());
    }

    #[test]
    fn salt_and_payload_boundary_is_fixed() {
        // Moving a byte across the salt/payload boundary must change the
        // digest: the layout is salt ‖ payload with a fixed 32-byte salt.
        let salt_a = Salt::from_bytes([1; 32]);
        let salt_b = Salt::from_bytes([2; 32]);
        assert_ne!(
            Commitment::compute(&salt_a, b"x"),
            Commitment::compute(&salt_b, b"x")
        );
    }

    #[test]
    fn from_digest_roundtrip() {
        let salt = Salt::random();
        let commitment = Commitment::compute(&salt, b"payload");
        let rebuilt = Commitment::from_digest(*commitment.digest());
        assert_eq!(rebuilt, commitment);
    }

    #[test]
    fn serde_roundtrip() {
        let commitment = Commitment::compute(&Salt::random(), b"payload");
        let json = serde_json::to_string(&commitment).unwrap();
        let back: Commitment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, commitment);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn reveal_matches_iff_exact(
                salt_bytes in any::<[u8; 32]>(),
                payload in proptest::collection::vec(any::<u8>(), 0..256),
                mutation in any::<u8>(),
            ) {
                let salt = Salt::from_bytes(salt_bytes);
                let commitment = Commitment::compute(&salt, &payload);
                prop_assert!(commitment.matches(&salt, &payload));

                let mut altered = payload.clone();
                altered.push(mutation);
                prop_assert!(!commitment.matches(&salt, &altered));

                let mut other_salt = salt_bytes;
                other_salt[0] ^= 0x01;
                prop_assert!(!commitment.matches(&Salt::from_bytes(other_salt), &payload));
            }
        }
    }
}
