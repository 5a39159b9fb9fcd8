//! Turning the raw bytes of a did:key into keys that signatures can be
//! verified with.
//!
//! This crate doesn't verify signatures itself. [`project`] validates the key
//! bytes for their algorithm and hands back a [`VerificationKey`], which wraps
//! the type that the respective cryptography crate verifies with.

use bytes::Bytes;

use crate::{Error, KeyAlgo};

pub mod ed25519;
pub mod rsa;
pub mod secp256k1;

// Re-exports
pub use ed25519_dalek;
#[cfg(feature = "k256")]
pub use k256;

/// A public key in the form that its algorithm verifies signatures with.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum VerificationKey {
	Rsa(self::rsa::RsaPublicKey),
	Ed25519(self::ed25519::PubKey),
	Secp256k1(self::secp256k1::Secp256k1RawPoint),
}

impl VerificationKey {
	pub fn algo(&self) -> KeyAlgo {
		match self {
			Self::Rsa(_) => KeyAlgo::Rsa,
			Self::Ed25519(_) => KeyAlgo::Ed25519,
			Self::Secp256k1(_) => KeyAlgo::Secp256k1,
		}
	}
}

/// Validates `raw` as a public key of `algo`, and converts it to a
/// [`VerificationKey`].
///
/// - RSA: `raw` must be DER SubjectPublicKeyInfo of an RSA key.
/// - Ed25519: `raw` must be exactly [`ed25519::PubKey::LEN`] bytes.
/// - Secp256k1: `raw` must be 33 or 65 bytes. The point is not checked to be
///   on the curve.
pub fn project(algo: KeyAlgo, raw: &[u8]) -> Result<VerificationKey, Error> {
	project_bytes(algo, Bytes::copy_from_slice(raw))
}

/// Same as [`project`], but avoids copying the bytes when possible.
pub(crate) fn project_bytes(
	algo: KeyAlgo,
	raw: Bytes,
) -> Result<VerificationKey, Error> {
	Ok(match algo {
		KeyAlgo::Rsa => VerificationKey::Rsa(self::rsa::from_spki_der(&raw)?),
		KeyAlgo::Ed25519 => {
			VerificationKey::Ed25519(self::ed25519::PubKey::try_from_slice(&raw)?)
		}
		KeyAlgo::Secp256k1 => VerificationKey::Secp256k1(
			self::secp256k1::Secp256k1RawPoint::try_from_bytes(raw)?,
		),
	})
}
