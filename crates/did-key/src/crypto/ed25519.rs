use curve25519_dalek::edwards::CompressedEdwardsY;
use ed25519_dalek::VerifyingKey;

use crate::Error;

/// An ed25519 public key, as the compressed y coordinate of a curve point.
///
/// Only the length is checked on construction. Use
/// [`Self::try_into_verifying_key`] to get a key that is known to be usable
/// for signature verification.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub struct PubKey([u8; ed25519_dalek::PUBLIC_KEY_LENGTH]);

impl PubKey {
	pub const LEN: usize = Self::key_len();

	pub fn try_from_slice(bytes: &[u8]) -> Result<Self, Error> {
		let bytes: &[u8; Self::LEN] = bytes
			.try_into()
			.map_err(|_| Error::InvalidEd25519Key { len: bytes.len() })?;
		Ok(Self(*bytes))
	}

	pub fn as_bytes(&self) -> &[u8; Self::LEN] {
		&self.0
	}

	/// Decompresses the key into a [`VerifyingKey`]. Performs all necessary
	/// validation that the key is valid and of sufficient strength.
	///
	/// Note that we will reject any keys that are too weak (aka low order).
	pub fn try_into_verifying_key(&self) -> Result<VerifyingKey, TryFromBytesError> {
		let compressed_edwards = CompressedEdwardsY(self.0);
		let Some(edwards) = compressed_edwards.decompress() else {
			return Err(TryFromBytesError::NotOnCurve);
		};
		let key = VerifyingKey::from(edwards);
		if key.is_weak() {
			return Err(TryFromBytesError::WeakKey);
		}
		Ok(key)
	}

	// TODO: Turn this into inline const when that feature stabilizes
	const fn key_len() -> usize {
		let len = crate::key_algos::Ed25519::PUB_KEY_LEN;
		assert!(len == ed25519_dalek::PUBLIC_KEY_LENGTH);
		len
	}
}

impl From<VerifyingKey> for PubKey {
	fn from(value: VerifyingKey) -> Self {
		Self(value.to_bytes())
	}
}

impl From<&VerifyingKey> for PubKey {
	fn from(value: &VerifyingKey) -> Self {
		Self(value.to_bytes())
	}
}

#[derive(thiserror::Error, Debug, Eq, PartialEq)]
pub enum TryFromBytesError {
	#[error(
		"the provided bytes was not the y coordinate of a valid point on the curve"
	)]
	NotOnCurve,
	#[error("public key has a low order and is too weak, which would allow the key to generate signatures that work for almost any message. To prevent this, we reject weak keys.")]
	WeakKey,
}
