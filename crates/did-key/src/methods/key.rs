//! An implementation of the [did:key] method.
//!
//! [did:key]: https://w3c-ccg.github.io/did-method-key/

use std::{fmt::Display, str::FromStr};

use bytes::Bytes;

use crate::{
	crypto::{self, VerificationKey},
	envelope::{decode_envelope, decode_multibase, encode_multibase},
	Error, KeyAlgo,
};

/// An implementation of the `did:key` method. See the [module](self) docs for more
/// info.
///
/// The key bytes are always valid for the algorithm: every way of creating a
/// `DidKey` runs them through [`crypto::project`] first. Two different
/// encodings of the same key, such as compressed and uncompressed secp256k1
/// points, are different `DidKey`s.
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct DidKey {
	algo: KeyAlgo,
	/// The raw public key, without the multicodec.
	raw: Bytes,
}

impl DidKey {
	pub const PREFIX: &'static str = "did:key:";

	/// Creates a `DidKey` from the raw bytes of a public key.
	pub fn new(algo: KeyAlgo, raw: impl Into<Bytes>) -> Result<Self, Error> {
		let raw = raw.into();
		crypto::project_bytes(algo, raw.clone())?;
		Ok(Self { algo, raw })
	}

	pub fn from_ed25519(key: &ed25519_dalek::VerifyingKey) -> Self {
		let key = crypto::ed25519::PubKey::from(key);
		Self {
			algo: KeyAlgo::Ed25519,
			raw: Bytes::copy_from_slice(key.as_bytes()),
		}
	}

	pub fn from_rsa(key: &crypto::rsa::RsaPublicKey) -> Result<Self, Error> {
		let der = crypto::rsa::to_spki_der(key)?;
		Ok(Self {
			algo: KeyAlgo::Rsa,
			raw: Bytes::from(der),
		})
	}

	/// Uses the compressed encoding of the point.
	#[cfg(feature = "k256")]
	pub fn from_secp256k1(key: &k256::PublicKey) -> Self {
		let point = crypto::secp256k1::Secp256k1RawPoint::from(key);
		Self {
			algo: KeyAlgo::Secp256k1,
			raw: point.into_inner(),
		}
	}

	/// The algorithm of the public key.
	pub fn algo(&self) -> KeyAlgo {
		self.algo
	}

	/// The multicodec code of the public key.
	pub fn multicodec_value(&self) -> u64 {
		self.algo.multicodec_value()
	}

	/// The raw public key.
	pub fn raw(&self) -> &[u8] {
		self.raw.as_ref()
	}

	/// The raw public key, as a reference counted buffer.
	pub fn raw_bytes(&self) -> &Bytes {
		&self.raw
	}

	/// The binary envelope of the did, i.e. the multicodec varint followed by
	/// the raw public key.
	pub fn envelope(&self) -> Vec<u8> {
		let tag = self.algo.multicodec_value_encoded();
		let mut out = Vec::with_capacity(tag.as_slice().len() + self.raw.len());
		out.extend_from_slice(tag.as_slice());
		out.extend_from_slice(&self.raw);
		out
	}

	/// The key in a form that can be handed to signature verification.
	pub fn verification_key(&self) -> Result<VerificationKey, Error> {
		crypto::project_bytes(self.algo, self.raw.clone())
	}

	/// Parses a `did:key` string.
	pub fn decode(s: &str) -> Result<Self, Error> {
		let multibase_part = s.strip_prefix(Self::PREFIX).ok_or(Error::BadPrefix)?;

		let mut decoded = Vec::new();
		decode_multibase(multibase_part, &mut decoded)?;
		let (tag, raw) = decode_envelope(&decoded)?;
		let algo = KeyAlgo::from_multicodec(tag)?;
		let raw = Bytes::copy_from_slice(raw);
		crypto::project_bytes(algo, raw.clone())?;

		Ok(Self { algo, raw })
	}

	/// Formats the did as a `did:key` string.
	pub fn encode(&self) -> String {
		format!("{}{}", Self::PREFIX, encode_multibase(&self.envelope()))
	}
}

impl FromStr for DidKey {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::decode(s)
	}
}

impl TryFrom<&str> for DidKey {
	type Error = Error;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::decode(value)
	}
}

impl TryFrom<String> for DidKey {
	type Error = Error;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::decode(&value)
	}
}

impl From<DidKey> for String {
	fn from(value: DidKey) -> Self {
		value.encode()
	}
}

impl From<&ed25519_dalek::VerifyingKey> for DidKey {
	fn from(value: &ed25519_dalek::VerifyingKey) -> Self {
		Self::from_ed25519(value)
	}
}

#[cfg(feature = "k256")]
impl From<&k256::PublicKey> for DidKey {
	fn from(value: &k256::PublicKey) -> Self {
		Self::from_secp256k1(value)
	}
}

impl Display for DidKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.encode().fmt(f)
	}
}
