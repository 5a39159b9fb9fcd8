use std::{fmt::Display, str::FromStr};

use crate::{varint::encode_varint, varint::VarintEncoding, Error};

/// The public key algorithms that a [`DidKey`](crate::DidKey) can hold.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum KeyAlgo {
	Ed25519,
	/// RSA keys, serialized as DER SubjectPublicKeyInfo.
	Rsa,
	Secp256k1,
}

impl KeyAlgo {
	/// All supported algorithms.
	pub const ALL: [Self; 3] = [Self::Ed25519, Self::Rsa, Self::Secp256k1];

	/// The multicodec code that tags keys of this algorithm.
	pub const fn multicodec_value(&self) -> u64 {
		match self {
			Self::Ed25519 => Ed25519::MULTICODEC_VALUE,
			Self::Rsa => Rsa::MULTICODEC_VALUE,
			Self::Secp256k1 => Secp256k1::MULTICODEC_VALUE,
		}
	}

	/// The multicodec code, already encoded as a varint.
	pub(crate) const fn multicodec_value_encoded(&self) -> VarintEncoding {
		match self {
			Self::Ed25519 => Ed25519::MULTICODEC_VALUE_ENCODED,
			Self::Rsa => Rsa::MULTICODEC_VALUE_ENCODED,
			Self::Secp256k1 => Secp256k1::MULTICODEC_VALUE_ENCODED,
		}
	}

	/// Looks up the algorithm for a multicodec code.
	pub fn from_multicodec(value: u64) -> Result<Self, Error> {
		Ok(match value {
			Ed25519::MULTICODEC_VALUE => Self::Ed25519,
			Rsa::MULTICODEC_VALUE => Self::Rsa,
			Secp256k1::MULTICODEC_VALUE => Self::Secp256k1,
			_ => return Err(Error::UnsupportedAlgorithm(value)),
		})
	}

	/// The multicodec name of the algorithm, minus the `-pub` suffix.
	pub const fn name(&self) -> &'static str {
		match self {
			Self::Ed25519 => Ed25519::NAME,
			Self::Rsa => Rsa::NAME,
			Self::Secp256k1 => Secp256k1::NAME,
		}
	}
}

impl FromStr for KeyAlgo {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|algo| algo.name().eq_ignore_ascii_case(s))
			.ok_or_else(|| Error::UnsupportedInputAlgorithm(s.to_owned()))
	}
}

impl Display for KeyAlgo {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.name().fmt(f)
	}
}

// ---- internal code ----

/// A key algorithm that is known statically, at compile time.
pub(crate) trait StaticKeyAlgo {
	const NAME: &'static str;
	const MULTICODEC_VALUE: u64;
	const MULTICODEC_VALUE_ENCODED: VarintEncoding =
		encode_varint(Self::MULTICODEC_VALUE);
}

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub(crate) struct Ed25519;

impl Ed25519 {
	pub(crate) const PUB_KEY_LEN: usize = 32;
}

impl StaticKeyAlgo for Ed25519 {
	const NAME: &'static str = "ed25519";
	const MULTICODEC_VALUE: u64 = 0xED;
}

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub(crate) struct Rsa;

impl StaticKeyAlgo for Rsa {
	const NAME: &'static str = "rsa";
	/// `rsa-x509-pub`
	const MULTICODEC_VALUE: u64 = 0x1205;
}

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub(crate) struct Secp256k1;

impl Secp256k1 {
	pub(crate) const COMPRESSED_LEN: usize = 33;
	pub(crate) const UNCOMPRESSED_LEN: usize = 65;
}

impl StaticKeyAlgo for Secp256k1 {
	const NAME: &'static str = "secp256k1";
	const MULTICODEC_VALUE: u64 = 0x1206;
}

impl PartialEq<Ed25519> for KeyAlgo {
	fn eq(&self, _other: &Ed25519) -> bool {
		*self == KeyAlgo::Ed25519
	}
}

impl PartialEq<Rsa> for KeyAlgo {
	fn eq(&self, _other: &Rsa) -> bool {
		*self == KeyAlgo::Rsa
	}
}

impl PartialEq<Secp256k1> for KeyAlgo {
	fn eq(&self, _other: &Secp256k1) -> bool {
		*self == KeyAlgo::Secp256k1
	}
}
