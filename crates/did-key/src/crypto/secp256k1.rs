use bytes::Bytes;

use crate::{key_algos::Secp256k1, Error};

/// A SEC1 encoded secp256k1 point, either compressed (33 bytes) or
/// uncompressed (65 bytes).
///
/// Only the length is validated. Whether the point is actually on the curve is
/// left to whatever verifies signatures with it, or to [`Self::to_k256`].
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct Secp256k1RawPoint(Bytes);

impl Secp256k1RawPoint {
	pub fn try_from_bytes(bytes: Bytes) -> Result<Self, Error> {
		match bytes.len() {
			Secp256k1::COMPRESSED_LEN | Secp256k1::UNCOMPRESSED_LEN => Ok(Self(bytes)),
			len => Err(Error::InvalidSecp256k1KeyLength(len)),
		}
	}

	pub fn as_slice(&self) -> &[u8] {
		self.0.as_ref()
	}

	pub fn into_inner(self) -> Bytes {
		self.0
	}

	pub fn is_compressed(&self) -> bool {
		self.0.len() == Secp256k1::COMPRESSED_LEN
	}

	/// Decodes the point, failing if it is not on the curve.
	#[cfg(feature = "k256")]
	pub fn to_k256(&self) -> Result<k256::PublicKey, k256::elliptic_curve::Error> {
		k256::PublicKey::from_sec1_bytes(self.as_slice())
	}
}

#[cfg(feature = "k256")]
impl From<&k256::PublicKey> for Secp256k1RawPoint {
	/// Uses the compressed encoding.
	fn from(value: &k256::PublicKey) -> Self {
		use k256::elliptic_curve::sec1::ToEncodedPoint as _;

		let point = value.to_encoded_point(true);
		Self(Bytes::copy_from_slice(point.as_bytes()))
	}
}

#[cfg(test)]
pub(crate) mod test {
	use super::*;

	use hex_literal::hex;

	/// The generator point, compressed.
	pub(crate) const GENERATOR_COMPRESSED: [u8; 33] =
		hex!("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
	/// The generator point, uncompressed.
	pub(crate) const GENERATOR_UNCOMPRESSED: [u8; 65] = hex!(
		"0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
		"483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
	);

	#[test]
	fn test_length_gate() {
		for len in [0, 1, 32, 34, 64, 66] {
			assert!(matches!(
				Secp256k1RawPoint::try_from_bytes(Bytes::from(vec![2u8; len])),
				Err(Error::InvalidSecp256k1KeyLength(l)) if l == len
			));
		}
		for (bytes, compressed) in [
			(GENERATOR_COMPRESSED.as_slice(), true),
			(&GENERATOR_UNCOMPRESSED, false),
		] {
			let point =
				Secp256k1RawPoint::try_from_bytes(Bytes::copy_from_slice(bytes))
					.expect("valid length");
			assert_eq!(point.as_slice(), bytes);
			assert_eq!(point.is_compressed(), compressed);
		}
	}

	#[test]
	fn test_no_curve_check() {
		// Right length, but not a point. Accepted at this layer.
		let point = Secp256k1RawPoint::try_from_bytes(Bytes::from_static(&[0xff; 33]));
		assert!(point.is_ok());
	}

	#[cfg(feature = "k256")]
	#[test]
	fn test_k256() {
		let compressed = Secp256k1RawPoint::try_from_bytes(Bytes::from_static(
			&GENERATOR_COMPRESSED,
		))
		.unwrap();
		let uncompressed = Secp256k1RawPoint::try_from_bytes(Bytes::from_static(
			&GENERATOR_UNCOMPRESSED,
		))
		.unwrap();
		let a = compressed.to_k256().expect("generator is on the curve");
		let b = uncompressed.to_k256().expect("generator is on the curve");
		assert_eq!(a, b);
		assert_eq!(Secp256k1RawPoint::from(&b), compressed);

		let bogus =
			Secp256k1RawPoint::try_from_bytes(Bytes::from_static(&[0xff; 33])).unwrap();
		assert!(bogus.to_k256().is_err());
	}
}
