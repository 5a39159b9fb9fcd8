//! RSA keys, which did:key carries as DER encoded SubjectPublicKeyInfo.

pub use rsa::{traits::PublicKeyParts, RsaPublicKey};

use rsa::pkcs8::{DecodePublicKey as _, EncodePublicKey as _};

use crate::Error;

/// Parses DER SubjectPublicKeyInfo bytes. Fails if the bytes are not valid
/// DER, or if they describe a key that is not an RSA key.
pub fn from_spki_der(bytes: &[u8]) -> Result<RsaPublicKey, Error> {
	RsaPublicKey::from_public_key_der(bytes).map_err(Error::InvalidRsaKey)
}

/// Same as [`from_spki_der`], but for a PEM `PUBLIC KEY` block.
pub fn from_spki_pem(s: &str) -> Result<RsaPublicKey, Error> {
	RsaPublicKey::from_public_key_pem(s).map_err(Error::InvalidRsaKey)
}

/// Serializes the key as DER SubjectPublicKeyInfo.
pub fn to_spki_der(key: &RsaPublicKey) -> Result<Vec<u8>, Error> {
	let doc = key.to_public_key_der().map_err(Error::InvalidRsaKey)?;
	Ok(doc.as_bytes().to_vec())
}

#[cfg(test)]
pub(crate) mod test {
	use super::*;

	use hex_literal::hex;

	/// A 1024 bit RSA public key as DER SubjectPublicKeyInfo.
	pub(crate) const RSA_1024_SPKI: [u8; 162] = hex!(
		"30819f300d06092a864886f70d010101050003818d0030818902818100d8fd327c"
		"c3845a9493038d6946f6d6fa916b73b37f530f192e6858e97295a4d10b6ec043b9"
		"f869af6fc5e78b2896192afcdcbce96698aeff77013c9f50daa2806299987728ed"
		"0190fd298e6b6a850f62cb77cab311306b8d8354b35941fab5ed64fa7a41fba217"
		"33e945122879f5f5b6e58f7add00a82987b9e923afadc9fb9f0203010001"
	);

	/// An ed25519 public key as DER SubjectPublicKeyInfo.
	pub(crate) const ED25519_SPKI: [u8; 44] = hex!(
		"302a300506032b6570032100"
		"d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
	);

	#[test]
	fn test_parse_spki() {
		let key = from_spki_der(&RSA_1024_SPKI).expect("valid rsa spki");
		assert_eq!(key.size() * 8, 1024);
		assert_eq!(key.e(), &rsa::BigUint::from(65537u32));
		assert_eq!(to_spki_der(&key).unwrap(), RSA_1024_SPKI);
	}

	#[test]
	fn test_parse_pem() {
		let pem = "-----BEGIN PUBLIC KEY-----
MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQDY/TJ8w4RalJMDjWlG9tb6kWtz
s39TDxkuaFjpcpWk0QtuwEO5+Gmvb8XniyiWGSr83LzpZpiu/3cBPJ9Q2qKAYpmY
dyjtAZD9KY5raoUPYst3yrMRMGuNg1SzWUH6te1k+npB+6IXM+lFEih59fW25Y96
3QCoKYe56SOvrcn7nwIDAQAB
-----END PUBLIC KEY-----
";
		let from_pem = from_spki_pem(pem).expect("valid pem");
		let from_der = from_spki_der(&RSA_1024_SPKI).expect("valid der");
		assert_eq!(from_pem, from_der);
		assert!(matches!(
			from_spki_pem("not a pem"),
			Err(Error::InvalidRsaKey(_))
		));
	}

	#[test]
	fn test_reject_non_rsa() {
		let cases: [&[u8]; 4] = [
			&ED25519_SPKI,
			&[],
			&RSA_1024_SPKI[..100],
			&hex!("deadbeef"),
		];
		for bytes in cases {
			assert!(
				matches!(from_spki_der(bytes), Err(Error::InvalidRsaKey(_))),
				"expected {bytes:x?} to be rejected"
			);
		}
	}
}
