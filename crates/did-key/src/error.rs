use crate::varint;

/// Everything that can go wrong while building, parsing or projecting a
/// [`DidKey`](crate::DidKey).
///
/// Decoding runs its stages in a fixed order (prefix, multibase, varint,
/// multicodec, key shape) and stops at the first failure, so the variant
/// tells you which stage rejected the input.
#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("expected a did that starts with \"did:key:\"")]
	BadPrefix,
	#[error(
		"expected \"base58-btc\" encoding which should be identified in multibase as ascii 'z' but got {0:?}"
	)]
	UnsupportedMultibase(Option<char>),
	#[error("invalid base58-btc encoding")]
	InvalidEncoding(#[from] bs58::decode::Error),
	#[error("malformed multicodec varint")]
	MalformedVarint(#[from] varint::DecodeError),
	#[error("unsupported key multicodec {0:#x}")]
	UnsupportedAlgorithm(u64),
	#[error("not a valid DER encoded rsa SubjectPublicKeyInfo")]
	InvalidRsaKey(#[source] rsa::pkcs8::spki::Error),
	#[error(
		"ed25519 public keys are {} bytes but got {len} bytes",
		crate::crypto::ed25519::PubKey::LEN
	)]
	InvalidEd25519Key { len: usize },
	#[error("secp256k1 public keys are 33 or 65 bytes but got {0} bytes")]
	InvalidSecp256k1KeyLength(usize),
	#[error("unsupported key algorithm {0:?}, expected one of ed25519, rsa, secp256k1")]
	UnsupportedInputAlgorithm(String),
}
