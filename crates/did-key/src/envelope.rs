//! The binary envelope inside a did:key, and its multibase text form.
//!
//! The envelope is `varint(multicodec) || raw key bytes`. There is no length
//! prefix on the key bytes, the multicodec determines how they are to be
//! interpreted.

use crate::{
	varint::{decode_varint, encode_varint},
	Error,
};

/// The multibase selector for base58-btc.
pub const BASE58_BTC: char = 'z';

/// Writes `tag` as a varint followed by `raw`.
pub fn encode_envelope(tag: u64, raw: &[u8]) -> Vec<u8> {
	let tag = encode_varint(tag);
	let mut out = Vec::with_capacity(tag.as_slice().len() + raw.len());
	out.extend_from_slice(tag.as_slice());
	out.extend_from_slice(raw);
	out
}

/// Splits an envelope into its tag and the remaining bytes. The remaining
/// bytes are not validated at all.
pub fn decode_envelope(envelope: &[u8]) -> Result<(u64, &[u8]), Error> {
	let (tag, tag_len) = decode_varint(envelope)?;
	Ok((tag, &envelope[tag_len..]))
}

/// Encodes `bytes` as base58-btc multibase text.
pub fn encode_multibase(bytes: &[u8]) -> String {
	let encoded = bs58::encode(bytes)
		.with_alphabet(bs58::Alphabet::BITCOIN)
		.into_string();
	format!("{BASE58_BTC}{encoded}")
}

/// Decodes base58-btc multibase text into `out_buf`, which is cleared first.
///
/// did:key only uses base58-btc, so this doesn't accept any other multibase.
pub fn decode_multibase(s: &str, out_buf: &mut Vec<u8>) -> Result<(), Error> {
	out_buf.clear();
	let mut chars = s.chars();
	match chars.next() {
		Some(BASE58_BTC) => (),
		other => return Err(Error::UnsupportedMultibase(other)),
	}
	bs58::decode(chars.as_str())
		.with_alphabet(bs58::Alphabet::BITCOIN)
		.onto(out_buf)?;
	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;

	use eyre::WrapErr;
	use hex_literal::hex;

	#[derive(Debug)]
	struct Example {
		decoded: &'static [u8],
		encoded: &'static str,
	}

	// from: https://datatracker.ietf.org/doc/html/draft-msporny-base58-03#section-5
	const EXAMPLES: &[Example] = &[
		Example {
			decoded: b"Hello World!",
			encoded: "2NEpo7TZRRrLZSi2U",
		},
		Example {
			decoded: b"The quick brown fox jumps over the lazy dog.",
			encoded: "USm3fpXnKG5EUBx2ndxBDMPVciP5hGey2Jh4NDv6gmeo1LkMeiKrLJUUBk6Z",
		},
		Example {
			decoded: &hex!("0000287fb4cd"),
			encoded: "11233QC4",
		},
	];

	#[test]
	fn test_decode_multibase() -> eyre::Result<()> {
		let mut buf = Vec::new();
		for e in EXAMPLES {
			let Example { decoded, encoded } = e;
			let s = format!("z{encoded}");
			decode_multibase(&s, &mut buf)
				.wrap_err_with(|| format!("Failed to decode example {e:?}"))?;
			assert_eq!(buf, *decoded, "failed comparison in example {e:?}");
		}

		Ok(())
	}

	#[test]
	fn test_encode_multibase() {
		for e in EXAMPLES {
			let Example { decoded, encoded } = e;
			assert_eq!(
				encode_multibase(decoded),
				format!("z{encoded}"),
				"failed comparison in example {e:?}"
			);
		}
		assert_eq!(encode_multibase(&[]), "z");
	}

	#[test]
	fn test_decode_multibase_wrong_base() {
		let mut buf = Vec::new();
		// base58-flickr, base64, base32 and an empty string
		for (s, selector) in [
			("Z2NEpo7TZRRrLZSi2U", Some('Z')),
			("mSGVsbG8gV29ybGQh", Some('m')),
			("bjbswy3dp", Some('b')),
			("", None),
		] {
			let result = decode_multibase(s, &mut buf);
			assert!(
				matches!(result, Err(Error::UnsupportedMultibase(c)) if c == selector),
				"unexpected result for {s:?}: {result:?}"
			);
		}
	}

	#[test]
	fn test_decode_multibase_invalid_chars() {
		let mut buf = Vec::new();
		// 0, O, I and l are not part of the bitcoin alphabet.
		for s in ["z0abc", "zOabc", "zIabc", "zlabc", "z abc"] {
			let result = decode_multibase(s, &mut buf);
			assert!(
				matches!(result, Err(Error::InvalidEncoding(_))),
				"unexpected result for {s:?}: {result:?}"
			);
		}
	}

	#[test]
	fn test_envelope() -> eyre::Result<()> {
		let raw = hex!("deadbeef");
		let envelope = encode_envelope(0x1205, &raw);
		assert_eq!(envelope, hex!("8524deadbeef"));

		let (tag, remainder) =
			decode_envelope(&envelope).wrap_err("failed to decode envelope")?;
		assert_eq!(tag, 0x1205);
		assert_eq!(remainder, raw);

		// An envelope may hold no key bytes at all, rejecting that is up to
		// the caller.
		assert_eq!(decode_envelope(&hex!("ed01"))?, (0xed, [0u8; 0].as_slice()));
		Ok(())
	}

	#[test]
	fn test_envelope_malformed_varint() {
		for envelope in [[0u8; 0].as_slice(), &hex!("85"), &hex!("ed8100")] {
			let result = decode_envelope(envelope);
			assert!(
				matches!(result, Err(Error::MalformedVarint(_))),
				"unexpected result for {envelope:x?}: {result:?}"
			);
		}
	}
}
