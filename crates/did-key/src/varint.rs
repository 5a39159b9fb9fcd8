//! The [unsigned-varint] encoding used by multiformats.
//!
//! Same as unsigned LEB128, except that encodings are limited to
//! [`MAX_LEN`] bytes and must be minimal.
//!
//! [unsigned-varint]: https://github.com/multiformats/unsigned-varint

/// bitmask for 7 least significant bits
const LSB_7: u8 = u8::MAX / 2;
/// bitmask for most significant bit
const MSB: u8 = !LSB_7;

/// Maximum number of bytes in a varint, which gives 63 bits of payload.
pub const MAX_LEN: usize = 9;

#[inline]
const fn msb_is_1(val: u8) -> bool {
	val & MSB == MSB
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub struct VarintEncoding {
	buf: [u8; MAX_LEN],
	len: u8,
}

impl VarintEncoding {
	pub const fn as_slice(&self) -> &[u8] {
		self.buf.split_at(self.len as usize).0
	}
}

impl AsRef<[u8]> for VarintEncoding {
	fn as_ref(&self) -> &[u8] {
		self.as_slice()
	}
}

/// Encodes a value as a varint.
///
/// Panics if `value` needs more than 63 bits, which would not fit in
/// [`MAX_LEN`] bytes. Every multicodec is far below that.
pub const fn encode_varint(value: u64) -> VarintEncoding {
	assert!(value < (1 << 63), "value is too large for an unsigned-varint");
	let mut buf = [0; MAX_LEN];
	let mut remaining = value;
	let mut len = 0;
	// No for loops in const fn :(
	loop {
		let chunk = (remaining as u8) & LSB_7;
		remaining >>= 7;
		if remaining == 0 {
			buf[len] = chunk;
			len += 1;
			break;
		}
		buf[len] = chunk | MSB;
		len += 1;
	}

	VarintEncoding {
		buf,
		len: len as u8,
	}
}

/// Decodes a varint from the front of `encoded`.
///
/// Returns the value along with the number of bytes it occupied. Bytes after
/// the varint are ignored.
pub const fn decode_varint(encoded: &[u8]) -> Result<(u64, usize), DecodeError> {
	let mut result: u64 = 0;
	let mut idx = 0;
	while idx < MAX_LEN {
		if idx >= encoded.len() {
			return Err(DecodeError::MissingBytes);
		}
		let b = encoded[idx];
		result |= ((b & LSB_7) as u64) << (7 * idx);
		if !msb_is_1(b) {
			// A trailing zero chunk means the same value has a shorter encoding.
			if b == 0 && idx > 0 {
				return Err(DecodeError::NotMinimal);
			}
			return Ok((result, idx + 1));
		}
		idx += 1;
	}
	// We were provided a varint that still wants more bytes after the last
	// one we are allowed to read.
	Err(DecodeError::WouldOverflow)
}

#[derive(thiserror::Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum DecodeError {
	#[error("expected more bytes than what were provided")]
	MissingBytes,
	#[error("the varint was not minimally encoded")]
	NotMinimal,
	#[error(
		"the decoded number is too large to fit into the type without overflowing"
	)]
	WouldOverflow,
}
