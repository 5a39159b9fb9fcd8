//! Conversion between public keys and [did:key][did-key] identifiers.
//!
//! A `did:key` is a Decentralized Identifier (aka [DID][spec]) whose entire
//! content is a public key. Nothing needs to be looked up to resolve it: the
//! identifier itself says which signature algorithm the key belongs to, and
//! carries the raw key material.
//!
//! ```text
//! did:key:z6MkeTG3bFFSLYVU7VqhgZxqr6YzpaGrQtFMh1uvqGy1vDnP
//! ^^^^^^^^ ^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
//!  prefix  |  base58-btc(varint(multicodec) || raw key bytes)
//!          multibase selector for base58-btc
//! ```
//!
//! Supported algorithms are [`KeyAlgo::Ed25519`], [`KeyAlgo::Rsa`] and
//! [`KeyAlgo::Secp256k1`]. Parsing validates eagerly, so a [`DidKey`] always
//! holds key bytes of the right shape for its algorithm. Turning those bytes
//! into something a signature verifier can use is done with
//! [`DidKey::verification_key`].
//!
//! # Example
//!
//! ```
//! use did_key::{DidKey, KeyAlgo};
//!
//! let did: DidKey = "did:key:z6MkeTG3bFFSLYVU7VqhgZxqr6YzpaGrQtFMh1uvqGy1vDnP"
//! 	.parse()
//! 	.unwrap();
//! assert_eq!(did.algo(), KeyAlgo::Ed25519);
//! assert_eq!(did.raw(), [0u8; 32].as_slice());
//! ```
//!
//! [did-key]: https://w3c-ccg.github.io/did-method-key/
//! [spec]: https://www.w3.org/TR/did-core/

#![forbid(unsafe_code)]

pub mod crypto;
pub mod envelope;
pub mod key_algos;
pub mod methods;
pub mod varint;

mod error;

pub use crate::crypto::VerificationKey;
pub use crate::error::Error;
pub use crate::key_algos::KeyAlgo;
pub use crate::methods::key::DidKey;
