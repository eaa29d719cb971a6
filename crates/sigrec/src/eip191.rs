//! EIP-191 personal-message canonicalization and digesting.
//!
//! Before signing, account signers wrap the raw message in the fixed
//! personal-message envelope defined by [EIP-191]. Recovery has to rebuild
//! that envelope byte for byte, otherwise the digest (and with it the
//! recovered key) is wrong in a way nothing downstream can detect.
//!
//! [EIP-191]: https://eips.ethereum.org/EIPS/eip-191

use alloy_primitives::{keccak256, B256};
use std::vec::Vec;

/// Marker prepended to every personal message: the `0x19` version byte
/// followed by the ASCII literal of the personal-sign version.
pub const MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Returns the canonical EIP-191 encoding of `message`:
/// `"\x19Ethereum Signed Message:\n" || ascii-decimal byte length || message`.
///
/// The length is rendered as a plain decimal string with no fixed width and
/// no separator before the payload. It counts bytes, not characters, so
/// multi-byte UTF-8 messages encode with their exact on-wire size. Because
/// the length is bound into the envelope, two distinct messages of
/// different lengths can never alias to the same canonical form.
pub fn encode(message: &[u8]) -> Vec<u8> {
    let len = format!("{}", message.len());
    let mut out = Vec::with_capacity(MESSAGE_PREFIX.len() + len.len() + message.len());
    out.extend_from_slice(MESSAGE_PREFIX);
    out.extend_from_slice(len.as_bytes());
    out.extend_from_slice(message);
    out
}

/// Keccak-256 digest of the canonical encoding of `message`. This is the
/// value the signer actually signed.
pub fn digest(message: &[u8]) -> B256 {
    keccak256(encode(message))
}
