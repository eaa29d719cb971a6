//! Error taxonomy for signature decoding and public-key recovery.

use core::fmt;

/// Failure modes of signature decoding and public-key recovery.
///
/// The first three variants are produced by the signature codec, the last
/// two by curve recovery, so callers can tell a signature that is garbage
/// on the wire from one that is well formed but does not recover to a
/// valid key. No stage downgrades another stage's error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecoverError {
    /// The signature is not exactly 65 bytes, or its hex form does not decode.
    MalformedSignature,
    /// `r` or `s` is zero or not below the curve order.
    InvalidScalar,
    /// The trailing indicator byte matches none of the `{0, 1}`, `{27, 28}`
    /// or EIP-155 (`>= 35`) conventions.
    InvalidRecoveryId,
    /// No curve point exists with the signature's `r` as its x-coordinate.
    PointNotOnCurve,
    /// Reconstruction yielded the point at infinity.
    RecoveryFailed,
}

impl core::error::Error for RecoverError {}

impl fmt::Display for RecoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MalformedSignature => "malformed signature, expected 65 bytes of r || s || v",
            Self::InvalidScalar => "signature scalar is zero or exceeds the curve order",
            Self::InvalidRecoveryId => "unrecognized recovery indicator byte",
            Self::PointNotOnCurve => "signature r is not the x-coordinate of a curve point",
            Self::RecoveryFailed => "public key recovery yielded the point at infinity",
        };
        f.write_str(s)
    }
}
