//! Wire decoding and normalization of 65-byte recoverable signatures.
//!
//! Signers emit `r || s || v` where `v` is the recovery indicator. Three
//! wire conventions for `v` are in circulation and all of them are folded
//! into the canonical `{0, 1}` domain here, in exactly one place; the rest
//! of the crate never sees anything else.

use crate::RecoverError;
use alloy_primitives::hex;
use core::fmt;
use k256::{elliptic_curve::PrimeField, NonZeroScalar};

/// Length in bytes of a recoverable signature on the wire: `r || s || v`.
pub const SIGNATURE_LEN: usize = 65;

/// Signature material as supplied by a caller, before any decoding.
///
/// Both forms funnel through [`RecoverableSignature::parse`], so the
/// hex-to-bytes conversion happens once at this boundary instead of being
/// re-inferred at call sites.
#[derive(Clone, Copy, Debug)]
pub enum SignatureInput<'a> {
    /// Hex-encoded signature, with or without a `0x` prefix.
    Hex(&'a str),
    /// Raw signature bytes.
    Raw(&'a [u8]),
}

impl<'a> From<&'a str> for SignatureInput<'a> {
    fn from(hex: &'a str) -> Self {
        Self::Hex(hex)
    }
}

impl<'a> From<&'a [u8]> for SignatureInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Raw(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for SignatureInput<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Raw(bytes.as_slice())
    }
}

/// A decoded and validated recoverable ECDSA signature.
///
/// `r` and `s` are guaranteed nonzero and below the curve order, and the
/// recovery id is canonical `{0, 1}`. Out-of-range components are rejected
/// at decode time, never coerced.
#[derive(Clone, Copy)]
pub struct RecoverableSignature {
    r: NonZeroScalar,
    s: NonZeroScalar,
    recovery_id: u8,
}

// k256 keeps scalars opaque, so render them through their byte repr.
impl fmt::Debug for RecoverableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecoverableSignature")
            .field("r", &hex::encode(self.r.to_repr()))
            .field("s", &hex::encode(self.s.to_repr()))
            .field("recovery_id", &self.recovery_id)
            .finish()
    }
}

impl RecoverableSignature {
    /// Parses a signature from hex text or raw bytes.
    pub fn parse<'a>(input: impl Into<SignatureInput<'a>>) -> Result<Self, RecoverError> {
        match input.into() {
            SignatureInput::Hex(text) => {
                let bytes = hex::decode(text).map_err(|_| RecoverError::MalformedSignature)?;
                Self::from_bytes(&bytes)
            }
            SignatureInput::Raw(bytes) => Self::from_bytes(bytes),
        }
    }

    /// Decodes the 65-byte `r || s || v` wire form.
    pub fn from_bytes(sig: &[u8]) -> Result<Self, RecoverError> {
        let sig: &[u8; SIGNATURE_LEN] =
            sig.try_into().map_err(|_| RecoverError::MalformedSignature)?;
        let r_bytes: [u8; 32] = sig[..32]
            .try_into()
            .map_err(|_| RecoverError::MalformedSignature)?;
        let s_bytes: [u8; 32] = sig[32..64]
            .try_into()
            .map_err(|_| RecoverError::MalformedSignature)?;
        let r = scalar_from_bytes(r_bytes)?;
        let s = scalar_from_bytes(s_bytes)?;
        let recovery_id = normalize_v(sig[64])?;
        Ok(Self { r, s, recovery_id })
    }

    /// The `r` component, nonzero and below the curve order.
    pub fn r(&self) -> NonZeroScalar {
        self.r
    }

    /// The `s` component, nonzero and below the curve order.
    pub fn s(&self) -> NonZeroScalar {
        self.s
    }

    /// Canonical recovery id, `0` or `1`.
    pub fn recovery_id(&self) -> u8 {
        self.recovery_id
    }
}

/// Maps the wire conventions for the recovery indicator onto the canonical
/// `{0, 1}` domain:
///
/// * `{0, 1}` is used as-is,
/// * `{27, 28}` (pre-EIP-155 account signatures) maps to `v - 27`,
/// * `>= 35` (EIP-155 replay-protected, `v = 35 + id + 2 * chain_id`) maps
///   to `(v - 35) % 2`, discarding the embedded chain id.
///
/// Every other value is rejected.
pub fn normalize_v(v: u8) -> Result<u8, RecoverError> {
    match v {
        0 | 1 => Ok(v),
        27 | 28 => Ok(v - 27),
        35.. => Ok((v - 35) % 2),
        _ => Err(RecoverError::InvalidRecoveryId),
    }
}

fn scalar_from_bytes(bytes: [u8; 32]) -> Result<NonZeroScalar, RecoverError> {
    Option::from(NonZeroScalar::from_repr(bytes.into())).ok_or(RecoverError::InvalidScalar)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Valid signature over the EIP-191 digest of "We built this city.".
    const SIG: &str = "0xfa02e8586f024c26dc34b262e2f768a3aba8b69d8d16b182d97e12d6a83fc0bf1bec454cdf875e77a26b82138e567a019cafe4310f3ebf7e64db19fb0e32d2db00";

    /// secp256k1 group order, big-endian.
    const ORDER: [u8; 32] = [
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
        0x41, 0x41,
    ];

    fn valid_bytes() -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out.copy_from_slice(&hex::decode(SIG).unwrap());
        out
    }

    #[test]
    fn hex_and_raw_inputs_decode_identically() {
        let from_hex = RecoverableSignature::parse(SIG).unwrap();
        let unprefixed = RecoverableSignature::parse(&SIG[2..]).unwrap();
        let from_raw = RecoverableSignature::parse(&valid_bytes()).unwrap();
        for sig in [&unprefixed, &from_raw] {
            assert_eq!(from_hex.r().to_repr(), sig.r().to_repr());
            assert_eq!(from_hex.s().to_repr(), sig.s().to_repr());
            assert_eq!(from_hex.recovery_id(), sig.recovery_id());
        }
    }

    #[test]
    fn debug_renders_scalars_as_hex() {
        let sig = RecoverableSignature::parse(SIG).unwrap();
        let rendered = format!("{sig:?}");
        assert!(rendered.contains("fa02e8586f024c26"), "{rendered}");
        assert!(rendered.contains("1bec454cdf875e77"), "{rendered}");
        assert!(rendered.contains("recovery_id: 0"), "{rendered}");
    }

    #[test]
    fn recovery_indicator_conventions() {
        assert_eq!(normalize_v(0).unwrap(), 0);
        assert_eq!(normalize_v(1).unwrap(), 1);
        assert_eq!(normalize_v(27).unwrap(), 0);
        assert_eq!(normalize_v(28).unwrap(), 1);
        // EIP-155: v = 35 + id + 2 * chain_id
        assert_eq!(normalize_v(35).unwrap(), 0);
        assert_eq!(normalize_v(36).unwrap(), 1);
        assert_eq!(normalize_v(37).unwrap(), 0); // chain id 1
        assert_eq!(normalize_v(46).unwrap(), 1);
        for v in [2, 3, 26, 29, 34] {
            assert_eq!(normalize_v(v), Err(RecoverError::InvalidRecoveryId));
        }
    }

    #[test]
    fn rejects_wrong_length_and_bad_hex() {
        // 64 bytes: r and s without the indicator
        assert!(matches!(
            RecoverableSignature::from_bytes(&valid_bytes()[..64]),
            Err(RecoverError::MalformedSignature)
        ));
        assert!(matches!(
            RecoverableSignature::from_bytes(&[0u8; 66]),
            Err(RecoverError::MalformedSignature)
        ));
        assert!(matches!(
            RecoverableSignature::parse("0xnot-hex"),
            Err(RecoverError::MalformedSignature)
        ));
    }

    #[test]
    fn rejects_out_of_range_scalars() {
        let mut zero_r = valid_bytes();
        zero_r[..32].fill(0);
        assert!(matches!(
            RecoverableSignature::from_bytes(&zero_r),
            Err(RecoverError::InvalidScalar)
        ));

        let mut zero_s = valid_bytes();
        zero_s[32..64].fill(0);
        assert!(matches!(
            RecoverableSignature::from_bytes(&zero_s),
            Err(RecoverError::InvalidScalar)
        ));

        let mut s_is_order = valid_bytes();
        s_is_order[32..64].copy_from_slice(&ORDER);
        assert!(matches!(
            RecoverableSignature::from_bytes(&s_is_order),
            Err(RecoverError::InvalidScalar)
        ));

        let mut r_above_order = valid_bytes();
        r_above_order[..32].fill(0xff);
        assert!(matches!(
            RecoverableSignature::from_bytes(&r_above_order),
            Err(RecoverError::InvalidScalar)
        ));
    }

    #[test]
    fn rejects_unknown_indicator() {
        let mut sig = valid_bytes();
        sig[64] = 29;
        assert!(matches!(
            RecoverableSignature::from_bytes(&sig),
            Err(RecoverError::InvalidRecoveryId)
        ));
    }
}
