//! ECDSA public-key recovery over secp256k1.
//!
//! Given the signed digest and a decoded `(r, s, recovery_id)` triple, this
//! reconstructs the exact public key that produced the signature. A bug here
//! does not fail loudly: it recovers a different but plausible-looking
//! point, so correctness is pinned by known signature/address vectors in
//! the tests rather than by "it ran".

use crate::{signature::RecoverableSignature, RecoverError};
use alloy_primitives::{hex, keccak256, Address, B256};
use core::fmt;
use k256::{
    elliptic_curve::{
        group::Group,
        ops::{Invert, LinearCombination, Reduce},
        point::DecompressPoint,
        sec1::ToEncodedPoint,
        subtle::Choice,
        PrimeField,
    },
    AffinePoint, FieldBytes, ProjectivePoint, Scalar, U256,
};

/// A recovered secp256k1 public key. Never the point at infinity.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(AffinePoint);

impl PublicKey {
    /// The 64-byte `x || y` coordinate encoding, both coordinates
    /// big-endian, without the leading SEC1 `0x04` tag byte.
    pub fn to_bytes(&self) -> [u8; 64] {
        let point = self.0.to_encoded_point(false);
        let mut out = [0u8; 64];
        out.copy_from_slice(&point.as_bytes()[1..]);
        out
    }

    /// Derives the account address: the low 20 bytes of the keccak-256
    /// digest of the 64-byte coordinate encoding.
    pub fn to_address(&self) -> Address {
        let hash = keccak256(self.to_bytes());
        Address::from_slice(&hash[12..])
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({self})")
    }
}

/// Recovers the public key that produced `sig` over `digest`.
///
/// Standard ECDSA recovery:
///
/// 1. Reconstruct the candidate point `R` whose x-coordinate is `r` and
///    whose y-parity is the recovery id. Fails with
///    [`RecoverError::PointNotOnCurve`] if no such point exists.
/// 2. Interpret `digest` as the scalar `z`, big-endian, reduced mod the
///    group order if it exceeds it (reduced, not rejected).
/// 3. Compute `u1 = -z * r^-1` and `u2 = s * r^-1` mod the group order.
/// 4. `Q = u1 * G + u2 * R`; the point at infinity fails with
///    [`RecoverError::RecoveryFailed`], anything else is the key.
///
/// Only the two-way `{0, 1}` recovery id convention is supported; signatures
/// whose `r` overflowed the group order during signing are not
/// reconstructible here.
#[allow(non_snake_case)]
pub fn recover_public_key(
    digest: &B256,
    sig: &RecoverableSignature,
) -> Result<PublicKey, RecoverError> {
    let r = sig.r();
    let s = sig.s();

    let R = Option::<AffinePoint>::from(AffinePoint::decompress(
        &r.to_repr(),
        Choice::from(sig.recovery_id()),
    ))
    .ok_or(RecoverError::PointNotOnCurve)?;

    let z = <Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(digest.0));

    // r is nonzero, so the inversion cannot fail.
    let r_inv = *r.invert();
    let u1 = -(r_inv * z);
    let u2 = r_inv * *s;
    let Q = ProjectivePoint::lincomb(
        &ProjectivePoint::GENERATOR,
        &u1,
        &ProjectivePoint::from(R),
        &u2,
    );

    if Q.is_identity().into() {
        return Err(RecoverError::RecoveryFailed);
    }
    Ok(PublicKey(Q.to_affine()))
}
