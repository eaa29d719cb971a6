//! # sigrec
//!
//! Recovery of secp256k1 signer keys from EIP-191 personal-message
//! signatures: given a message and the 65-byte signature an account signer
//! produced over it, reconstruct the exact public key and the account
//! address it belongs to, without any access to the signer.
//!
//! The pipeline is a chain of pure functions with no shared state, safe to
//! call concurrently from any number of threads:
//!
//! ```text
//! message  --eip191-->  digest ----+
//! signature --codec--> (r, s, id) -+--> recover --> (PublicKey, Address)
//! ```
//!
//! ```
//! use sigrec::RecoverError;
//!
//! let sig = "0xfa02e8586f024c26dc34b262e2f768a3aba8b69d8d16b182d97e12d6a83fc0bf\
//!            1bec454cdf875e77a26b82138e567a019cafe4310f3ebf7e64db19fb0e32d2db00";
//! let recovered = sigrec::recover(b"We built this city.", sig)?;
//! assert_eq!(
//!     recovered.address.to_string().to_lowercase(),
//!     "0xb009cd53957c0d991cabe184e884258a1d7b77d9",
//! );
//! # Ok::<(), RecoverError>(())
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod eip191;
mod error;
pub mod secp256k1;
pub mod signature;

pub use error::RecoverError;
pub use secp256k1::{recover_public_key, PublicKey};
pub use signature::{RecoverableSignature, SignatureInput, SIGNATURE_LEN};

use alloy_primitives::Address;

/// Outcome of a successful recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recovered {
    /// The public key that produced the signature.
    pub public_key: PublicKey,
    /// Account address derived from the public key.
    pub address: Address,
}

/// Recovers the signer of an EIP-191 personal message.
///
/// `signature` is either a `0x`-prefixed hex string or the raw 65 wire
/// bytes, see [`SignatureInput`]. The first error of any stage is returned
/// as-is; [`RecoverError`] variants identify the failing stage.
pub fn recover<'a>(
    message: &[u8],
    signature: impl Into<SignatureInput<'a>>,
) -> Result<Recovered, RecoverError> {
    let sig = RecoverableSignature::parse(signature)?;
    let digest = eip191::digest(message);
    let public_key = recover_public_key(&digest, &sig)?;
    Ok(Recovered {
        public_key,
        address: public_key.to_address(),
    })
}
