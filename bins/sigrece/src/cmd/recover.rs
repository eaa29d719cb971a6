use alloy_primitives::{hex, Address};
use clap::Parser;
use sigrec::RecoverError;

/// Recover subcommand: recovers the signer of an EIP-191 personal message.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Message that was signed, as UTF-8 text
    message: String,
    /// 65-byte signature as 0x-prefixed hex
    signature: String,
    /// Interpret MESSAGE as hex-encoded raw bytes instead of UTF-8 text
    #[arg(long)]
    hex_message: bool,
    /// Expected signer account; fail if the recovered address differs
    #[arg(long)]
    signer: Option<Address>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid hex message: {0}")]
    MessageHex(#[from] hex::FromHexError),
    #[error(transparent)]
    Recover(#[from] RecoverError),
    #[error("recovered {recovered}, expected signer {expected}")]
    SignerMismatch {
        recovered: Address,
        expected: Address,
    },
}

impl Cmd {
    /// Runs the recover command.
    pub fn run(&self) -> Result<(), Error> {
        let message = if self.hex_message {
            hex::decode(&self.message)?
        } else {
            self.message.clone().into_bytes()
        };

        let recovered = sigrec::recover(&message, self.signature.as_str())?;

        println!("digest     : {}", sigrec::eip191::digest(&message));
        println!("public key : {}", recovered.public_key);
        println!("address    : {}", recovered.address.to_checksum(None));

        if let Some(expected) = self.signer {
            if recovered.address != expected {
                return Err(Error::SignerMismatch {
                    recovered: recovered.address,
                    expected,
                });
            }
        }
        Ok(())
    }
}
