use alloy_primitives::hex;
use clap::Parser;

/// Digest subcommand: prints the EIP-191 canonical digest of a message
/// without recovering anything.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Message to digest, as UTF-8 text
    message: String,
    /// Interpret MESSAGE as hex-encoded raw bytes instead of UTF-8 text
    #[arg(long)]
    hex_message: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid hex message: {0}")]
    MessageHex(#[from] hex::FromHexError),
}

impl Cmd {
    /// Runs the digest command.
    pub fn run(&self) -> Result<(), Error> {
        let message = if self.hex_message {
            hex::decode(&self.message)?
        } else {
            self.message.clone().into_bytes()
        };
        println!("length : {} bytes", message.len());
        println!("digest : {}", sigrec::eip191::digest(&message));
        Ok(())
    }
}
