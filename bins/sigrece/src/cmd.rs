pub mod digest;
pub mod recover;

use clap::Parser;

/// Signature recovery command line.
#[derive(Parser, Debug)]
#[command(version, about, infer_subcommands = true)]
pub enum MainCmd {
    /// Recover the signer public key and address of a signed message
    Recover(recover::Cmd),
    /// Print the EIP-191 canonical digest of a message
    Digest(digest::Cmd),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Recover(#[from] recover::Error),
    #[error(transparent)]
    Digest(#[from] digest::Error),
}

impl MainCmd {
    pub fn run(&self) -> Result<(), Error> {
        match self {
            Self::Recover(cmd) => cmd.run().map_err(Into::into),
            Self::Digest(cmd) => cmd.run().map_err(Into::into),
        }
    }
}
