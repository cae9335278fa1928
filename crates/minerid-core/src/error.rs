//! Miner info reference decoding errors.

use thiserror::Error;

/// Reasons a script fails to decode as a miner info reference.
///
/// Each variant names the first grammar constraint the script violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MinerInfoError {
    /// The script does not start with the miner ID protocol prefix.
    #[error("script is not a miner ID protocol script")]
    InvalidProtocolId,
    /// The script ended before a declared field was complete.
    #[error("script too short")]
    ScriptTooShort,
    /// The version byte is not a supported script version.
    #[error("unsupported script version")]
    ScriptVersionUnsupported,
    /// The declared txid length is not 32.
    #[error("invalid miner info txid length")]
    InvalidTxidLen,
    /// The declared modified merkle root length is not 32.
    #[error("invalid modified merkle root length")]
    InvalidMmRootLen,
    /// The declared previous block hash length is not 32.
    #[error("invalid previous block hash length")]
    InvalidPrevBlockHashLen,
    /// The declared signature length is outside the accepted range.
    #[error("invalid block bind signature length")]
    InvalidSigLen,
}
