//! Miner ID protocol definitions and constants.

use core::ops::RangeInclusive;

/// `OP_FALSE` (push empty byte vector).
pub const OP_FALSE: u8 = 0x00;

/// `OP_PUSHBYTES_1`: the next byte is data.
pub const OP_PUSHBYTES_1: u8 = 0x01;

/// `OP_PUSHBYTES_4`: the next four bytes are data.
pub const OP_PUSHBYTES_4: u8 = 0x04;

/// `OP_RETURN` marks an output as provably unspendable.
pub const OP_RETURN: u8 = 0x6a;

/// Miner ID protocol identifier.
pub const PROTOCOL_ID: [u8; 4] = [0x60, 0x1d, 0xfa, 0xce];

/// Leading bytes of every miner info reference script:
/// `OP_FALSE OP_RETURN <protocol id> OP_PUSHBYTES_1`, followed by the version.
pub const MINER_INFO_REF_PREFIX: [u8; 8] = [
    OP_FALSE,
    OP_RETURN,
    OP_PUSHBYTES_4,
    PROTOCOL_ID[0],
    PROTOCOL_ID[1],
    PROTOCOL_ID[2],
    PROTOCOL_ID[3],
    OP_PUSHBYTES_1,
];

/// Declared length of the txid, modified merkle root and previous block hash pushes.
pub const HASH_PUSH_LEN: u8 = 32;

/// Shortest accepted block bind signature (DER-encoded ECDSA).
pub const MIN_SIG_LEN: u8 = 70;

/// Longest accepted block bind signature (DER-encoded ECDSA).
pub const MAX_SIG_LEN: u8 = 72;

/// Accepted declared lengths for the block bind signature push.
pub const SIG_LEN_RANGE: RangeInclusive<u8> = MIN_SIG_LEN..=MAX_SIG_LEN;

/// Miner info reference script version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptVersion {
    /// Version 0, the only one currently defined.
    V0,
}

impl ScriptVersion {
    /// Parse a version from its script byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(ScriptVersion::V0),
            _ => None,
        }
    }

    /// Get the script byte for this version.
    pub fn as_byte(&self) -> u8 {
        match self {
            ScriptVersion::V0 => 0,
        }
    }
}

impl core::fmt::Display for ScriptVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "v{}", self.as_byte())
    }
}

impl Default for ScriptVersion {
    fn default() -> Self {
        ScriptVersion::V0
    }
}
