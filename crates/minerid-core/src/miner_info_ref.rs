//! Miner info reference decoding and encoding.
//!
//! A miner info reference is an `OP_FALSE OP_RETURN` output in a coinbase
//! transaction pointing at the miner info transaction (by txid) and binding
//! that transaction to the block through a [`BlockBind`]:
//!
//! ```text
//! OP_FALSE OP_RETURN 0x04 0x601dface 0x01 <version>
//!     0x20 <txid> 0x20 <modified merkle root> 0x20 <prev block hash>
//!     <70..=72> <signature>
//! ```

use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, trace};

use crate::block_bind::{BlockBind, BlockBindVerifier};
use crate::error::MinerInfoError;
use crate::hash::{Hash256, HASH_SIZE};
use crate::protocol::{ScriptVersion, MINER_INFO_REF_PREFIX, SIG_LEN_RANGE};
use crate::script::{push_data, ScriptReader};

/// A decoded miner info reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinerInfoRef {
    txid: Hash256,
    block_bind: BlockBind,
}

impl MinerInfoRef {
    /// Create a new miner info reference.
    pub fn new(txid: Hash256, block_bind: BlockBind) -> Self {
        MinerInfoRef { txid, block_bind }
    }

    /// Txid of the miner info transaction.
    pub fn txid(&self) -> &Hash256 {
        &self.txid
    }

    pub fn block_bind(&self) -> &BlockBind {
        &self.block_bind
    }

    /// Check the block bind signature with an externally supplied verifier.
    pub fn verify_block_bind<V: BlockBindVerifier + ?Sized>(&self, verifier: &V) -> bool {
        self.block_bind.verify_with(verifier)
    }

    /// Serialize the reference as a version 0 miner info reference script.
    ///
    /// Fails with [`MinerInfoError::InvalidSigLen`] if the signature length
    /// is one the decoder would reject.
    pub fn to_script(&self) -> Result<Vec<u8>, MinerInfoError> {
        let sig = self.block_bind.sig();
        if !u8::try_from(sig.len()).is_ok_and(|len| SIG_LEN_RANGE.contains(&len)) {
            return Err(MinerInfoError::InvalidSigLen);
        }

        let mut script =
            Vec::with_capacity(MINER_INFO_REF_PREFIX.len() + 1 + 3 * (1 + HASH_SIZE) + 1 + sig.len());

        script.extend_from_slice(&MINER_INFO_REF_PREFIX);
        script.push(ScriptVersion::V0.as_byte());

        push_data(&mut script, self.txid.as_bytes());
        push_data(&mut script, self.block_bind.modified_merkle_root().as_bytes());
        push_data(&mut script, self.block_bind.prev_block_hash().as_bytes());
        push_data(&mut script, sig);

        Ok(script)
    }
}

impl fmt::Display for MinerInfoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "txid: {}, {}", self.txid, self.block_bind)
    }
}

/// Parse a miner info reference from an output script.
///
/// Checks, in order: protocol prefix, version, then the declared length of
/// the txid, modified merkle root, previous block hash and signature pushes.
/// The first violated constraint is returned. Bytes after the signature are
/// ignored.
pub fn parse_miner_info_ref(script: &[u8]) -> Result<MinerInfoRef, MinerInfoError> {
    let result = decode(script);

    match &result {
        Ok(miner_info_ref) => trace!(txid = %miner_info_ref.txid(), "parsed miner info reference"),
        Err(err) => debug!(%err, script_len = script.len(), "rejected miner info reference script"),
    }

    result
}

fn decode(script: &[u8]) -> Result<MinerInfoRef, MinerInfoError> {
    let mut reader = ScriptReader::new(script);

    if !reader.consume_prefix(&MINER_INFO_REF_PREFIX) {
        return Err(MinerInfoError::InvalidProtocolId);
    }

    let version = reader.read_byte()?;
    ScriptVersion::from_byte(version).ok_or(MinerInfoError::ScriptVersionUnsupported)?;

    let txid = reader.read_hash(MinerInfoError::InvalidTxidLen)?;
    let modified_merkle_root = reader.read_hash(MinerInfoError::InvalidMmRootLen)?;
    let prev_block_hash = reader.read_hash(MinerInfoError::InvalidPrevBlockHashLen)?;
    let sig = reader.read_push(SIG_LEN_RANGE, MinerInfoError::InvalidSigLen)?;

    if reader.remaining() > 0 {
        trace!(trailing = reader.remaining(), "ignoring bytes after block bind signature");
    }

    Ok(MinerInfoRef::new(
        txid,
        BlockBind::new(modified_merkle_root, prev_block_hash, sig),
    ))
}
