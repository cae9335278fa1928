//! Block binding carried by a miner info reference.
//!
//! The block bind ties a miner info transaction to the block it was mined in:
//! the miner signs the modified merkle root together with the previous block
//! hash, and the signature travels in the reference script.

use alloc::vec::Vec;
use core::fmt;

use crate::hash::{sha256, Hash256, HASH_SIZE};

/// Modified merkle root, previous block hash and the miner's signature over both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockBind {
    modified_merkle_root: Hash256,
    prev_block_hash: Hash256,
    #[cfg_attr(feature = "serde", serde(with = "hex"))]
    sig: Vec<u8>,
}

impl BlockBind {
    /// Create a new block bind.
    pub fn new(
        modified_merkle_root: Hash256,
        prev_block_hash: Hash256,
        sig: impl Into<Vec<u8>>,
    ) -> Self {
        BlockBind {
            modified_merkle_root,
            prev_block_hash,
            sig: sig.into(),
        }
    }

    pub fn modified_merkle_root(&self) -> &Hash256 {
        &self.modified_merkle_root
    }

    pub fn prev_block_hash(&self) -> &Hash256 {
        &self.prev_block_hash
    }

    /// The raw (DER-encoded) signature bytes.
    pub fn sig(&self) -> &[u8] {
        &self.sig
    }

    /// The message the signature commits to:
    /// `modified_merkle_root || prev_block_hash`, both in internal byte order.
    pub fn signed_message(&self) -> [u8; 2 * HASH_SIZE] {
        let mut message = [0u8; 2 * HASH_SIZE];
        message[..HASH_SIZE].copy_from_slice(self.modified_merkle_root.as_bytes());
        message[HASH_SIZE..].copy_from_slice(self.prev_block_hash.as_bytes());
        message
    }

    /// SHA256 of [`BlockBind::signed_message`], the digest a verifier checks
    /// the signature against.
    pub fn message_digest(&self) -> Hash256 {
        sha256(&self.signed_message())
    }

    /// Check the signature with an externally supplied verifier.
    pub fn verify_with<V: BlockBindVerifier + ?Sized>(&self, verifier: &V) -> bool {
        verifier.verify(self)
    }
}

impl fmt::Display for BlockBind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "modified_merkle_root: {}, prev_block_hash: {}, sig: {}",
            self.modified_merkle_root,
            self.prev_block_hash,
            hex::encode(&self.sig)
        )
    }
}

/// Signature check for a [`BlockBind`].
///
/// Key material and the signature scheme belong to the surrounding miner ID
/// protocol; this crate only hands over the fields. Any `Fn(&BlockBind) -> bool`
/// is a verifier.
pub trait BlockBindVerifier {
    /// Returns `true` if the block bind's signature is valid.
    fn verify(&self, block_bind: &BlockBind) -> bool;
}

impl<F> BlockBindVerifier for F
where
    F: Fn(&BlockBind) -> bool,
{
    fn verify(&self, block_bind: &BlockBind) -> bool {
        self(block_bind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn block_bind(mm_root: u8, prev_hash: u8, sig: u8) -> BlockBind {
        BlockBind::new(
            Hash256::new([mm_root; 32]),
            Hash256::new([prev_hash; 32]),
            vec![sig; 70],
        )
    }

    #[test]
    fn test_block_bind_construction() {
        let sig = vec![4u8; 71];
        let bb = BlockBind::new(Hash256::new([2u8; 32]), Hash256::new([3u8; 32]), sig.clone());

        assert_eq!(bb.modified_merkle_root(), &Hash256::new([2u8; 32]));
        assert_eq!(bb.prev_block_hash(), &Hash256::new([3u8; 32]));
        assert_eq!(bb.sig(), sig.as_slice());
        assert_eq!(bb.sig().iter().count(), 71);
    }

    #[test]
    fn test_block_bind_equality() {
        let a = block_bind(2, 3, 4);
        assert_eq!(a, a.clone());
        assert_eq!(a, block_bind(2, 3, 4));

        assert_ne!(a, block_bind(6, 3, 4));
        assert_ne!(a, block_bind(2, 7, 4));
        assert_ne!(a, block_bind(2, 3, 8));

        // Same bytes, different length
        let longer = BlockBind::new(Hash256::new([2u8; 32]), Hash256::new([3u8; 32]), vec![4u8; 71]);
        assert_ne!(a, longer);
    }

    #[test]
    fn test_signed_message_layout() {
        let bb = block_bind(0xaa, 0xbb, 0);
        let message = bb.signed_message();

        assert_eq!(&message[..32], &[0xaau8; 32]);
        assert_eq!(&message[32..], &[0xbbu8; 32]);
        assert_eq!(bb.message_digest(), sha256(&message));
    }

    #[test]
    fn test_verify_with_closure() {
        let bb = block_bind(2, 3, 4);
        let expected_digest = bb.message_digest();

        let accept = |b: &BlockBind| b.message_digest() == expected_digest && b.sig().len() == 70;
        assert!(bb.verify_with(&accept));

        let reject = |_: &BlockBind| false;
        assert!(!bb.verify_with(&reject));
        assert!(!block_bind(9, 3, 4).verify_with(&accept));
    }

    #[test]
    fn test_display() {
        let bb = BlockBind::new(Hash256::ZERO, Hash256::new([0x11; 32]), vec![0xab, 0xcd]);
        let rendered = bb.to_string();

        assert!(rendered.starts_with(&alloc::format!("modified_merkle_root: {}", "0".repeat(64))));
        assert!(rendered.contains(&alloc::format!("prev_block_hash: {}", "11".repeat(32))));
        assert!(rendered.ends_with("sig: abcd"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let bb = BlockBind::new(Hash256::new([1u8; 32]), Hash256::new([2u8; 32]), vec![0xde, 0xad]);
        let json = serde_json::to_value(&bb).unwrap();

        assert_eq!(json["sig"], "dead");
        assert_eq!(json["prev_block_hash"], "02".repeat(32));

        let back: BlockBind = serde_json::from_value(json).unwrap();
        assert_eq!(back, bb);
    }
}
