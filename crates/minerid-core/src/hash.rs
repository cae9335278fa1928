//! 256-bit hashes and SHA256 helpers.

use alloc::string::String;
use core::array::TryFromSliceError;
use core::fmt;

use sha2::{Digest, Sha256};

/// Size of a hash in bytes.
pub const HASH_SIZE: usize = 32;

/// A 256-bit hash (txid, merkle root, block hash) in internal byte order.
///
/// Bitcoin displays hashes in reverse byte order, so `Display` and
/// [`Hash256::from_display_hex`] both work on the reversed form.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hash256([u8; HASH_SIZE]);

impl Hash256 {
    /// The all-zero hash.
    pub const ZERO: Hash256 = Hash256([0u8; HASH_SIZE]);

    /// Wrap 32 bytes given in internal byte order.
    pub const fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Hash256(bytes)
    }

    /// The hash bytes in internal byte order.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Convert the hash to its display format (reversed hex).
    pub fn to_display_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }

    /// Parse a hash from its display format (reversed hex).
    pub fn from_display_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; HASH_SIZE];
        hex::decode_to_slice(s, &mut bytes)?;
        bytes.reverse();
        Ok(Hash256(bytes))
    }
}

impl From<[u8; HASH_SIZE]> for Hash256 {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Hash256(bytes)
    }
}

impl From<Hash256> for [u8; HASH_SIZE] {
    fn from(hash: Hash256) -> Self {
        hash.0
    }
}

impl TryFrom<&[u8]> for Hash256 {
    type Error = TryFromSliceError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; HASH_SIZE]>::try_from(bytes).map(Hash256)
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Displayed hash is byte-reversed
        for byte in self.0.iter().rev() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Hash256 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Hash256 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash256::from_display_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Single SHA256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> Hash256 {
    let hash = Sha256::digest(data);
    let mut result = [0u8; HASH_SIZE];
    result.copy_from_slice(&hash);
    Hash256(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential() -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = i as u8;
        }
        bytes
    }

    #[test]
    fn test_sha256() {
        let hash = sha256(b"hello");

        let expected = hex::decode(
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        ).unwrap();

        assert_eq!(hash.as_bytes().as_slice(), expected.as_slice());
    }

    #[test]
    fn test_display_is_reversed() {
        let hash = Hash256::new(sequential());
        let display = hash.to_string();

        assert!(display.starts_with("1f1e1d"));
        assert!(display.ends_with("020100"));
        assert_eq!(display, hash.to_display_hex());
    }

    #[test]
    fn test_display_hex_roundtrip() {
        let hash = Hash256::new(sequential());
        let parsed = Hash256::from_display_hex(&hash.to_display_hex()).unwrap();
        assert_eq!(parsed, hash);
        assert_eq!(parsed.as_bytes()[0], 0x00);
        assert_eq!(parsed.as_bytes()[31], 0x1f);
    }

    #[test]
    fn test_from_display_hex_wrong_length() {
        assert_eq!(
            Hash256::from_display_hex("abcd"),
            Err(hex::FromHexError::InvalidStringLength)
        );
        assert_eq!(
            Hash256::from_display_hex("abc"),
            Err(hex::FromHexError::OddLength)
        );
    }

    #[test]
    fn test_try_from_slice() {
        let bytes = sequential();
        assert_eq!(Hash256::try_from(&bytes[..]).unwrap(), Hash256::new(bytes));
        assert!(Hash256::try_from(&bytes[..31]).is_err());
        assert!(Hash256::try_from(&[0u8; 33][..]).is_err());
    }

    #[test]
    fn test_equality_is_bytewise() {
        let mut bytes = [7u8; 32];
        let a = Hash256::from(bytes);
        bytes[31] = 8;
        let b = Hash256::from(bytes);

        assert_eq!(a, Hash256::new([7u8; 32]));
        assert_ne!(a, b);
        assert_ne!(Hash256::ZERO, a);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_display_hex() {
        let hash = Hash256::new(sequential());
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, alloc::format!("\"{}\"", hash));

        let back: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);

        assert!(serde_json::from_str::<Hash256>("\"00ff\"").is_err());
    }
}
