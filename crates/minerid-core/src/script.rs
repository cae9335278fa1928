//! Reading and writing length-prefixed script pushes.

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use crate::error::MinerInfoError;
use crate::hash::Hash256;
use crate::protocol::HASH_PUSH_LEN;

/// Forward-only cursor over a borrowed script.
///
/// Every read is bounds checked and fails with
/// [`MinerInfoError::ScriptTooShort`] instead of running off the end.
pub(crate) struct ScriptReader<'a> {
    script: &'a [u8],
    pos: usize,
}

impl<'a> ScriptReader<'a> {
    pub(crate) fn new(script: &'a [u8]) -> Self {
        ScriptReader { script, pos: 0 }
    }

    /// Number of bytes not yet consumed.
    pub(crate) fn remaining(&self) -> usize {
        self.script.len() - self.pos
    }

    /// Consume `prefix` if the script continues with it.
    pub(crate) fn consume_prefix(&mut self, prefix: &[u8]) -> bool {
        if self.script[self.pos..].starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    pub(crate) fn read_byte(&mut self) -> Result<u8, MinerInfoError> {
        let byte = *self
            .script
            .get(self.pos)
            .ok_or(MinerInfoError::ScriptTooShort)?;
        self.pos += 1;
        Ok(byte)
    }

    pub(crate) fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], MinerInfoError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.script.len())
            .ok_or(MinerInfoError::ScriptTooShort)?;
        let bytes = &self.script[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    /// Read a push whose one-byte length prefix must fall in `accepted`.
    ///
    /// The length is validated before the data is bounds checked, so a
    /// wrong length always surfaces as `len_error`.
    pub(crate) fn read_push(
        &mut self,
        accepted: RangeInclusive<u8>,
        len_error: MinerInfoError,
    ) -> Result<&'a [u8], MinerInfoError> {
        let len = self.read_byte()?;
        if !accepted.contains(&len) {
            return Err(len_error);
        }
        self.read_bytes(len as usize)
    }

    /// Read a 32-byte hash push.
    pub(crate) fn read_hash(&mut self, len_error: MinerInfoError) -> Result<Hash256, MinerInfoError> {
        let bytes = self.read_push(HASH_PUSH_LEN..=HASH_PUSH_LEN, len_error)?;
        Hash256::try_from(bytes).map_err(|_| len_error)
    }
}

/// Append `data` to `script` as a push with a one-byte length prefix.
///
/// Callers must keep `data` within 255 bytes.
pub(crate) fn push_data(script: &mut Vec<u8>, data: &[u8]) {
    debug_assert!(data.len() <= u8::MAX as usize);
    script.push(data.len() as u8);
    script.extend_from_slice(data);
}
