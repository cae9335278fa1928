//! Miner info reference decoding for the miner ID protocol.
//!
//! This crate provides pure Rust implementations of:
//! - Decoding and validating miner info reference scripts
//! - The `MinerInfoRef` and `BlockBind` value types
//! - Encoding a reference back to its script form
//! - A hook for plugging in block bind signature verification
//!
//! Signature verification itself, and locating the script inside a
//! transaction, are left to the caller.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod block_bind;
pub mod error;
pub mod hash;
pub mod miner_info_ref;
pub mod protocol;
mod script;

pub use block_bind::{BlockBind, BlockBindVerifier};
pub use error::MinerInfoError;
pub use hash::{sha256, Hash256};
pub use miner_info_ref::{parse_miner_info_ref, MinerInfoRef};
pub use protocol::ScriptVersion;
