//! Key types for AES-128.

use crate::block::Block;
use crate::error::{Error, Input, Result};

/// Size of an AES-128 cipher key in bytes.
pub const KEY_SIZE: usize = 16;
/// Number of rounds in AES-128.
pub const NUM_ROUNDS: usize = 10;
/// Size of the flattened key schedule (11 round keys).
pub const EXPANDED_KEY_SIZE: usize = KEY_SIZE * (NUM_ROUNDS + 1);

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl Aes128Key {
    /// Borrows the raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    /// Keys of any length other than 16 bytes are rejected, never truncated or padded.
    fn try_from(value: &[u8]) -> Result<Self> {
        <[u8; KEY_SIZE]>::try_from(value)
            .map(Self)
            .map_err(|_| Error::invalid_length(Input::Key, value.len()))
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; NUM_ROUNDS + 1]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Iterates over the round keys in encryption order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Block> + ExactSizeIterator {
        self.0.iter()
    }

    /// Flattens the schedule into its 176-byte wire layout.
    pub fn to_bytes(&self) -> [u8; EXPANDED_KEY_SIZE] {
        let mut out = [0u8; EXPANDED_KEY_SIZE];
        for (chunk, round_key) in out.chunks_exact_mut(KEY_SIZE).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }
}
