//! Slice-facing entry points and a keyed cipher object.
//!
//! The free functions here validate lengths and then defer to the infallible,
//! array-typed drivers in [`crate::cipher`].

use crate::block::{block_from_slice, Block};
use crate::cipher;
use crate::error::Result;
use crate::key::{Aes128Key, RoundKeys};

/// Expands a 16-byte key into its 11 round keys.
pub fn expand_key(key: &[u8]) -> Result<RoundKeys> {
    let key = Aes128Key::try_from(key)?;
    Ok(cipher::expand_key(&key))
}

/// Encrypts one 16-byte block under a 16-byte key.
pub fn encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let block = block_from_slice(plaintext)?;
    Ok(Aes128::from_slice(key)?.encrypt_block(&block))
}

/// Decrypts one 16-byte block under a 16-byte key.
pub fn decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let block = block_from_slice(ciphertext)?;
    Ok(Aes128::from_slice(key)?.decrypt_block(&block))
}

/// AES-128 cipher holding an expanded key schedule.
///
/// Expanding once and reusing the schedule avoids repeating key expansion for every block.
/// The value is immutable after construction and can be shared across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Builds a cipher from a typed key.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: cipher::expand_key(key),
        }
    }

    /// Builds a cipher from raw key bytes, rejecting anything but 16 bytes.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        Ok(Self::new(&Aes128Key::try_from(key)?))
    }

    /// Encrypts a single block.
    #[inline]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        cipher::encrypt_block(block, &self.round_keys)
    }

    /// Decrypts a single block.
    #[inline]
    pub fn decrypt_block(&self, block: &Block) -> Block {
        cipher::decrypt_block(block, &self.round_keys)
    }

    /// The expanded schedule backing this cipher.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }
}

impl From<RoundKeys> for Aes128 {
    fn from(round_keys: RoundKeys) -> Self {
        Self { round_keys }
    }
}
