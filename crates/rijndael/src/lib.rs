//! Self-contained AES-128 block cipher.
//!
//! This crate follows the FIPS-197 specification and provides:
//! - The S-box, inverse S-box and round-constant tables.
//! - Key expansion into 11 round keys.
//! - The eight round primitives, each usable on its own.
//! - Single-block encryption and decryption, either from raw slices or from a
//!   pre-expanded [`RoundKeys`] schedule.
//!
//! Field arithmetic is branch-free, but S-box substitution uses table lookups, so the
//! implementation should not be treated as side-channel hardened.
//!
//! ```
//! let key = [0u8; 16];
//! let ct = rijndael::encrypt_block(b"sixteen byte msg", &key)?;
//! assert_eq!(&rijndael::decrypt_block(&ct, &key)?, b"sixteen byte msg");
//! # Ok::<(), rijndael::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod api;
mod block;
mod cipher;
mod error;
mod key;
mod round;
mod sbox;

pub use crate::api::{decrypt_block, encrypt_block, expand_key, Aes128};
pub use crate::block::{block_from_slice, state_index, xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{
    decrypt_block as decrypt_with, encrypt_block as encrypt_with, expand_key as expand_key_with,
};
pub use crate::error::{Error, Input, Result};
pub use crate::key::{Aes128Key, RoundKeys, EXPANDED_KEY_SIZE, KEY_SIZE, NUM_ROUNDS};
pub use crate::round::{
    add_round_key, gf_mul, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns,
    shift_rows, sub_bytes, xtime,
};
pub use crate::sbox::{inv_sbox, sbox};
