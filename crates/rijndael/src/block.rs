//! Block representation helpers.

use crate::error::{Error, Input, Result};

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes, stored column-major: byte `i` is row `i % 4`, column `i / 4`.
pub type Block = [u8; BLOCK_SIZE];

/// Index of the state byte at `(row, col)`.
#[inline]
pub const fn state_index(row: usize, col: usize) -> usize {
    col * 4 + row
}

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies `bytes` into a block, rejecting anything that is not exactly 16 bytes long.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    Block::try_from(bytes).map_err(|_| Error::invalid_length(Input::Block, bytes.len()))
}
