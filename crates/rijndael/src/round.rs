//! AES round transformations and the GF(2^8) arithmetic behind them.
//!
//! Every primitive works in place on a column-major [`Block`]. Field arithmetic is
//! written without data-dependent branches; the S-box itself is a plain table lookup.

use crate::block::{state_index, xor_in_place, Block};
use crate::sbox::{inv_sbox, sbox};

/// Multiplies by `x` in GF(2^8), reducing by `x^8 + x^4 + x^3 + x + 1`.
#[inline]
pub fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ ((byte >> 7).wrapping_neg() & 0x1b)
}

/// Multiplies two field elements in GF(2^8).
#[inline]
pub fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        product ^= a & (b & 1).wrapping_neg();
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` columns.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[state_index(row, col)] = src[state_index(row, (col + row) % 4)];
        }
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r` columns.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[state_index(row, (col + row) % 4)] = src[state_index(row, col)];
        }
    }
}

fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

fn inv_mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = gf_mul(a0, 0x0e) ^ gf_mul(a1, 0x0b) ^ gf_mul(a2, 0x0d) ^ gf_mul(a3, 0x09);
    col[1] = gf_mul(a0, 0x09) ^ gf_mul(a1, 0x0e) ^ gf_mul(a2, 0x0b) ^ gf_mul(a3, 0x0d);
    col[2] = gf_mul(a0, 0x0d) ^ gf_mul(a1, 0x09) ^ gf_mul(a2, 0x0e) ^ gf_mul(a3, 0x0b);
    col[3] = gf_mul(a0, 0x0b) ^ gf_mul(a1, 0x0d) ^ gf_mul(a2, 0x09) ^ gf_mul(a3, 0x0e);
}

fn for_each_column(state: &mut Block, f: fn(&mut [u8; 4])) {
    for chunk in state.chunks_exact_mut(4) {
        let mut column = [chunk[0], chunk[1], chunk[2], chunk[3]];
        f(&mut column);
        chunk.copy_from_slice(&column);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for_each_column(state, mix_single_column);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for_each_column(state, inv_mix_single_column);
}

/// Adds (XORs) a round key into the state. Applying it twice is the identity.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, RngCore};

    fn gf_mul_reference(a: u8, b: u8) -> u8 {
        // Schoolbook carry-less product, then reduce by the AES polynomial.
        let mut wide = 0u16;
        for bit in 0..8 {
            if b & (1 << bit) != 0 {
                wide ^= (a as u16) << bit;
            }
        }
        for bit in (8..16).rev() {
            if wide & (1 << bit) != 0 {
                wide ^= 0x11b << (bit - 8);
            }
        }
        wide as u8
    }

    #[test]
    fn xtime_known_values() {
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
        assert_eq!(xtime(0x47), 0x8e);
        assert_eq!(xtime(0x8e), 0x07);
        assert_eq!(xtime(0x80), 0x1b);
    }

    #[test]
    fn gf_mul_matches_reference_exhaustively() {
        assert_eq!(gf_mul(0x57, 0x83), 0xc1);
        assert_eq!(gf_mul(0x57, 0x13), 0xfe);
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(gf_mul(a, b), gf_mul_reference(a, b), "{a:#04x} * {b:#04x}");
            }
        }
    }

    #[test]
    fn shift_rows_moves_expected_positions() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        assert_eq!(
            state,
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
        inv_shift_rows(&mut state);
        assert_eq!(state, core::array::from_fn(|i| i as u8));
    }

    #[test]
    fn mix_columns_known_column() {
        // Column example from the FIPS-197 round 1 trace.
        let mut state = [
            0xd4, 0xbf, 0x5d, 0x30, 0xe0, 0xb4, 0x52, 0xae, 0xb8, 0x41, 0x11, 0xf1, 0x1e, 0x27,
            0x98, 0xe5,
        ];
        mix_columns(&mut state);
        assert_eq!(
            state,
            [
                0x04, 0x66, 0x81, 0xe5, 0xe0, 0xcb, 0x19, 0x9a, 0x48, 0xf8, 0xd3, 0x7a, 0x28, 0x06,
                0x26, 0x4c,
            ]
        );
    }

    #[test]
    fn inverse_primitives_undo_forward_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);
            let original = block;

            sub_bytes(&mut block);
            inv_sub_bytes(&mut block);
            assert_eq!(block, original);

            shift_rows(&mut block);
            inv_shift_rows(&mut block);
            assert_eq!(block, original);

            mix_columns(&mut block);
            inv_mix_columns(&mut block);
            assert_eq!(block, original);

            let round_key: Block = rng.gen();
            add_round_key(&mut block, &round_key);
            add_round_key(&mut block, &round_key);
            assert_eq!(block, original);
        }
    }

    #[test]
    fn sub_bytes_touches_each_byte_independently() {
        let mut state = [0u8; 16];
        state[3] = 0x53;
        sub_bytes(&mut state);
        assert_eq!(state[3], 0xed);
        assert!(state
            .iter()
            .enumerate()
            .all(|(i, &b)| i == 3 || b == 0x63));
    }
}
