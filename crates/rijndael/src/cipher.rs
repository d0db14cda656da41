//! AES-128 key schedule and the forward/inverse cipher over an expanded schedule.

use crate::block::Block;
use crate::key::{Aes128Key, RoundKeys, KEY_SIZE, NUM_ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::{sbox, RCON};

const WORDS: usize = 4 * (NUM_ROUNDS + 1);

type Word = [u8; 4];

fn rot_word(word: Word) -> Word {
    let [a, b, c, d] = word;
    [b, c, d, a]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_word(lhs: Word, rhs: Word) -> Word {
    [lhs[0] ^ rhs[0], lhs[1] ^ rhs[1], lhs[2] ^ rhs[2], lhs[3] ^ rhs[3]]
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [[0u8; 4]; WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in KEY_SIZE / 4..WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / 4 - 1];
        }
        w[i] = xor_word(w[i - 4], temp);
    }

    let mut round_keys = [[0u8; 16]; NUM_ROUNDS + 1];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(word);
        }
    }
    log::trace!("expanded AES-128 key into {} round keys", round_keys.len());

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..NUM_ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    // The final round has no MixColumns.
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(NUM_ROUNDS));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(NUM_ROUNDS));
    for round in (1..NUM_ROUNDS).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state
}
