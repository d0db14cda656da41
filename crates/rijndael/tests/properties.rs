//! Property checks over arbitrary blocks and keys.

use proptest::prelude::*;
use rijndael::{
    add_round_key, decrypt_block, encrypt_block, expand_key, inv_mix_columns, inv_sbox,
    inv_shift_rows, inv_sub_bytes, mix_columns, sbox, shift_rows, sub_bytes, Aes128, Error, Input,
};

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(plaintext in any::<[u8; 16]>(), key in any::<[u8; 16]>()) {
        let ct = encrypt_block(&plaintext, &key).unwrap();
        prop_assert_eq!(decrypt_block(&ct, &key).unwrap(), plaintext);
    }

    #[test]
    fn encrypt_inverts_decrypt(ciphertext in any::<[u8; 16]>(), key in any::<[u8; 16]>()) {
        let aes = Aes128::from_slice(&key).unwrap();
        prop_assert_eq!(aes.encrypt_block(&aes.decrypt_block(&ciphertext)), ciphertext);
    }

    #[test]
    fn schedule_is_deterministic_and_starts_with_key(key in any::<[u8; 16]>()) {
        let first = expand_key(&key).unwrap();
        let second = expand_key(&key).unwrap();
        prop_assert_eq!(first, second);
        let flat = first.to_bytes();
        prop_assert_eq!(&flat[..16], &key[..]);
    }

    #[test]
    fn add_round_key_is_self_inverse(block in any::<[u8; 16]>(), round_key in any::<[u8; 16]>()) {
        let mut state = block;
        add_round_key(&mut state, &round_key);
        add_round_key(&mut state, &round_key);
        prop_assert_eq!(state, block);
    }

    #[test]
    fn shift_rows_pair_inverts(block in any::<[u8; 16]>()) {
        let mut state = block;
        shift_rows(&mut state);
        inv_shift_rows(&mut state);
        prop_assert_eq!(state, block);
        inv_shift_rows(&mut state);
        shift_rows(&mut state);
        prop_assert_eq!(state, block);
    }

    #[test]
    fn mix_columns_pair_inverts(block in any::<[u8; 16]>()) {
        let mut state = block;
        mix_columns(&mut state);
        inv_mix_columns(&mut state);
        prop_assert_eq!(state, block);
        inv_mix_columns(&mut state);
        mix_columns(&mut state);
        prop_assert_eq!(state, block);
    }

    #[test]
    fn sub_bytes_pair_inverts(block in any::<[u8; 16]>()) {
        let mut state = block;
        sub_bytes(&mut state);
        inv_sub_bytes(&mut state);
        prop_assert_eq!(state, block);
    }

    #[test]
    fn wrong_length_block_is_rejected(
        block in prop::collection::vec(any::<u8>(), 0..48)
            .prop_filter("not a block", |b| b.len() != 16),
        key in any::<[u8; 16]>(),
    ) {
        let expected = Error::InvalidLength { input: Input::Block, expected: 16, actual: block.len() };
        prop_assert_eq!(encrypt_block(&block, &key), Err(expected));
        prop_assert_eq!(decrypt_block(&block, &key), Err(expected));
    }

    #[test]
    fn wrong_length_key_is_rejected(
        key in prop::collection::vec(any::<u8>(), 0..48)
            .prop_filter("not a key", |k| k.len() != 16),
        block in any::<[u8; 16]>(),
    ) {
        let expected = Error::InvalidLength { input: Input::Key, expected: 16, actual: key.len() };
        prop_assert_eq!(encrypt_block(&block, &key), Err(expected));
        prop_assert_eq!(decrypt_block(&block, &key), Err(expected));
        prop_assert_eq!(expand_key(&key), Err(expected));
    }
}

#[test]
fn sbox_pair_inverts_all_bytes() {
    for x in 0..=255u8 {
        assert_eq!(inv_sbox(sbox(x)), x);
    }
}

#[test]
fn off_by_one_lengths_are_rejected() {
    for len in [15usize, 17] {
        let bytes = vec![0u8; len];
        assert!(matches!(
            encrypt_block(&bytes, &[0u8; 16]),
            Err(Error::InvalidLength { input: Input::Block, .. })
        ));
        assert!(matches!(
            encrypt_block(&[0u8; 16], &bytes),
            Err(Error::InvalidLength { input: Input::Key, .. })
        ));
    }
}

#[test]
fn single_bit_flip_avalanches() {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    let key: [u8; 16] = rng.gen();
    let aes = Aes128::from_slice(&key).unwrap();

    let samples = 512;
    let mut flipped_bits = 0u32;
    for _ in 0..samples {
        let plaintext: [u8; 16] = rng.gen();
        let mut tweaked = plaintext;
        let bit = rng.gen_range(0..128);
        tweaked[bit / 8] ^= 1 << (bit % 8);

        let a = aes.encrypt_block(&plaintext);
        let b = aes.encrypt_block(&tweaked);
        flipped_bits += a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| (x ^ y).count_ones())
            .sum::<u32>();
    }
    let mean = f64::from(flipped_bits) / (samples as f64 * 128.0);
    assert!((0.45..0.55).contains(&mean), "mean flip ratio {mean}");
}
