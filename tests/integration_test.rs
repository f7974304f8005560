// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

use rand::{Rng, RngCore};
use rc6::*;

pub const BITS_IN_BYTE: usize = 8;

macro_rules! test_concrete_vs_dynamic {
    ($name:ident, $t:ty) => {
        #[test]
        fn $name() {
            let key = [
                0x2B, 0xD6, 0x45, 0x9F, 0x82, 0xC5, 0xB3, 0x00, 0x95, 0x2C, 0x49, 0x10, 0x48, 0x81,
                0xFF, 0x48,
            ];
            let rounds = 20;
            let rc6_concrete = RC6::<$t>::with_rounds(&key, rounds);
            const W: usize = BITS_IN_BYTE * std::mem::size_of::<$t>();
            let rc6_dyn = new_rc6_dyn(W, rounds, &key);

            let mut pt = [0x5A; W * 4 / BITS_IN_BYTE];
            let mut pt_dyn = pt.clone();

            assert!(rc6_concrete.is_ok());
            assert!(rc6_dyn.is_ok());

            let res = rc6_concrete.map(|rc| RC6Algo::encrypt(&rc, &mut pt).is_ok());
            let res_dyn = rc6_dyn.map(|rc| rc.encrypt(&mut pt_dyn).is_ok());

            assert_eq!(res, Ok(true));
            assert_eq!(res_dyn, Ok(true));
            assert_ne!(pt[..], [0x5A; W * 4 / BITS_IN_BYTE][..]);
            assert_eq!(pt[..], pt_dyn[..]);
        }
    };
}

test_concrete_vs_dynamic!(test_concrete_vs_dynamic_16, u16);
test_concrete_vs_dynamic!(test_concrete_vs_dynamic_32, u32);
test_concrete_vs_dynamic!(test_concrete_vs_dynamic_64, u64);

macro_rules! test_encrypt_decrypt_full_message {
    ($name:ident, $t:ty) => {
        #[test]
        fn $name() {
            let key = b"my secret key!!!";
            let rc6 = RC6::<$t>::new(key).unwrap();

            let mut plaintext = b"hello there, this message spans several blocks".to_vec();
            const BLOCK_SIZE: usize = 4 * std::mem::size_of::<$t>();
            let padding_size = (BLOCK_SIZE - plaintext.len() % BLOCK_SIZE) % BLOCK_SIZE;
            plaintext.resize(plaintext.len() + padding_size, 0);

            let original = plaintext.clone();

            plaintext.chunks_exact_mut(BLOCK_SIZE).for_each(|block| {
                assert!(rc6.encrypt(block).is_ok());
            });

            assert_ne!(original, plaintext);

            plaintext.chunks_exact_mut(BLOCK_SIZE).for_each(|block| {
                assert!(rc6.decrypt(block).is_ok());
            });

            assert_eq!(original, plaintext);
        }
    };
}

test_encrypt_decrypt_full_message!(test_encrypt_decrypt_full_message_16, u16);
test_encrypt_decrypt_full_message!(test_encrypt_decrypt_full_message_32, u32);
test_encrypt_decrypt_full_message!(test_encrypt_decrypt_full_message_64, u64);

macro_rules! test_random_round_trip {
    ($name:ident, $t:ty) => {
        #[test]
        fn $name() {
            let mut rng = rand::thread_rng();
            for _ in 0..100 {
                let words = rng.gen_range(1..=8);
                let mut key = vec![0u8; words * std::mem::size_of::<$t>()];
                rng.fill_bytes(&mut key);
                let rounds = rng.gen_range(0..=32);
                let block: [$t; 4] = rng.gen();

                let rc6 = RC6::<$t>::with_rounds(&key, rounds).unwrap();
                assert_eq!(rc6.schedule().words().len(), 2 * rounds as usize + 4);

                let ct = rc6.encrypt_words(block);
                assert_eq!(rc6.decrypt_words(ct), block);
            }
        }
    };
}

test_random_round_trip!(test_random_round_trip_16, u16);
test_random_round_trip!(test_random_round_trip_32, u32);
test_random_round_trip!(test_random_round_trip_64, u64);

#[test]
fn known_vector_round_trip() {
    let rc6 = RC6::<u32>::new(b"SecretKey1234567").unwrap();
    let pt = [0x12345678, 0x9ABCDEF0, 0x0FEDCBA9, 0x87654321];

    let ct = rc6.encrypt_words(pt);
    assert_eq!(ct, [0x9AE89559, 0xB234CB7D, 0xF12F36E0, 0xFE7115C8]);
    assert_eq!(rc6.decrypt_words(ct), pt);
}

#[test]
fn invalid_key_lengths_rejected() {
    for len in [0, 3, 5] {
        let key = vec![0x11; len];
        assert_eq!(
            RC6::<u32>::new(&key).err(),
            Some(RC6InitError::InvalidKeyLength(len, 4))
        );
    }
}

#[test]
fn schedule_is_deterministic() {
    let mut rng = rand::thread_rng();
    let mut key = [0u8; 32];
    rng.fill_bytes(&mut key);

    let first = RC6::<u32>::new(&key).unwrap();
    let second = RC6::<u32>::new(&key).unwrap();
    assert_eq!(first.schedule(), second.schedule());
    assert_eq!(first.schedule().words().len(), 44);
}

#[test]
fn shared_between_threads() {
    let rc6 = RC6::<u32>::new(b"SecretKey1234567").unwrap();
    let blocks: Vec<[u32; 4]> = (0..8u32)
        .map(|i| [i, i.wrapping_mul(0x9E3779B9), !i, i << 16])
        .collect();
    let expected: Vec<[u32; 4]> = blocks.iter().map(|b| rc6.encrypt_words(*b)).collect();

    std::thread::scope(|scope| {
        for (block, ct) in blocks.iter().zip(expected.iter()) {
            let rc6 = &rc6;
            scope.spawn(move || {
                for _ in 0..1000 {
                    assert_eq!(rc6.encrypt_words(*block), *ct);
                    assert_eq!(rc6.decrypt_words(*ct), *block);
                }
            });
        }
    });
}
