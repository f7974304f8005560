// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Expansion of a secret key into the RC6 round key array `S`.
//!
use crate::type_traits::*;
use std::cmp::max;

/// The `RC6InitError` enum represents the possible errors that can occur while generating
/// a [KeySchedule], and with it during the [RC6](crate::RC6) initialization.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RC6InitError {
    #[error("invalid key length: `{0}`; must be a non-zero multiple of the `{1}` byte word size")]
    InvalidKeyLength(usize, usize),
}

/// The round key array `S` of `2 * r + 4` words derived from a secret key.
///
/// `S[0]` and `S[1]` whiten the block before the first round, `S[2 * i]` and
/// `S[2 * i + 1]` key round `i` and the last two words whiten the block after
/// the final round. Once generated the schedule is never modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySchedule<T> {
    words: Box<[T]>,
    rounds: u8,
}

impl<T: Word> KeySchedule<T> {
    /// Generates the schedule for `key` and `rounds` rounds.
    ///
    /// The key is packed into words most significant byte first and must be a non-zero
    /// whole number of words long, otherwise [RC6InitError::InvalidKeyLength] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::KeySchedule;
    ///
    /// let schedule = KeySchedule::<u32>::generate(b"SecretKey1234567", 20).unwrap();
    /// assert_eq!(schedule.words().len(), 44);
    /// ```
    pub fn generate(key: &[u8], rounds: u8) -> Result<KeySchedule<T>, RC6InitError> {
        if key.is_empty() || key.len() % T::BYTES != 0 {
            return Err(RC6InitError::InvalidKeyLength(key.len(), T::BYTES));
        }

        let mut l_arr: Box<[T]> = key
            .chunks_exact(T::BYTES)
            .map(|chunk| chunk.iter().fold(T::zero(), |word, &byte| word.push_byte(byte)))
            .collect();

        let p = pw::<T>();
        let q = qw::<T>();
        let t = 2 * rounds as usize + 4;
        let mut s_arr: Box<[T]> = std::iter::successors(Some(p), |x| Some(x.wrapping_add(&q)))
            .take(t)
            .collect();

        let total_count = 3 * max(s_arr.len(), l_arr.len());
        log::debug!(
            "rc6 key schedule: w = {}, r = {}, b = {}, c = {}, t = {}, mix iterations = {}",
            T::BITS,
            rounds,
            key.len(),
            l_arr.len(),
            t,
            total_count
        );

        let s_indices = (0..s_arr.len()).cycle();
        let l_indices = (0..l_arr.len()).cycle();

        let mut a = T::zero();
        let mut b = T::zero();
        for (i, j) in std::iter::zip(s_indices, l_indices).take(total_count) {
            // A = S[i] = (S[i] + A + B) <<< 3
            a = s_arr[i].wrapping_add(&a).wrapping_add(&b).rotl(3);
            s_arr[i] = a;
            // B = L[j] = (L[j] + A + B) <<< (A + B)
            let ab = a.wrapping_add(&b);
            b = l_arr[j].wrapping_add(&ab).rotl(ab.as_rotation());
            l_arr[j] = b;
        }

        Ok(KeySchedule {
            words: s_arr,
            rounds,
        })
    }

    /// All `2 * r + 4` words of the schedule in order.
    pub fn words(&self) -> &[T] {
        &self.words
    }

    /// The number of rounds the schedule was generated for.
    pub fn rounds(&self) -> u8 {
        self.rounds
    }

    /// `(S[0], S[1])`, added to `B` and `D` before the first round.
    pub fn pre_whitening(&self) -> (T, T) {
        (self.words[0], self.words[1])
    }

    /// `(S[2 * i], S[2 * i + 1])` for rounds `i = 1..=r`, in round order.
    pub fn round_keys(&self) -> impl DoubleEndedIterator<Item = (T, T)> + '_ {
        let last = self.words.len() - 2;
        self.words[2..last]
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
    }

    /// `(S[2 * r + 2], S[2 * r + 3])`, added to `A` and `C` after the last round.
    pub fn post_whitening(&self) -> (T, T) {
        let last = self.words.len() - 2;
        (self.words[last], self.words[last + 1])
    }
}

fn pw<T: FromU64>() -> T {
    let width = std::mem::size_of::<T>() * 8;
    // ODD((E - 2) * (1 << w))
    // constant for 64bit
    const P: u64 = 0xB7E151628AED2A6B;
    let p = P >> (64 - width);
    T::from_u64(p | 1)
}

fn qw<T: FromU64>() -> T {
    let width = std::mem::size_of::<T>() * 8;
    // ODD((PHI - 1) * (1 << w))
    // constant for 64bit
    const Q: u64 = 0x9E3779B97F4A7C15;
    let q = Q >> (64 - width);
    T::from_u64(q | 1)
}
