// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! This library provides an implementation of the RC6 block cipher algorithm
//!
//! RC6 is a symmetric-key block cipher designed by Rivest, Robshaw, Sidney and Yin as an
//! AES candidate. It is parameterized as RC6-w/r/b: a word size of w bits (the block is
//! four words), r rounds and a b byte key. The standard instance is RC6-32/20/b.
//!
//! The key is expanded once into a schedule of `2 * r + 4` words with the same mixing as
//! RC5. Each round then combines the four words with a quadratic function and
//! data-dependent rotations. All word arithmetic wraps modulo 2^w and all rotation amounts
//! are taken modulo w.
//!
//! Keys are packed into words most significant byte first and must be a non-zero whole
//! number of words long.
//!
//! ```
//! use rc6::RC6;
//!
//! let rc6 = RC6::<u32>::new(b"SecretKey1234567").unwrap();
//! let pt = [0x12345678, 0x9ABCDEF0, 0x0FEDCBA9, 0x87654321];
//! let ct = rc6.encrypt_words(pt);
//! assert_eq!(rc6.decrypt_words(ct), pt);
//! ```

mod algorithm;
mod key_schedule;
mod type_traits;

pub use crate::algorithm::*;
pub use crate::key_schedule::{KeySchedule, RC6InitError};
pub use crate::type_traits::Word;
