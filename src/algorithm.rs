// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! The implementaton details of the RC6 block cipher algorithm
//!
use crate::key_schedule::*;
use crate::type_traits::*;

/// The number of rounds used by [RC6::new], as in the AES submission of RC6-32/20/b.
pub const DEFAULT_ROUNDS: u8 = 20;

/// A block of four words `[A, B, C, D]`.
pub type Block<T> = [T; 4];

/// The RC6 struct represents an instance of the RC6 block cipher algorithm.
///
/// The `RC6` struct owns the [KeySchedule] generated from the key and provides methods
/// for encrypting and decrypting single four-word blocks. It holds no other state, so a
/// shared reference can be used from several threads at once.
#[derive(Clone, Debug)]
pub struct RC6<T> {
    schedule: KeySchedule<T>,
}

impl<T: Word> RC6<T> {
    /// Creates a new RC6 instance with the given key and [DEFAULT_ROUNDS] rounds.
    ///
    /// The `key` length must be a non-zero multiple of the word size in bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::{RC6, RC6InitError};
    ///
    /// let rc6 = RC6::<u32>::new(b"SecretKey1234567");
    /// assert!(rc6.is_ok());
    ///
    /// let rc6 = RC6::<u32>::new(b"odd");
    /// assert!(matches!(rc6, Err(RC6InitError::InvalidKeyLength(3, 4))));
    /// ```
    pub fn new(key: &[u8]) -> Result<RC6<T>, RC6InitError> {
        RC6::with_rounds(key, DEFAULT_ROUNDS)
    }

    /// Creates a new RC6 instance with the given key and number of rounds.
    pub fn with_rounds(key: &[u8], rounds: u8) -> Result<RC6<T>, RC6InitError> {
        let schedule = KeySchedule::generate(key, rounds)?;
        Ok(RC6 { schedule })
    }

    /// The round key array this instance encrypts with.
    pub fn schedule(&self) -> &KeySchedule<T> {
        &self.schedule
    }

    /// Encrypts the four-word block `[A, B, C, D]` and returns the ciphertext block.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::{RC6, RC6InitError};
    ///
    /// # fn main() -> Result<(), RC6InitError> {
    /// let rc6 = RC6::<u32>::new(b"SecretKey1234567")?;
    ///
    /// let ct = rc6.encrypt_words([0x12345678, 0x9ABCDEF0, 0x0FEDCBA9, 0x87654321]);
    ///
    /// assert_eq!(ct, [0x9AE89559, 0xB234CB7D, 0xF12F36E0, 0xFE7115C8]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn encrypt_words(&self, block: Block<T>) -> Block<T> {
        let [mut a, mut b, mut c, mut d] = block;

        let (s0, s1) = self.schedule.pre_whitening();
        b = b.wrapping_add(&s0);
        d = d.wrapping_add(&s1);

        for (s_a, s_c) in self.schedule.round_keys() {
            // t = (B * (2B + 1)) <<< lg w
            // u = (D * (2D + 1)) <<< lg w
            let t = quadratic(b);
            let u = quadratic(d);
            // A = ((A ^ t) <<< u) + S[2i]
            // C = ((C ^ u) <<< t) + S[2i + 1]
            a = (a ^ t).rotl(u.as_rotation()).wrapping_add(&s_a);
            c = (c ^ u).rotl(t.as_rotation()).wrapping_add(&s_c);

            (a, b, c, d) = (b, c, d, a);
        }

        let (s_last_a, s_last_c) = self.schedule.post_whitening();
        a = a.wrapping_add(&s_last_a);
        c = c.wrapping_add(&s_last_c);

        [a, b, c, d]
    }

    /// Decrypts the four-word block `[A, B, C, D]` and returns the plaintext block.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc6::{RC6, RC6InitError};
    ///
    /// # fn main() -> Result<(), RC6InitError> {
    /// let rc6 = RC6::<u32>::new(b"SecretKey1234567")?;
    ///
    /// let pt = rc6.decrypt_words([0x9AE89559, 0xB234CB7D, 0xF12F36E0, 0xFE7115C8]);
    ///
    /// assert_eq!(pt, [0x12345678, 0x9ABCDEF0, 0x0FEDCBA9, 0x87654321]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn decrypt_words(&self, block: Block<T>) -> Block<T> {
        let [mut a, mut b, mut c, mut d] = block;

        let (s_last_a, s_last_c) = self.schedule.post_whitening();
        c = c.wrapping_sub(&s_last_c);
        a = a.wrapping_sub(&s_last_a);

        for (s_a, s_c) in self.schedule.round_keys().rev() {
            // registers must be back in the order encryption saw them entering the round
            (a, b, c, d) = (d, a, b, c);

            let u = quadratic(d);
            let t = quadratic(b);
            // C = ((C - S[2i + 1]) >>> t) ^ u
            // A = ((A - S[2i]) >>> u) ^ t
            c = c.wrapping_sub(&s_c).rotr(t.as_rotation()) ^ u;
            a = a.wrapping_sub(&s_a).rotr(u.as_rotation()) ^ t;
        }

        let (s0, s1) = self.schedule.pre_whitening();
        d = d.wrapping_sub(&s1);
        b = b.wrapping_sub(&s0);

        [a, b, c, d]
    }
}

/// `(x * (2x + 1)) <<< lg w`
#[inline]
fn quadratic<T: Word>(x: T) -> T {
    let odd = x.wrapping_add(&x).wrapping_add(&T::one());
    x.wrapping_mul(&odd).rotl(T::LG_W)
}

/// The `RC6AlgoError` enum represents the possible errors that can occur during the
/// encryption decryption in [RC6Algo].
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RC6AlgoError {
    #[error("invalid input block size `{1}`, expected a `{0}` byte block of 4 words")]
    InvalidBlockSize(usize, usize),
}

/// The `RC6Algo` trait provides methods for encrypting and decrypting a block of bytes using
/// the RC6 block cipher algorithm. This trait is useful when the RC6 algorithm needs
/// to be constructed with a word size that is determined at runtime.
///
/// The block is read as four little-endian words `A, B, C, D`, the byte order of the
/// published RC6 test vectors.
pub trait RC6Algo {
    /// Encrypts the given block of bytes in place.
    ///
    /// Returns a reference to the encrypted bytes on success, or an [RC6AlgoError] if
    /// the slice is not exactly one block long.
    fn encrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError>;
    /// Decrypts the given block of bytes in place.
    ///
    /// Returns a reference to the decrypted bytes on success, or an [RC6AlgoError] if
    /// the slice is not exactly one block long.
    fn decrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError>;
}

impl<T: Word> RC6Algo for RC6<T> {
    fn encrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError> {
        let block = read_block::<T>(bytes)?;
        write_block(self.encrypt_words(block), bytes);
        Ok(bytes)
    }

    fn decrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC6AlgoError> {
        let block = read_block::<T>(bytes)?;
        write_block(self.decrypt_words(block), bytes);
        Ok(bytes)
    }
}

fn read_block<T: Word>(bytes: &[u8]) -> Result<Block<T>, RC6AlgoError> {
    let block_size = 4 * T::BYTES;
    let invalid = || RC6AlgoError::InvalidBlockSize(block_size, bytes.len());
    if bytes.len() != block_size {
        return Err(invalid());
    }

    let mut block = [T::zero(); 4];
    for (word, chunk) in block.iter_mut().zip(bytes.chunks_exact(T::BYTES)) {
        *word = T::from_le_slice(chunk).ok_or_else(invalid)?;
    }
    Ok(block)
}

fn write_block<T: Word>(block: Block<T>, bytes: &mut [u8]) {
    block
        .into_iter()
        .zip(bytes.chunks_exact_mut(T::BYTES))
        .for_each(|(word, chunk)| word.write_le(chunk));
}

/// The `RC6DynInitError` enum represents the possible errors that can occur during the
/// [RC6] initialization with runtime width using [new_rc6_dyn]
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RC6DynInitError {
    #[error("invalid width `{0}`; supported widths are: {{16, 32, 64}}")]
    InvalidWidth(usize),
    #[error("invalid key length: `{0}`; must be a non-zero multiple of the `{1}` byte word size")]
    InvalidKeyLength(usize, usize),
}

impl From<RC6InitError> for RC6DynInitError {
    fn from(value: RC6InitError) -> Self {
        match value {
            RC6InitError::InvalidKeyLength(len, word_bytes) => {
                RC6DynInitError::InvalidKeyLength(len, word_bytes)
            }
        }
    }
}

/// Constructs a new [RC6] encryption algorithm instance with a word width chosen at runtime.
///
/// # Arguments
///
/// * width - The bit width of the word size to be used in the algorithm (16, 32, or 64).
/// * rounds - The number of rounds of encryption to be performed by the algorithm.
/// * key - A slice of bytes representing the key to be used for encryption.
///
/// # Returns
///
/// A Result containing a boxed dyn [RC6Algo] instance on success, or a [RC6DynInitError] on failure.
///
/// # Examples
///
/// ```
/// use rc6::{new_rc6_dyn, RC6Algo};
///
/// let key = b"SecretKey1234567";
/// let algo = new_rc6_dyn(32, 20, key).unwrap();
/// let pt_org = [
///     0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D,
///     0x0E, 0x0F,
/// ];
/// let mut pt = pt_org.clone();
/// let ct = algo.encrypt(&mut pt).unwrap();
/// assert_ne!(pt_org[..], ct[..]);
/// let decrypted = algo.decrypt(ct).unwrap();
/// assert_eq!(pt_org[..], decrypted[..]);
/// ```
pub fn new_rc6_dyn(
    width: usize,
    rounds: u8,
    key: &[u8],
) -> Result<Box<dyn RC6Algo>, RC6DynInitError> {
    const W16: usize = std::mem::size_of::<u16>() * 8;
    const W32: usize = std::mem::size_of::<u32>() * 8;
    const W64: usize = std::mem::size_of::<u64>() * 8;
    log::debug!("rc6 dynamic instance: w = {width}, r = {rounds}");
    match width {
        W16 => Ok(Box::new(RC6::<u16>::with_rounds(key, rounds)?)),
        W32 => Ok(Box::new(RC6::<u32>::with_rounds(key, rounds)?)),
        W64 => Ok(Box::new(RC6::<u64>::with_rounds(key, rounds)?)),
        _ => Err(RC6DynInitError::InvalidWidth(width)),
    }
}
