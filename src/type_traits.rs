// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Traits describing the machine words RC6 operates on: rotation with a masked amount,
//! construction of the magic constants and conversion to and from bytes.
//!

/// A trait for unsigned types that rotate by an amount taken modulo their bit width.
pub trait BitRotatable: Copy {
    fn rotl(self, amount: u32) -> Self;
    fn rotr(self, amount: u32) -> Self;

    /// The low `lg w` bits of the word, usable as a rotation amount.
    fn as_rotation(self) -> u32;
}

macro_rules! impl_bit_rotatable {
    ($($t:ty)*) => {
        $(
            impl BitRotatable for $t {
                #[inline]
                fn rotl(self, amount: u32) -> $t {
                    <$t>::rotate_left(self, rotation_amount::<$t>(amount))
                }

                #[inline]
                fn rotr(self, amount: u32) -> $t {
                    <$t>::rotate_right(self, rotation_amount::<$t>(amount))
                }

                #[inline]
                fn as_rotation(self) -> u32 {
                    // truncation keeps the low bits, which is all the rotation looks at
                    rotation_amount::<$t>(self as u32)
                }
            }
        )*
    };
}

impl_bit_rotatable!(u16 u32 u64);

/// A trait for types that can be created from a `u64` value.
pub trait FromU64 {
    fn from_u64(v: u64) -> Self;
}

macro_rules! impl_from_u64 {
    ($($ty:ty)*) => {
        $(
            impl FromU64 for $ty {
                #[inline]
                fn from_u64(v: u64) -> $ty {
                    v as $ty
                }
            }
        )*
    }
}

impl_from_u64!(u16 u32 u64);

/// A trait for words that are read from key bytes and from/to block bytes.
pub trait FromToBytes: Sized {
    /// Reads a word from exactly `size_of::<Self>()` little-endian bytes.
    fn from_le_slice(bytes: &[u8]) -> Option<Self>;

    /// Writes the word as little-endian bytes into `out`, which must be word sized.
    fn write_le(self, out: &mut [u8]);

    /// Shifts the word left by one byte and adds `byte`, wrapping on overflow.
    fn push_byte(self, byte: u8) -> Self;
}

macro_rules! impl_from_to_bytes {
    ($($t:ty)*) => {
        $(
            impl FromToBytes for $t {
                #[inline]
                fn from_le_slice(bytes: &[u8]) -> Option<$t> {
                    bytes.try_into().ok().map(<$t>::from_le_bytes)
                }

                #[inline]
                fn write_le(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_le_bytes());
                }

                #[inline]
                fn push_byte(self, byte: u8) -> $t {
                    self.wrapping_shl(8).wrapping_add(byte as $t)
                }
            }
        )*
    };
}

impl_from_to_bytes!(u16 u32 u64);

/// The word types the cipher can be instantiated with.
pub trait Word:
    num_traits::Unsigned
    + num_traits::WrappingAdd
    + num_traits::WrappingSub
    + num_traits::WrappingMul
    + std::ops::BitXor<Self, Output = Self>
    + std::fmt::Debug
    + Copy
    + BitRotatable
    + FromU64
    + FromToBytes
{
    /// Word width in bits.
    const BITS: u32;
    /// Word width in bytes.
    const BYTES: usize;
    /// Base two logarithm of the word width.
    const LG_W: u32;
}

macro_rules! impl_word {
    ($($t:ty)*) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const BYTES: usize = std::mem::size_of::<$t>();
                const LG_W: u32 = <$t>::BITS.trailing_zeros();
            }
        )*
    };
}

impl_word!(u16 u32 u64);

fn rotation_amount<T>(x: u32) -> u32 {
    x % (std::mem::size_of::<T>() * 8) as u32
}
