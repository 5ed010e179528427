use std::fmt::Debug;

pub const RADIX: usize = 256;
pub const DIGIT_BITS: usize = 8;

/// Unsigned bit pattern that can be split into base-256 digits.
pub trait Digits: Copy + Ord + Debug {
    const BYTES: usize;

    /// Byte at `position`, where position 0 is the least significant byte.
    fn byte_at(self, position: usize) -> usize;

    fn from_byte(byte: u8) -> Self;
}

macro_rules! impl_digits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Digits for $ty {
                const BYTES: usize = std::mem::size_of::<$ty>();

                #[inline(always)]
                fn byte_at(self, position: usize) -> usize {
                    ((self >> (position * DIGIT_BITS)) & 0xFF) as usize
                }

                #[inline(always)]
                fn from_byte(byte: u8) -> Self {
                    byte as $ty
                }
            }
        )*
    };
}

impl_digits!(u8, u16, u32, u64);
